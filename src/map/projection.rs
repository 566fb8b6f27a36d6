/// Plate carrée ("cyl") projection of the whole globe onto a canvas.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub width: f64,
    pub height: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
        }
    }
}

impl Projection {
    pub fn x(&self, longitude_deg: f64) -> f64 {
        (longitude_deg.clamp(-180.0, 180.0) + 180.0) / 360.0 * self.width
    }

    pub fn y(&self, latitude_deg: f64) -> f64 {
        (90.0 - latitude_deg.clamp(-90.0, 90.0)) / 180.0 * self.height
    }

    pub fn project(&self, latitude_deg: f64, longitude_deg: f64) -> (f64, f64) {
        (self.x(longitude_deg), self.y(latitude_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_centre() {
        let p = Projection::default();

        assert_eq!(p.project(90.0, -180.0), (0.0, 0.0));
        assert_eq!(p.project(-90.0, 180.0), (1200.0, 600.0));
        assert_eq!(p.project(0.0, 0.0), (600.0, 300.0));
    }

    #[test]
    fn clamps_outside_globe() {
        let p = Projection::default();
        assert_eq!(p.project(95.0, 200.0), (1200.0, 0.0));
    }
}
