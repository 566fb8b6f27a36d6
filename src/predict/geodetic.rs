use serde::Serialize;
use utoipa::ToSchema;

// WGS-84, kilometres
const EQUATORIAL_RADIUS_KM: f64 = 6378.137;
const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Geodetic position with height above the ellipsoid.
#[derive(Debug, Clone, Copy)]
pub struct Geodetic {
    pub point: GeoPoint,
    pub height_km: f64,
}

pub fn teme_to_ecef_position(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let cos_gmst = gmst.cos();
    let sin_gmst = gmst.sin();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

pub fn ecef_to_geodetic(ecef_km: [f64; 3]) -> Geodetic {
    let [x, y, z] = ecef_km;
    let e2 = FLATTENING * (2.0 - FLATTENING);
    let polar_radius = EQUATORIAL_RADIUS_KM * (1.0 - FLATTENING);

    let lon = y.atan2(x);
    let p = x.hypot(y);

    if p < 1e-9 {
        let lat = if z >= 0.0 { 90.0 } else { -90.0 };
        return Geodetic {
            point: GeoPoint::new(lat, 0.0),
            height_km: z.abs() - polar_radius,
        };
    }

    let mut lat = (z / ((1.0 - e2) * p)).atan();
    let mut height = 0.0;

    for _ in 0..20 {
        let n = EQUATORIAL_RADIUS_KM / (1.0 - e2 * lat.sin().powi(2)).sqrt();
        height = p / lat.cos() - n;
        let next = (z / ((1.0 - e2 * (n / (n + height))) * p)).atan();
        if (next - lat).abs() < 1e-12 {
            lat = next;
            break;
        }
        lat = next;
    }

    Geodetic {
        point: GeoPoint::new(lat.to_degrees(), lon.to_degrees()),
        height_km: height,
    }
}
