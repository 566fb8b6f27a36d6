mod outline;
mod projection;
mod view;

pub use outline::WorldOutline;
pub use projection::Projection;
pub use view::MapView;
