pub mod error;
pub mod observer;
pub mod query;
pub mod satellite;
