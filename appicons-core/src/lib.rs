pub mod config;
pub mod converter;
pub mod layout;
pub mod pack;
pub mod rasterize;
pub mod sizes;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
