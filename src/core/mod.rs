pub mod config;
pub mod constants;
pub mod geo;
pub mod location;
pub mod map;
pub mod viewport;
