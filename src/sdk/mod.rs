pub mod app;
pub mod config;
pub mod field;
pub mod routing;
pub mod util;
