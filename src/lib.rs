pub mod app;
pub mod core;
pub mod locator;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
