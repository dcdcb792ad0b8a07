pub mod boot;
pub mod config;
pub mod controllers;
pub mod debounce;
pub mod viewport;

pub use config::{ConfigError, PageConfig};
