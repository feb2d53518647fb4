#![deny(unsafe_code)]

pub mod config;
pub mod paths;
pub mod world;

pub use config::{MapConfig, OutputConfig, OutputFormat, PlotConfig};
pub use paths::{DATA_DIR_ENV_VAR, default_data_root};
pub use world::{WORLD_COUNTRIES, world_countries};
