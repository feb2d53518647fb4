//! Library side of the `gdpmap` binary: logging setup and the map pipeline.

pub mod logging;
pub mod pipeline;
