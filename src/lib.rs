pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::local::LocalDirectory;
pub use crate::core::{engine::EmbedEngine, pipeline::ObjcPipeline};
pub use crate::utils::error::{EmbedError, Result};
