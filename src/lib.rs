pub mod config;
pub mod error;
pub mod pipeline;
pub mod prediction;
pub mod server;

pub use error::{Error, Result};
