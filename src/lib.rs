pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod server;

pub use error::{Error, Result};
