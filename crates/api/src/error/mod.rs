//! Error handling for the kcrypt ecosystem

pub mod types;

pub use types::{Error, Result};
