//! Application layer: errors shared by settings loading and the CLI

pub mod error;

pub use error::{ApplicationError, ApplicationResult};
