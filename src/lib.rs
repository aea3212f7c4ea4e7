pub mod bumper;
pub mod config;
pub mod error;
pub mod manifest;
pub mod memory;
pub mod properties;
pub mod store;
pub mod ui;
pub mod version;

pub use error::{Result, VermanError};
