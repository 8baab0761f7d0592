pub mod assertion;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod logging;
pub mod ui;

pub use error::{Result, TaggerError};
