//! Core library components.
//!
//! Everything needed to turn a directory of mounted secret files into
//! environment variables, independent of the command-line interface.

pub mod constants;
pub mod env;
pub mod loader;
pub mod options;
pub mod transform;
pub mod types;
