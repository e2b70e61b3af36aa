//! Utility modules
//!
//! This module contains common utilities used throughout the library,
//! including error handling, logging setup, and the interpolation primitive.

pub mod errors;
pub mod interpolate;
pub mod logging;

pub use errors::{I18nError, Result};
pub use interpolate::interpolate;
