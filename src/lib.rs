//! vinoteca - wine-tasting notebook core library
//!
//! This library provides the domain model, persistence, and label-text
//! parsing behind the vinoteca GUI.
//!
//! # Modules
//!
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`ocr`]: Label text parsing
//! - [`store`]: Tasting record store

pub mod domain;
pub mod error;
pub mod ocr;
pub mod store;

pub use error::{AppError, Result};
