//! Opal Utility Modules
//!
//! This crate provides the collaborator utilities consumed alongside the
//! container in `opal-prelude`:
//!
//! - [`logfmt`] - Positional `{}` template formatting for log lines
//! - [`fatal`] - Classification of unrecoverable errors and panic
//!   propagation
//!
//! # Example
//!
//! ```
//! use opal_utils::logfmt;
//!
//! let line = logfmt::format("value:[{}] rejected", &[&7]);
//! assert_eq!(line, "value:[7] rejected");
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod fatal;
pub mod logfmt;

// Re-export main entry points
pub use fatal::{is_fatal, is_nonfatal, rethrow};
pub use logfmt::format;
