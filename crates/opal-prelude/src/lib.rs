//! Opal Prelude - the optional-value container
//!
//! This crate provides [`Maybe`], a two-variant optional-value container
//! with the full monadic combinator contract:
//!
//! - Construction from nullable interop values (`Option`)
//! - Transformation: `map`, `flat_map`, `flatten`
//! - Filtering and query helpers
//! - Extraction with checked, panicking, and fallback access
//!
//! Strict operations report violations as ordinary [`MaybeError`] values;
//! the crate performs no recovery and no logging of its own.

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod maybe;

pub use error::MaybeError;
pub use maybe::Maybe;
