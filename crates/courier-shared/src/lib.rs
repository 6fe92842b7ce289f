//! # courier-shared
//!
//! Types shared by every crate in the courier workspace: identifier
//! newtypes, domain enums, the error taxonomy, fixed UI constants and
//! small pure helpers.

pub mod constants;
pub mod format;
pub mod types;

mod error;

pub use error::{CallError, CourierError, ValidationError};
