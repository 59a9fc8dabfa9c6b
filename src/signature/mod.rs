//! Signature extraction from a single line of C++ source.
//!
//! [`SignatureParser`] splits a declaration line into a method name and its raw
//! parameter text; [`ArgumentBinder`] turns that text into typed argument
//! declarations with default initializers.

mod binder;
mod parser;
mod types;

pub use binder::{ArgumentBinder, default_initializers};
pub use parser::SignatureParser;
pub use types::{Argument, RawSignature};
