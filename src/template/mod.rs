//! Test skeleton text generation.
//!
//! [`TestNaming`] derives file and class names from the source path,
//! [`TemplateSlots`]/[`CaseSlots`] hold the named pieces of the document, and
//! [`TestTemplateBuilder`] fills them from a parsed signature.

mod builder;
mod naming;
mod slots;

pub use builder::TestTemplateBuilder;
pub use naming::TestNaming;
pub use slots::{CaseSlots, TemplateSlots, placeholder_assertions};

/// Prefix of every generated test case name.
pub const CASE_PREFIX: &str = "Should";
