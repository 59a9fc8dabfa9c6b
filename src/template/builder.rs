use crate::config::TemplateConfig;
use crate::signature::Argument;

use super::CASE_PREFIX;
use super::slots::{CaseSlots, TemplateSlots, placeholder_assertions};

/// Builds gtest skeleton text from a parsed signature.
///
/// Pure: it only produces strings. Deciding where they go is the job of
/// [`crate::store::TestFileStore`].
#[derive(Debug, Clone, Default)]
pub struct TestTemplateBuilder {
    config: TemplateConfig,
}

impl TestTemplateBuilder {
    #[must_use]
    pub const fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn preamble_slots(&self, header_file_name: &str, class_name: &str) -> TemplateSlots {
        TemplateSlots {
            includes: self.config.includes.clone(),
            header_file_name: header_file_name.to_string(),
            namespace: self.config.namespace.clone(),
            class_name: class_name.to_string(),
            base_class: self.config.base_class.clone(),
            type_list: self.config.type_list.clone(),
            strict_syntax: self.config.strict_syntax,
        }
    }

    #[must_use]
    pub fn case_slots(&self, class_name: &str, method_name: &str, args: &[Argument]) -> CaseSlots {
        CaseSlots {
            class_name: class_name.to_string(),
            case_name: format!("{CASE_PREFIX}{method_name}"),
            argument_lines: args.iter().map(Argument::declaration).collect(),
            assertion_lines: placeholder_assertions(self.config.strict_syntax),
        }
    }

    /// Include block, namespace open, suite declaration and fixture class.
    #[must_use]
    pub fn build_declaration(&self, header_file_name: &str, class_name: &str) -> String {
        self.preamble_slots(header_file_name, class_name).render()
    }

    /// One `TYPED_TEST` block for `method_name`.
    #[must_use]
    pub fn build_case(&self, class_name: &str, method_name: &str, args: &[Argument]) -> String {
        self.case_slots(class_name, method_name, args).render()
    }

    /// A complete new test file: preamble, one case, and the namespace close.
    #[must_use]
    pub fn build_document(
        &self,
        header_file_name: &str,
        class_name: &str,
        method_name: &str,
        args: &[Argument],
    ) -> String {
        let mut document = self.build_declaration(header_file_name, class_name);
        document.push_str(&self.build_case(class_name, method_name, args));
        document.push_str("\n}\n");
        document
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
