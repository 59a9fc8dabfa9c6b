use std::fmt::Write;

/// Placeholder assertions emitted into every new case.
///
/// These are scaffolding for the user to replace. `strict` swaps the last one
/// for the real gtest macro name.
#[must_use]
pub fn placeholder_assertions(strict: bool) -> Vec<String> {
    let equals = if strict {
        "EXPECT_EQ(2, 2);"
    } else {
        "EXPECT_EQUALS(2, 2);"
    };
    vec![
        "EXPECT_TRUE(2 == 2);".to_string(),
        "EXPECT_FALSE(2 == 1);".to_string(),
        equals.to_string(),
    ]
}

/// Named pieces of the file preamble: includes, namespace, suite and fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSlots {
    pub includes: Vec<String>,
    pub header_file_name: String,
    pub namespace: String,
    pub class_name: String,
    pub base_class: String,
    pub type_list: String,
    /// Emit `using X Types` / `TYPED_TEST_SUITE(X, XTypes)` instead of the
    /// historical run-together forms.
    pub strict_syntax: bool,
}

impl TemplateSlots {
    #[must_use]
    pub fn suite_alias(&self) -> String {
        format!("{}Types", self.class_name)
    }

    /// Everything up to and including the fixture's closing `};`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for include in &self.includes {
            let _ = writeln!(out, "#include \"{include}\"");
        }
        out.push('\n');
        let _ = writeln!(out, "#include \"{}\"", self.header_file_name);
        out.push('\n');
        let _ = writeln!(out, "namespace {} {{", self.namespace);
        out.push('\n');
        out.push_str(&self.render_suite());
        out.push('\n');
        out.push_str(&self.render_fixture());
        out
    }

    fn render_suite(&self) -> String {
        let class = &self.class_name;
        let alias = self.suite_alias();
        let type_list = &self.type_list;
        if self.strict_syntax {
            format!(
                "using {alias} = ::testing::Types<{type_list}>;\nTYPED_TEST_SUITE({class}, {alias});\n"
            )
        } else {
            format!("using{alias} = ::testing::Types<{type_list}>;\nTYPED_TEST_SUITE({class}{alias});\n")
        }
    }

    fn render_fixture(&self) -> String {
        let class = &self.class_name;
        format!(
            "class {class}:{}\n{{\npublic:\n{class}(){{\n}}\n~{class}(){{\n}}\n}};\n",
            self.base_class
        )
    }
}

/// Named pieces of a single typed test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSlots {
    pub class_name: String,
    pub case_name: String,
    pub argument_lines: Vec<String>,
    pub assertion_lines: Vec<String>,
}

impl CaseSlots {
    /// `TYPED_TEST(Class,Case){ ... }` without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("TYPED_TEST({},{}){{\n", self.class_name, self.case_name);
        for line in self.argument_lines.iter().chain(&self.assertion_lines) {
            let _ = writeln!(out, "\t{line}");
        }
        out.push('}');
        out
    }
}
