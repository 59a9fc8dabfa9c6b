use super::*;
use crate::signature::ArgumentBinder;

const EXPECTED_DOCUMENT: &str = "#include \"pch.h\"
#include \"iostream\"
#include \"gtest/gtest.h\"
#include \"gmock/gmock.h\"

#include \"Foo.h\"

namespace unittest {

usingFooTestTypes = ::testing::Types<bool>;
TYPED_TEST_SUITE(FooTestFooTestTypes);

class FooTest:public testing::Test
{
public:
FooTest(){
}
~FooTest(){
}
};
TYPED_TEST(FooTest,ShouldAdd){
\tint a=0;
\tstring b=\"\";
\tEXPECT_TRUE(2 == 2);
\tEXPECT_FALSE(2 == 1);
\tEXPECT_EQUALS(2, 2);
}
}
";

#[test]
fn full_document_matches_layout() {
    let builder = TestTemplateBuilder::default();
    let args = ArgumentBinder::default().bind("int a, string b");
    let document = builder.build_document("Foo.h", "FooTest", "Add", &args);
    assert_eq!(document, EXPECTED_DOCUMENT);
}

#[test]
fn case_without_arguments_has_only_assertions() {
    let builder = TestTemplateBuilder::default();
    let case = builder.build_case("FooTest", "Reset", &[]);
    assert_eq!(
        case,
        "TYPED_TEST(FooTest,ShouldReset){\n\tEXPECT_TRUE(2 == 2);\n\tEXPECT_FALSE(2 == 1);\n\tEXPECT_EQUALS(2, 2);\n}"
    );
}

#[test]
fn case_slots_expose_named_parts() {
    let builder = TestTemplateBuilder::default();
    let args = ArgumentBinder::default().bind("wstring name, Foo z");
    let slots = builder.case_slots("FooTest", "Rename", &args);
    assert_eq!(slots.case_name, "ShouldRename");
    assert_eq!(slots.argument_lines, vec!["wstring name=L\"\";", "Foo z;"]);
    assert_eq!(slots.assertion_lines.len(), 3);
}

#[test]
fn preamble_slots_use_config_defaults() {
    let builder = TestTemplateBuilder::default();
    let slots = builder.preamble_slots("Foo.h", "FooTest");
    assert_eq!(
        slots.includes,
        vec!["pch.h", "iostream", "gtest/gtest.h", "gmock/gmock.h"]
    );
    assert_eq!(slots.namespace, "unittest");
    assert_eq!(slots.suite_alias(), "FooTestTypes");
}

#[test]
fn declaration_ends_with_fixture_close() {
    let builder = TestTemplateBuilder::default();
    let declaration = builder.build_declaration("Foo.h", "FooTest");
    assert!(declaration.ends_with("};\n"));
    assert_eq!(declaration.matches("class FooTest:public testing::Test").count(), 1);
}

#[test]
fn strict_syntax_fixes_suite_and_assertion() {
    let config = TemplateConfig {
        strict_syntax: true,
        ..TemplateConfig::default()
    };
    let builder = TestTemplateBuilder::new(config);
    let document = builder.build_document("Foo.h", "FooTest", "Add", &[]);
    assert!(document.contains("using FooTestTypes = ::testing::Types<bool>;"));
    assert!(document.contains("TYPED_TEST_SUITE(FooTest, FooTestTypes);"));
    assert!(document.contains("\tEXPECT_EQ(2, 2);"));
    assert!(!document.contains("EXPECT_EQUALS"));
}

#[test]
fn custom_namespace_and_includes() {
    let config = TemplateConfig {
        includes: vec!["gtest/gtest.h".to_string()],
        namespace: "mylib_tests".to_string(),
        ..TemplateConfig::default()
    };
    let builder = TestTemplateBuilder::new(config);
    let declaration = builder.build_declaration("Foo.h", "FooTest");
    assert!(declaration.starts_with("#include \"gtest/gtest.h\"\n\n#include \"Foo.h\"\n"));
    assert!(declaration.contains("namespace mylib_tests {\n"));
}

#[test]
fn document_braces_are_balanced() {
    let builder = TestTemplateBuilder::default();
    let args = ArgumentBinder::default().bind("int a, Foo b");
    let document = builder.build_document("Foo.h", "FooTest", "Add", &args);
    assert_eq!(document.matches('{').count(), document.matches('}').count());
}
