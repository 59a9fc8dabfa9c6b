use super::*;

const GENERATED: &str = "namespace unittest {\n\nclass FooTest:public testing::Test\n{\npublic:\nFooTest(){\n}\n~FooTest(){\n}\n};\nTYPED_TEST(FooTest,ShouldAdd){\n\tint a=0;\n}\n}\n";

// =============================================================================
// insertion_point
// =============================================================================

#[test]
fn insertion_point_is_final_brace() {
    let idx = insertion_point(GENERATED).unwrap();
    assert_eq!(idx, GENERATED.len() - 2);
    assert_eq!(&GENERATED[idx..], "}\n");
}

#[test]
fn insertion_point_allows_trailing_comment() {
    let text = "namespace unittest {\n}  // namespace unittest\n";
    let idx = insertion_point(text).unwrap();
    assert_eq!(&text[idx..idx + 1], "}");
    assert!(text[idx..].contains("// namespace"));
}

#[test]
fn braces_in_strings_and_comments_are_ignored() {
    let text = "namespace a {\nconst char* s = \"}}}\";\nchar c = '{';\n// }\n/* { } } */\n}\n";
    let idx = insertion_point(text).unwrap();
    assert_eq!(idx, text.len() - 2);
}

#[test]
fn escaped_quote_does_not_end_string() {
    let text = "namespace a {\nconst char* s = \"\\\"}\";\n}\n";
    assert_eq!(insertion_point(text).unwrap(), text.len() - 2);
}

#[test]
fn digit_separator_is_not_a_char_literal() {
    let text = "namespace unittest {\nTYPED_TEST(A,B){\n\tint x = 1'000; }\n}\n";
    assert_eq!(insertion_point(text).unwrap(), text.len() - 2);
}

#[test]
fn hex_digit_separators_are_skipped() {
    let text = "namespace a {\nauto m = 0xFF'FF'00; }\n";
    assert_eq!(insertion_point(text).unwrap(), text.len() - 2);
}

#[test]
fn prefixed_char_literals_hide_braces() {
    let text = "namespace a {\nwchar_t w = L'}';\nchar8_t c = u8'{';\nchar16_t u = u'}';\n}\n";
    assert_eq!(insertion_point(text).unwrap(), text.len() - 2);
}

#[test]
fn rejects_unbalanced_open() {
    let err = insertion_point("namespace a {\nvoid f() {\n}\n").unwrap_err();
    assert!(err.contains("left open"));
}

#[test]
fn rejects_unexpected_close() {
    let err = insertion_point("}\n}\n").unwrap_err();
    assert!(err.contains("unexpected"));
}

#[test]
fn rejects_content_after_last_brace() {
    let err = insertion_point("namespace a {\n}\nint x;\n").unwrap_err();
    assert!(err.contains("follows"));
}

#[test]
fn rejects_file_without_braces() {
    assert!(insertion_point("").is_err());
    assert!(insertion_point("int x;\n").is_err());
}

// =============================================================================
// insert_case
// =============================================================================

#[test]
fn insert_case_places_case_before_namespace_close() {
    let case = "TYPED_TEST(FooTest,ShouldSub){\n\tEXPECT_TRUE(2 == 2);\n}";
    let out = insert_case(GENERATED, case).unwrap();

    assert!(out.ends_with("\tint a=0;\n}\n\nTYPED_TEST(FooTest,ShouldSub){\n\tEXPECT_TRUE(2 == 2);\n}\n}\n"));
    assert!(out.starts_with("namespace unittest {\n"));
}

#[test]
fn repeated_inserts_stay_balanced() {
    let mut text = GENERATED.to_string();
    for name in ["A", "B", "C"] {
        let case = format!("TYPED_TEST(FooTest,Should{name}){{\n}}");
        text = insert_case(&text, &case).unwrap();
    }

    assert_eq!(text.matches('{').count(), text.matches('}').count());
    assert_eq!(text.matches("class FooTest").count(), 1);
    assert_eq!(
        case_names(&text),
        vec!["ShouldAdd", "ShouldA", "ShouldB", "ShouldC"]
    );
    assert!(insertion_point(&text).is_ok());
}

#[test]
fn insert_case_keeps_text_without_trailing_newline() {
    let out = insert_case("namespace a {\n}", "TYPED_TEST(X,ShouldY){\n}").unwrap();
    assert_eq!(out, "namespace a {\n\nTYPED_TEST(X,ShouldY){\n}\n}");
}

// =============================================================================
// case_names
// =============================================================================

#[test]
fn case_names_tolerates_spacing() {
    let text = "TYPED_TEST( FooTest , ShouldRun ) {\n}\nTYPED_TEST(FooTest,ShouldStop){}";
    assert_eq!(case_names(text), vec!["ShouldRun", "ShouldStop"]);
}

#[test]
fn case_names_empty_for_plain_text() {
    assert!(case_names("int main() {}").is_empty());
}
