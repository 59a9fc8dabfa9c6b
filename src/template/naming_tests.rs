use super::*;

#[test]
fn windows_path_names() {
    let naming = TestNaming::default();
    let header = naming.header_file_name(r"C:\proj\Foo.cpp");
    assert_eq!(header, "Foo.h");
    assert_eq!(naming.test_class_name(&header), "FooTest");
    assert_eq!(naming.test_file_name(r"C:\proj\Foo.cpp"), "FooTest.cpp");
}

#[test]
fn unix_path_names() {
    let naming = TestNaming::default();
    assert_eq!(naming.header_file_name("/src/net/Socket.cpp"), "Socket.h");
    assert_eq!(naming.test_file_name("/src/net/Socket.cpp"), "SocketTest.cpp");
}

#[test]
fn dotted_stem_keeps_inner_dots() {
    let naming = TestNaming::default();
    assert_eq!(naming.header_file_name("io.reader.cpp"), "io.reader.h");
    assert_eq!(naming.test_class_name("io.reader.h"), "io.readerTest");
}

#[test]
fn source_extension_check() {
    let naming = TestNaming::default();
    assert!(naming.is_source_file(r"C:\proj\Foo.cpp"));
    assert!(!naming.is_source_file("Foo.h"));
    assert!(!naming.is_source_file("Foo.CPP"));
    assert!(!naming.is_source_file("Makefile"));
}

#[test]
fn custom_naming_config() {
    let config = NamingConfig {
        source_extension: "cc".to_string(),
        header_extension: "hpp".to_string(),
        test_suffix: "_test".to_string(),
    };
    let naming = TestNaming::from_config(&config);
    assert!(naming.is_source_file("lib/parser.cc"));
    assert_eq!(naming.header_file_name("lib/parser.cc"), "parser.hpp");
    assert_eq!(naming.test_class_name("parser.hpp"), "parser_test");
    assert_eq!(naming.test_file_name("lib/parser.cc"), "parser_test.cc");
}
