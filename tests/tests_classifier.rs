//! Classifier Tests - Categories
//!
//! Category assignment through the public engine: keyword tables, typedef
//! tracking, tag names, and the context rules for `*`, `:`, and `++`.

use rstest::rstest;

use ctint::{classify, classify_with, Category, Options};

#[path = "helpers/source_fixtures.rs"]
mod source_fixtures;

use source_fixtures::{assert_full_coverage, category_of, nth_category_of, TYPEDEF_PAIR};

/// Classify and return the category of the first annotation spelled `needle`
fn first(source: &str, needle: &str) -> Category {
    category_of(&classify(source), source, needle)
}

// ============================================================================
// Keywords, identifiers, literals
// ============================================================================

#[rstest]
#[case("return x;", "return", Category::Keyword)]
#[case("return x;", "x", Category::Identifier)]
#[case("while (1) {}", "while", Category::Keyword)]
#[case("sizeof(int)", "sizeof", Category::Keyword)]
#[case("_Static_assert(1, \"\");", "_Static_assert", Category::Keyword)]
#[case("x = NULL;", "NULL", Category::Keyword)]
#[case("bool ok = true;", "true", Category::Keyword)]
#[case("int x = 42;", "42", Category::NumericLiteral)]
#[case("float f = 98.6f;", "98.6f", Category::NumericLiteral)]
#[case("char *s = \"hi\";", "\"hi\"", Category::StringLiteral)]
#[case("char c = 'c';", "'c'", Category::CharLiteral)]
#[case("// note\nint x;", "// note", Category::Comment)]
#[case("/* note */ int x;", "/* note */", Category::Comment)]
#[case("#include <errno.h>\n", "#include <errno.h>", Category::PreprocessorDirective)]
#[case("a @ b;", "@", Category::Unknown)]
fn test_basic_categories(
    #[case] source: &str,
    #[case] needle: &str,
    #[case] expected: Category,
) {
    assert_eq!(first(source, needle), expected, "source: {source:?}");
}

// ============================================================================
// Typedef tracking
// ============================================================================

#[test]
fn test_typedef_use_becomes_typename() {
    let result = classify(TYPEDEF_PAIR);
    assert!(result.ok());
    assert_eq!(
        nth_category_of(&result, TYPEDEF_PAIR, "uint", 0),
        Category::Identifier,
        "the declaration introduces the name"
    );
    assert_eq!(
        nth_category_of(&result, TYPEDEF_PAIR, "uint", 1),
        Category::TypeName,
        "the later use is a known type"
    );
}

#[test]
fn test_struct_typedef_registers_alias() {
    let source = "typedef struct Node { int v; } NodeList;\nNodeList head;";
    let result = classify(source);
    assert_eq!(category_of(&result, source, "Node"), Category::TypeName);
    assert_eq!(
        nth_category_of(&result, source, "NodeList", 1),
        Category::TypeName
    );
    // members inside the braces are not typedef candidates
    assert_eq!(category_of(&result, source, "v"), Category::Identifier);
}

#[test]
fn test_function_pointer_typedef() {
    let source = "typedef int (*callback)(int, int);\ncallback handler;";
    let result = classify(source);
    assert_eq!(
        nth_category_of(&result, source, "callback", 1),
        Category::TypeName
    );
    assert_eq!(category_of(&result, source, "handler"), Category::Identifier);
}

#[test]
fn test_typedef_comma_separated_names() {
    let source = "typedef long A, B;\nA first;\nB second;";
    let result = classify(source);
    assert_eq!(nth_category_of(&result, source, "A", 1), Category::TypeName);
    assert_eq!(nth_category_of(&result, source, "B", 1), Category::TypeName);
}

#[test]
fn test_seeded_typedefs_option() {
    let source = "size_t n = 0;";
    let unseeded = classify(source);
    assert_eq!(category_of(&unseeded, source, "size_t"), Category::Identifier);
    let seeded = classify_with(source, &Options::with_stdlib_typedefs());
    assert_eq!(category_of(&seeded, source, "size_t"), Category::TypeName);
}

// ============================================================================
// Tags
// ============================================================================

#[rstest]
#[case("struct Point { int x; };", "Point")]
#[case("enum Color { RED };", "Color")]
#[case("union Value { int i; };", "Value")]
fn test_tag_name_is_typename(#[case] source: &str, #[case] tag: &str) {
    assert_eq!(first(source, tag), Category::TypeName);
}

#[test]
fn test_defined_tag_known_on_later_use() {
    let source = "struct Point { int x; };\nstruct Point origin;";
    let result = classify(source);
    assert_eq!(
        nth_category_of(&result, source, "Point", 1),
        Category::TypeName
    );
}

#[test]
fn test_forward_tag_reference_not_registered() {
    // no body, so the name is not committed to the table
    let source = "struct Opaque *handle;\nOpaque x;";
    let result = classify(source);
    assert_eq!(
        nth_category_of(&result, source, "Opaque", 0),
        Category::TypeName,
        "after the tag keyword the name still reads as a type"
    );
    assert_eq!(
        nth_category_of(&result, source, "Opaque", 1),
        Category::Identifier,
        "without a definition the bare name is unknown"
    );
}

// ============================================================================
// Star: declarator vs multiplication
// ============================================================================

#[rstest]
#[case("int *p;", Category::Punctuation)]
#[case("char **argv;", Category::Punctuation)]
#[case("a * b;", Category::Operator)]
#[case("x = *p;", Category::Operator)]
#[case("x = a * 2;", Category::Operator)]
#[case("f(*p);", Category::Operator)]
fn test_star_contexts(#[case] source: &str, #[case] expected: Category) {
    assert_eq!(first(source, "*"), expected, "source: {source:?}");
}

#[test]
fn test_star_after_registered_typedef() {
    let source = "typedef long word;\nword *w;";
    assert_eq!(first(source, "*"), Category::Punctuation);
}

// ============================================================================
// Colon: ternary vs label vs case
// ============================================================================

#[test]
fn test_ternary_colon_and_question() {
    let source = "r = ok ? a : b;";
    let result = classify(source);
    assert_eq!(category_of(&result, source, "?"), Category::Operator);
    assert_eq!(category_of(&result, source, ":"), Category::Operator);
}

#[test]
fn test_nested_ternary_in_call() {
    let source = "r = a ? f(b ? c : d) : e;";
    let result = classify(source);
    let colons: Vec<_> = result
        .annotations
        .iter()
        .filter(|a| &source[a.range] == ":")
        .map(|a| a.category)
        .collect();
    assert_eq!(colons, vec![Category::Operator, Category::Operator]);
    assert!(result.ok());
}

#[test]
fn test_label_colon_is_punctuation() {
    let source = "void f(void) {\nretry:\n    x();\n    goto retry;\n}";
    let result = classify(source);
    assert_eq!(
        nth_category_of(&result, source, "retry", 0),
        Category::Label
    );
    assert_eq!(category_of(&result, source, ":"), Category::Punctuation);
    assert_eq!(
        nth_category_of(&result, source, "retry", 1),
        Category::Label,
        "goto target pairs with its label"
    );
}

#[test]
fn test_case_arm_is_not_a_label() {
    let source = "switch (v) { case LIMIT: break; default: break; }";
    let result = classify(source);
    assert_eq!(category_of(&result, source, "case"), Category::Keyword);
    assert_eq!(category_of(&result, source, "LIMIT"), Category::Identifier);
    assert_eq!(category_of(&result, source, "default"), Category::Keyword);
    assert_eq!(category_of(&result, source, ":"), Category::Punctuation);
}

#[test]
fn test_bitfield_colon_is_punctuation() {
    let source = "struct Flags { unsigned ready : 1; };";
    let result = classify(source);
    assert_eq!(category_of(&result, source, "ready"), Category::Identifier);
    assert_eq!(category_of(&result, source, ":"), Category::Punctuation);
}

// ============================================================================
// Increment / decrement
// ============================================================================

#[rstest]
#[case("i++;")]
#[case("++i;")]
#[case("i--;")]
#[case("--i;")]
#[case("a[i]++;")]
fn test_increment_always_operator(#[case] source: &str) {
    let needle = if source.contains("++") { "++" } else { "--" };
    assert_eq!(first(source, needle), Category::Operator);
}

// ============================================================================
// Casts
// ============================================================================

#[test]
fn test_cast_parens_stay_punctuation() {
    let source = "typedef unsigned char byte;\nx = (byte)(v);";
    let result = classify(source);
    assert_eq!(
        nth_category_of(&result, source, "byte", 1),
        Category::TypeName
    );
    assert_eq!(nth_category_of(&result, source, "(", 0), Category::Punctuation);
    assert_eq!(nth_category_of(&result, source, "(", 1), Category::Punctuation);
    assert_full_coverage(source, &result);
}

#[test]
fn test_unknown_cast_type_stays_identifier() {
    let source = "x = (mystery)(v);";
    let result = classify(source);
    assert_eq!(category_of(&result, source, "mystery"), Category::Identifier);
}
