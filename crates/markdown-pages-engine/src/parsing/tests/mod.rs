//! Integration tests for the parsing module.
//!
//! Uses snapshot testing of the rendered HTML.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use rstest::rstest;

use crate::{
    error::ConvertError,
    html::render,
    parsing::{blocks::BlockType, parse_document, parse_document_bytes},
};

// Fixture-based snapshot tests

#[rstest]
#[case("headings_and_emphasis")]
#[case("lists")]
#[case("code_and_quote")]
#[case("links_and_images")]
#[case("malformed_blocks")]
fn fixture(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let html = render(&parse_document(&md).unwrap());
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Document-level behavior

#[test]
fn empty_document_is_empty_div() {
    assert_eq!(render(&parse_document("").unwrap()), "<div></div>");
}

#[test]
fn blank_lines_only() {
    assert_eq!(render(&parse_document("\n\n\n").unwrap()), "<div></div>");
}

#[test]
fn block_order_is_preserved() {
    let root = parse_document("third? no, first\n\n- second\n\n# third").unwrap();
    let tags: Vec<_> = root.children().iter().filter_map(|c| c.tag()).collect();
    assert_eq!(tags, vec!["p", "ul", "h1"]);
}

#[test]
fn one_bad_block_aborts_the_document() {
    let err = parse_document("fine\n\nnot _fine\n\nfine again").unwrap_err();
    assert_eq!(err, ConvertError::UnterminatedDelimiter { delimiter: "_" });
}

#[test]
fn windows_line_endings_segment_like_unix() {
    let unix = render(&parse_document("# Hi\n\n- a\n- b").unwrap());
    let windows = render(&parse_document("# Hi\r\n\r\n- a\r\n- b").unwrap());
    assert_eq!(unix, windows);
}

#[test]
fn invalid_utf8_bytes_are_invalid_input() {
    let err = parse_document_bytes(&[b'#', b' ', 0xC3, 0x28]).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInput(_)));
}

#[test]
fn every_block_type_reaches_the_tree() {
    let md = "# h\n\n```\nc\n```\n\n> q\n\n- u\n\n1. o\n\np";
    let root = parse_document(md).unwrap();
    let types: Vec<_> = crate::parsing::blocks::segment_blocks(md)
        .into_iter()
        .map(crate::parsing::blocks::classify_block)
        .collect();
    assert_eq!(
        types,
        vec![
            BlockType::Heading(1),
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
            BlockType::Paragraph,
        ]
    );
    assert_eq!(root.children().len(), types.len());
}
