use seedata::node::{IdGen, Node};
use seedata::types::NodeType;
use seedata::{DataFile, SeeDataError, SourceFormat};

fn int(value: i32) -> Node {
    Node::Int {
        ty: NodeType::Integer0,
        value,
    }
}

fn string(value: &str) -> Node {
    Node::Str {
        ty: NodeType::String,
        value: value.as_bytes().to_vec(),
    }
}

fn array(id: i16, children: Vec<Node>) -> Node {
    Node::Array {
        ty: NodeType::Array,
        id,
        children,
    }
}

#[test]
fn end_to_end_example_encodes() -> Result<(), Box<dyn std::error::Error>> {
    let file = DataFile {
        root: array(1, vec![int(42), string("hi")]),
        format: SourceFormat::Binary,
    };

    let text = String::from_utf8(file.to_text()?)?;
    assert_eq!(
        text,
        "{\n\"array\" : [\n  \"int\" : 42,\n  \"string\" : \"hi\",\n],\n},\n"
    );
    Ok(())
}

#[test]
fn well_formed_document_parses() -> Result<(), Box<dyn std::error::Error>> {
    let text = "{\n\
                \"array\" : [\n  \
                \"int\" : -7,\n  \
                \"float\" : 1.500000,\n  \
                \"id\" : \"player\",\n\
                ],\n\
                },\n";

    let file = DataFile::parse(text.as_bytes())?;
    assert_eq!(file.format, SourceFormat::Text);

    let children = file.root.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0], int(-7));
    assert_eq!(
        children[1],
        Node::Float {
            ty: NodeType::Float,
            value: 1.5
        }
    );
    assert_eq!(
        children[2],
        Node::Str {
            ty: NodeType::Id,
            value: b"player".to_vec()
        }
    );
    Ok(())
}

#[test]
fn nested_arrays_parse_and_render() -> Result<(), Box<dyn std::error::Error>> {
    let file = DataFile {
        root: array(1, vec![int(1), array(2, vec![string("deep")]), int(2)]),
        format: SourceFormat::Binary,
    };

    let text = String::from_utf8(file.to_text()?)?;
    assert_eq!(
        text,
        "{\n\
         \"array\" : [\n  \
         \"int\" : 1,\n  \
         \"array\" : [\n    \
         \"string\" : \"deep\",\n  \
         ],\n  \
         \"int\" : 2,\n\
         ],\n\
         },\n"
    );

    let reparsed = DataFile::parse(text.as_bytes())?;
    let children = reparsed.root.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[1].children(), &[string("deep")]);
    Ok(())
}

#[test]
fn scanning_is_tolerant_of_malformed_punctuation() -> Result<(), Box<dyn std::error::Error>> {
    // No colons, stray separators, junk between tokens. Structural tokens
    // are found by character class, so this still parses.
    let text = "{ \"array\" junk [ \"int\" = 42 ; \"string\" -> \"hi\" ] }";

    let file = DataFile::parse(text.as_bytes())?;
    let children = file.root.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], int(42));
    assert_eq!(children[1], string("hi"));
    Ok(())
}

#[test]
fn empty_array_parses_and_renders() -> Result<(), Box<dyn std::error::Error>> {
    let file = DataFile::parse(b"{\"array\" : [],\n},\n")?;
    assert!(file.root.children().is_empty());

    let text = String::from_utf8(file.to_text()?)?;
    assert_eq!(text, "{\n\"array\" : [],\n},\n");
    Ok(())
}

#[test]
fn escaped_quotes_stay_inside_string_values() -> Result<(), Box<dyn std::error::Error>> {
    let text = "{\"array\" : [\n  \"string\" : \"say \\\"hi\\\"\",\n],\n},\n";

    let file = DataFile::parse(text.as_bytes())?;
    // The value keeps its escapes verbatim in memory.
    assert_eq!(file.root.children()[0], string("say \\\"hi\\\""));

    // And renders back with exactly one backslash per quote.
    let rendered = String::from_utf8(file.to_text()?)?;
    assert!(rendered.contains("\"say \\\"hi\\\"\""));
    assert!(!rendered.contains("\\\\\""));
    Ok(())
}

#[test]
fn unknown_type_name_is_rejected() {
    let err = DataFile::parse(b"{\"bogus\" : [],},").unwrap_err();
    assert!(matches!(err, SeeDataError::UnknownTypeName(name) if name == "bogus"));
}

#[test]
fn missing_array_open_is_rejected() {
    let err = DataFile::parse(b"{\"array\" : 42,},").unwrap_err();
    assert!(matches!(err, SeeDataError::MalformedText(_)));
}

#[test]
fn text_decode_assigns_ids_in_document_order() -> Result<(), Box<dyn std::error::Error>> {
    let text = "{\"array\" : [\n\"array\" : [\n],\n\"array_alt\" : [\n],\n],\n},\n";

    let mut ids = IdGen::new();
    let file = DataFile::parse_with_ids(text.as_bytes(), &mut ids)?;

    assert_eq!(file.root.array_id(), Some(1));
    assert_eq!(file.root.children()[0].array_id(), Some(2));
    assert_eq!(file.root.children()[1].array_id(), Some(3));
    Ok(())
}

#[test]
fn float_values_render_with_six_decimals() -> Result<(), Box<dyn std::error::Error>> {
    let file = DataFile {
        root: array(
            1,
            vec![Node::Float {
                ty: NodeType::Float,
                value: 42.5,
            }],
        ),
        format: SourceFormat::Binary,
    };

    let text = String::from_utf8(file.to_text()?)?;
    assert!(text.contains("\"float\" : 42.500000,"));
    Ok(())
}

#[test]
fn empty_input_is_rejected() {
    let err = DataFile::parse(b"").unwrap_err();
    assert!(matches!(err, SeeDataError::EmptyInput));
}
