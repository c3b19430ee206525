use crate::error::SeeDataError;
use crate::node::{IdGen, Node};
use crate::stream::{ReadCursor, WriteCursor};
use crate::types::{NodeKind, NodeType};

/// Decode a text document body: scan for the root type name, then decode the
/// node it introduces. The leading `{` has already been consumed as the
/// file's format selector byte.
pub fn decode(cur: &mut ReadCursor, ids: &mut IdGen) -> Result<Node, SeeDataError> {
    let name = cur.scan_quoted()?;
    let ty = NodeType::from_name(&String::from_utf8_lossy(name))?;
    decode_node(ty, cur, ids)
}

/// Decoding scans by character class rather than matching exact syntax:
/// structural tokens are located by skipping anything else, so text that is
/// malformed but structurally similar still parses.
fn decode_node(ty: NodeType, cur: &mut ReadCursor, ids: &mut IdGen) -> Result<Node, SeeDataError> {
    match ty.kind() {
        NodeKind::Array => {
            let mut node = Node::new(ty, ids);

            cur.advance_past(b'[')?;
            loop {
                cur.skip_while(|b| b != b'"' && b != b']');
                match cur.peek() {
                    Some(b']') => {
                        cur.bump();
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }

                let name = cur.scan_quoted()?;
                let child_ty = NodeType::from_name(&String::from_utf8_lossy(name))?;
                let child = decode_node(child_ty, cur, ids)?;
                if let Node::Array { children, .. } = &mut node {
                    children.push(child);
                }
            }

            Ok(node)
        }
        // The value is stored exactly as it appears between the quotes,
        // escapes included, bytes untouched.
        NodeKind::Str => Ok(Node::Str {
            ty,
            value: cur.scan_quoted()?.to_vec(),
        }),
        NodeKind::Int => Ok(Node::Int {
            ty,
            value: cur.scan_int()?,
        }),
        NodeKind::Float => Ok(Node::Float {
            ty,
            value: cur.scan_float()?,
        }),
    }
}

/// Encode a document: `{`, the root entry, `},`.
pub fn encode(root: &Node, out: &mut WriteCursor) -> Result<(), SeeDataError> {
    out.write_str("{\n")?;
    encode_node(root, out, 0)?;
    out.write_str("},\n")
}

fn encode_node(node: &Node, out: &mut WriteCursor, depth: usize) -> Result<(), SeeDataError> {
    out.write_indent(depth)?;
    match node {
        Node::Array { ty, children, .. } => {
            out.write_str("\"")?;
            out.write_str(ty.name())?;
            out.write_str("\" : [")?;
            if !children.is_empty() {
                out.write_str("\n")?;
                for child in children {
                    encode_node(child, out, depth + 1)?;
                }
                out.write_indent(depth)?;
            }
            out.write_str("],\n")
        }
        Node::Str { ty, value } => write_entry(out, ty.name(), value, true),
        Node::Int { ty, value } => write_entry(out, ty.name(), value.to_string().as_bytes(), false),
        Node::Float { ty, value } => {
            write_entry(out, ty.name(), format!("{:.6}", value).as_bytes(), false)
        }
    }
}

fn write_entry(
    out: &mut WriteCursor,
    name: &str,
    value: &[u8],
    quoted: bool,
) -> Result<(), SeeDataError> {
    out.write_str("\"")?;
    out.write_str(name)?;
    out.write_str("\" : ")?;
    if quoted {
        out.write_str("\"")?;
    }
    out.write_bytes(value)?;
    if quoted {
        out.write_str("\"")?;
    }
    out.write_str(",\n")
}
