use crate::error::SeeDataError;
use crate::node::{IdGen, Node};
use crate::stream::{ReadCursor, WriteCursor};
use crate::types::{NodeKind, NodeType};

/// Sentinel written at the head of every encoded array body.
const ARRAY_MARKER: i32 = 1;

/// Decode the root array body. The root's type tag is implicit and never
/// stored in the stream.
pub fn decode(cur: &mut ReadCursor, ids: &mut IdGen) -> Result<Node, SeeDataError> {
    decode_node(NodeType::Array, cur, ids)
}

fn decode_node(ty: NodeType, cur: &mut ReadCursor, ids: &mut IdGen) -> Result<Node, SeeDataError> {
    match ty.kind() {
        NodeKind::Array => {
            let marker = cur.read_i32()?;
            if marker != ARRAY_MARKER {
                return Err(SeeDataError::MalformedBinary(format!(
                    "bad array marker {}",
                    marker
                )));
            }

            let count = cur.read_i16()?;

            // The counter advances for every array constructed, but the
            // stored id replaces the assigned value.
            let _ = ids.next_id();
            let id = cur.read_i16()?;

            let mut children = Vec::with_capacity(count.max(0) as usize);
            for _ in 0..count {
                let tag = cur.read_i32()?;
                let child_ty = NodeType::from_tag(tag)?;
                children.push(decode_node(child_ty, cur, ids)?);
            }

            Ok(Node::Array { ty, id, children })
        }
        NodeKind::Str => {
            let len = cur.read_i32()?;
            let len = usize::try_from(len).map_err(|_| {
                SeeDataError::MalformedBinary(format!("negative string length {}", len))
            })?;
            let raw = cur.take(len)?;
            Ok(Node::Str {
                ty,
                value: escape_quotes(raw),
            })
        }
        NodeKind::Int => Ok(Node::Int {
            ty,
            value: cur.read_i32()?,
        }),
        NodeKind::Float => Ok(Node::Float {
            ty,
            value: cur.read_f32()?,
        }),
    }
}

/// Encode a node body. The caller is responsible for the leading format
/// selector byte and, for non-root nodes, the preceding type tag.
pub fn encode(node: &Node, out: &mut WriteCursor) -> Result<(), SeeDataError> {
    match node {
        Node::Array { id, children, .. } => {
            out.write_i32(ARRAY_MARKER)?;
            let count = i16::try_from(children.len())
                .map_err(|_| SeeDataError::TooManyChildren(children.len()))?;
            out.write_i16(count)?;
            out.write_i16(*id)?;

            for child in children {
                out.write_i32(child.node_type().tag())?;
                encode(child, out)?;
            }
            Ok(())
        }
        Node::Str { value, .. } => {
            let raw = strip_quote_escapes(value);
            let len = i32::try_from(raw.len())
                .map_err(|_| SeeDataError::MalformedBinary("string too long".to_string()))?;
            out.write_i32(len)?;
            out.write_bytes(&raw)
        }
        Node::Int { value, .. } => out.write_i32(*value),
        Node::Float { value, .. } => out.write_f32(*value),
    }
}

/// Binary string bodies store quotes unescaped; the in-memory form carries
/// a backslash before each one. All other bytes pass through untouched.
fn escape_quotes(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &b in raw {
        if b == b'"' {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}

fn strip_quote_escapes(value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len());
    let mut i = 0;
    while i < value.len() {
        if value[i] == b'\\' && value.get(i + 1) == Some(&b'"') {
            i += 1;
            continue;
        }
        out.push(value[i]);
        i += 1;
    }
    out
}
