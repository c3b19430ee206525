use crate::types::{NodeKind, NodeType};

/// One node of a data tree. The variant is fully determined by the type tag
/// via [`NodeType::kind`]; children are owned and released recursively on
/// drop.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Array {
        ty: NodeType,
        id: i16,
        children: Vec<Node>,
    },
    Str {
        ty: NodeType,
        /// Raw value bytes, not required to be valid UTF-8. Literal quote
        /// characters are stored pre-escaped (`\"`) so the value can be
        /// re-emitted as valid quoted text unmodified.
        value: Vec<u8>,
    },
    Int {
        ty: NodeType,
        value: i32,
    },
    Float {
        ty: NodeType,
        value: f32,
    },
}

/// Allocator for array node ids. Owned by the decode context rather than a
/// process-wide counter so conversions are deterministic under test.
/// Ids assigned here are replaced by the stored value when a tree is decoded
/// from binary, and are never persisted by the text format.
#[derive(Debug)]
pub struct IdGen {
    next: i16,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> i16 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    /// Construct an empty node of the given type. `NodeType` is a closed set,
    /// so unlike a lookup by raw tag this cannot fail.
    pub fn new(ty: NodeType, ids: &mut IdGen) -> Node {
        match ty.kind() {
            NodeKind::Array => Node::Array {
                ty,
                id: ids.next_id(),
                children: Vec::new(),
            },
            NodeKind::Str => Node::Str {
                ty,
                value: Vec::new(),
            },
            NodeKind::Int => Node::Int { ty, value: 0 },
            NodeKind::Float => Node::Float { ty, value: 0.0 },
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Array { ty, .. } => *ty,
            Node::Str { ty, .. } => *ty,
            Node::Int { ty, .. } => *ty,
            Node::Float { ty, .. } => *ty,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Array { children, .. } => children,
            _ => &[],
        }
    }

    pub fn array_id(&self) -> Option<i16> {
        match self {
            Node::Array { id, .. } => Some(*id),
            _ => None,
        }
    }
}
