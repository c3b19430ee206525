use crate::error::SeeDataError;

/// Node type identifiers as persisted in the binary format. The numeric tags
/// are part of the on-disk format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Integer0,
    Float,
    String,
    Integer6,
    Integer8,
    Integer9,
    Array,
    ArrayAlt,
    Id,
    IncludeFile,
    Define,
}

/// The in-memory representation a type decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Int,
    Float,
    Str,
    Array,
}

const TYPE_TABLE: &[(&str, i32, NodeType)] = &[
    ("int", 0, NodeType::Integer0),
    ("float", 1, NodeType::Float),
    ("string", 5, NodeType::String),
    ("int6", 6, NodeType::Integer6),
    ("int8", 8, NodeType::Integer8),
    ("int9", 9, NodeType::Integer9),
    ("array", 16, NodeType::Array),
    ("array_alt", 17, NodeType::ArrayAlt),
    ("id", 18, NodeType::Id),
    ("include", 33, NodeType::IncludeFile),
    ("define", 35, NodeType::Define),
];

impl NodeType {
    pub fn from_name(name: &str) -> Result<NodeType, SeeDataError> {
        TYPE_TABLE
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, _, ty)| *ty)
            .ok_or_else(|| SeeDataError::UnknownTypeName(name.to_string()))
    }

    pub fn from_tag(tag: i32) -> Result<NodeType, SeeDataError> {
        TYPE_TABLE
            .iter()
            .find(|(_, t, _)| *t == tag)
            .map(|(_, _, ty)| *ty)
            .ok_or(SeeDataError::UnknownTag(tag))
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeType::Integer0 => "int",
            NodeType::Float => "float",
            NodeType::String => "string",
            NodeType::Integer6 => "int6",
            NodeType::Integer8 => "int8",
            NodeType::Integer9 => "int9",
            NodeType::Array => "array",
            NodeType::ArrayAlt => "array_alt",
            NodeType::Id => "id",
            NodeType::IncludeFile => "include",
            NodeType::Define => "define",
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            NodeType::Integer0 => 0,
            NodeType::Float => 1,
            NodeType::String => 5,
            NodeType::Integer6 => 6,
            NodeType::Integer8 => 8,
            NodeType::Integer9 => 9,
            NodeType::Array => 16,
            NodeType::ArrayAlt => 17,
            NodeType::Id => 18,
            NodeType::IncludeFile => 33,
            NodeType::Define => 35,
        }
    }

    pub fn kind(self) -> NodeKind {
        match self {
            NodeType::Integer0 | NodeType::Integer6 | NodeType::Integer8 | NodeType::Integer9 => {
                NodeKind::Int
            }
            NodeType::Float => NodeKind::Float,
            NodeType::String | NodeType::Id | NodeType::IncludeFile | NodeType::Define => {
                NodeKind::Str
            }
            NodeType::Array | NodeType::ArrayAlt => NodeKind::Array,
        }
    }
}
