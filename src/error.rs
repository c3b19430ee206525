use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeeDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown node type tag {0}")]
    UnknownTag(i32),

    #[error("Unknown node type \"{0}\"")]
    UnknownTypeName(String),

    #[error("Malformed binary data: {0}")]
    MalformedBinary(String),

    #[error("Malformed text data: {0}")]
    MalformedText(String),

    #[error("Output buffer too small: required {required}, capacity {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[error("Array has too many children: {0}")]
    TooManyChildren(usize),

    #[error("Empty input")]
    EmptyInput,
}
