pub mod binary;
pub mod error;
pub mod file;
pub mod node;
pub mod stream;
pub mod text;
pub mod types;

pub use error::SeeDataError;
pub use file::{DataFile, SourceFormat};
pub use node::{IdGen, Node};
pub use types::NodeType;
