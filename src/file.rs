use crate::binary;
use crate::error::SeeDataError;
use crate::node::{IdGen, Node};
use crate::stream::{ReadCursor, WriteCursor};
use crate::text;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The encoding a file was detected as on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Binary,
    Text,
}

/// A parsed data file: the root of the node tree plus the format it was
/// loaded from. The tree is owned in full and released recursively on drop.
#[derive(Debug)]
pub struct DataFile {
    pub root: Node,
    pub format: SourceFormat,
}

/// Leading byte of a binary-encoded file. Any other first byte means text.
const BINARY_SELECTOR: u8 = 1;

impl DataFile {
    pub fn parse(data: &[u8]) -> Result<DataFile, SeeDataError> {
        let mut ids = IdGen::new();
        Self::parse_with_ids(data, &mut ids)
    }

    /// Parse with a caller-owned id allocator, so conversions get
    /// deterministic array ids under test.
    pub fn parse_with_ids(data: &[u8], ids: &mut IdGen) -> Result<DataFile, SeeDataError> {
        let (selector, body) = data.split_first().ok_or(SeeDataError::EmptyInput)?;

        // For text files the consumed selector byte is the document's
        // opening brace.
        if *selector == BINARY_SELECTOR {
            let mut cur = ReadCursor::new(body);
            let root = binary::decode(&mut cur, ids)?;
            Ok(DataFile {
                root,
                format: SourceFormat::Binary,
            })
        } else {
            let mut cur = ReadCursor::new(body);
            let root = text::decode(&mut cur, ids)?;
            Ok(DataFile {
                root,
                format: SourceFormat::Text,
            })
        }
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SeeDataError> {
        let mut out = WriteCursor::new();
        out.write_u8(BINARY_SELECTOR)?;
        binary::encode(&self.root, &mut out)?;
        Ok(out.into_bytes())
    }

    pub fn to_text(&self) -> Result<Vec<u8>, SeeDataError> {
        let mut out = WriteCursor::new();
        text::encode(&self.root, &mut out)?;
        Ok(out.into_bytes())
    }
}

pub fn load(path: &str) -> Result<DataFile> {
    let data = fs::read(path).with_context(|| format!("Failed to read file: {}", path))?;
    let file =
        DataFile::parse(&data).with_context(|| format!("Failed to parse file: {}", path))?;
    Ok(file)
}

pub fn save(path: &str, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write to file: {}", path))?;
    Ok(())
}

/// Derive the output filename: the input's extension replaced by `.bin` for
/// text inputs and `.txt` for binary inputs. Inputs without an extension get
/// one appended.
pub fn output_path(input: &str, format: SourceFormat) -> String {
    let ext = match format {
        SourceFormat::Binary => "txt",
        SourceFormat::Text => "bin",
    };
    Path::new(input)
        .with_extension(ext)
        .to_string_lossy()
        .into_owned()
}
