use serde::Serialize;
use std::path::PathBuf;

use crate::codec::Registry;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

/// Which way a conversion runs: plain text to encoded text, or back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                // Warn if input looks like a path
                if Self::looks_like_path(s) {
                    eprintln!(
                        "Warning: treating '{}' as literal data. Use @{} to read from file.",
                        s, s
                    );
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        // Check for path separators
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        // Check for common file extensions
        let extensions = [".txt", ".bin", ".dat", ".json", ".xml", ".csv", ".log"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

/// Whether a codec transforms the UTF-8 bytes of its input or works on the
/// text itself (`url` rewrites characters, `json` reformats structure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteModel {
    Bytes,
    Text,
}

impl ByteModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteModel::Bytes => "bytes",
            ByteModel::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatMeta {
    pub key: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub byte_model: ByteModel,
    pub description: &'static str,
}
