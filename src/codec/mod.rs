mod base64;
mod binary;
mod hex;
mod json;
mod url;
pub mod registry;

pub use registry::Registry;

use crate::error::Result;
use crate::types::FormatMeta;

/// A bidirectional format codec. Implementations are stateless unit structs;
/// `encode` and `decode` are pure and hold no shared state, so a codec may be
/// called from any thread without coordination.
///
/// Codecs work at the byte level: `encode` renders bytes as text in the
/// format, `decode` recovers the bytes. The text-to-text surface (with the
/// UTF-8 boundary on both sides) is [`Registry::convert`].
pub trait Codec: Send + Sync + std::fmt::Debug {
    fn meta(&self) -> FormatMeta;
    fn encode(&self, input: &[u8]) -> Result<String>;
    fn decode(&self, input: &str) -> Result<Vec<u8>>;

    fn key(&self) -> &'static str {
        self.meta().key
    }
}
