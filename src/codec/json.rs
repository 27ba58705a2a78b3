use serde_json::Value;

use super::Codec;
use crate::error::{ConvertError, Result};
use crate::types::{ByteModel, FormatMeta};

/// JSON reformatter: encode pretty-prints with two-space indent, decode
/// minifies. Both directions parse first and reject anything that is not
/// valid JSON. Object key order is preserved across reformatting.
#[derive(Debug)]
pub struct JsonFormat;

fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input)
        .map_err(|e| ConvertError::invalid_input(format!("invalid JSON: {}", e)))
}

impl Codec for JsonFormat {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            key: "json",
            display_name: "JSON Formatter",
            aliases: &[],
            byte_model: ByteModel::Text,
            description: "JSON pretty-printing (encode) and minification (decode)",
        }
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(input)
            .map_err(|e| ConvertError::non_text(e.to_string()))?;
        let value = parse(text)?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| ConvertError::invalid_input(e.to_string()))
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let value = parse(input)?;
        let compact = serde_json::to_string(&value)
            .map_err(|e| ConvertError::invalid_input(e.to_string()))?;
        Ok(compact.into_bytes())
    }
}
