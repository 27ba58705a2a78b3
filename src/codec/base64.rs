use base64::prelude::*;

use super::Codec;
use crate::error::{ConvertError, LengthConstraint, Result};
use crate::types::{ByteModel, FormatMeta};

fn map_decode_err(e: base64::DecodeError) -> ConvertError {
    match e {
        base64::DecodeError::InvalidByte(position, byte) => {
            ConvertError::invalid_char(byte as char, position)
        }
        base64::DecodeError::InvalidLastSymbol(position, byte) => {
            ConvertError::invalid_char(byte as char, position)
        }
        base64::DecodeError::InvalidLength(len) => {
            ConvertError::invalid_length(LengthConstraint::MultipleOf(4), len)
        }
        base64::DecodeError::InvalidPadding => ConvertError::invalid_padding("malformed padding"),
    }
}

/// Standard Base64 with `+` `/` alphabet and `=` padding.
#[derive(Debug)]
pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            key: "base64",
            display_name: "Base64",
            aliases: &["b64"],
            byte_model: ByteModel::Bytes,
            description: "Standard Base64 (RFC 4648) with padding",
        }
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(BASE64_STANDARD.encode(input))
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        BASE64_STANDARD.decode(input).map_err(map_decode_err)
    }
}

/// URL-safe Base64: standard encoding with `+` `/` swapped for `-` `_` and
/// padding stripped. Decoding restores the padding before running the
/// standard decode.
#[derive(Debug)]
pub struct Base64Url;

impl Codec for Base64Url {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            key: "base64url",
            display_name: "URL-Safe Base64",
            aliases: &["b64url", "url64"],
            byte_model: ByteModel::Bytes,
            description: "URL-safe Base64 (RFC 4648 §5) without padding",
        }
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(BASE64_URL_SAFE_NO_PAD.encode(input))
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let padded = pad_to_multiple(input, 4);
        BASE64_URL_SAFE.decode(&padded).map_err(map_decode_err)
    }
}

fn pad_to_multiple(input: &str, multiple: usize) -> String {
    let stripped = input.trim_end_matches('=');
    let remainder = stripped.len() % multiple;
    if remainder == 0 {
        stripped.to_string()
    } else {
        let padding_needed = multiple - remainder;
        format!("{}{}", stripped, "=".repeat(padding_needed))
    }
}
