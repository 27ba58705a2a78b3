use std::str::CharIndices;

use super::Codec;
use crate::error::{ConvertError, Result};
use crate::types::{ByteModel, FormatMeta};

/// URL percent-encoding over the URI-component safe set: ASCII alphanumerics
/// plus `- _ . ~ ! * ' ( )` pass through, every other byte becomes an
/// uppercase `%XX` escape. Decoding accepts either hex case and passes
/// unescaped characters through unchanged.
#[derive(Debug)]
pub struct UrlEncoding;

fn is_component_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | '.' | '~' | '!' | '*' | '\'' | '(' | ')')
}

fn next_hex_digit(chars: &mut CharIndices<'_>, percent_pos: usize) -> Result<u8> {
    let (pos, c) = chars.next().ok_or_else(|| {
        ConvertError::invalid_input(format!(
            "incomplete percent sequence at position {}",
            percent_pos
        ))
    })?;
    match c.to_digit(16) {
        Some(d) => Ok(d as u8),
        None => Err(ConvertError::invalid_char(c, pos)),
    }
}

impl Codec for UrlEncoding {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            key: "url",
            display_name: "URL Encoding",
            aliases: &["urlencoding", "percent"],
            byte_model: ByteModel::Text,
            description: "Percent-encoding of URI components",
        }
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let mut result = String::with_capacity(input.len());
        for &byte in input {
            let c = byte as char;
            if is_component_safe(c) {
                result.push(c);
            } else {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
        Ok(result)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let mut result = Vec::with_capacity(input.len());
        let mut chars = input.char_indices();

        while let Some((pos, c)) = chars.next() {
            if c == '%' {
                let hi = next_hex_digit(&mut chars, pos)?;
                let lo = next_hex_digit(&mut chars, pos)?;
                result.push((hi << 4) | lo);
            } else {
                let mut buf = [0u8; 4];
                result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }

        Ok(result)
    }
}
