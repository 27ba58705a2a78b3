use data_encoding::{DecodeKind, HEXLOWER, HEXLOWER_PERMISSIVE};

use super::Codec;
use crate::error::{ConvertError, LengthConstraint, Result};
use crate::types::{ByteModel, FormatMeta};

/// Hexadecimal: two lowercase digits per byte, no separators. Decoding is
/// case-insensitive; an odd-length input fails before any byte is parsed.
#[derive(Debug)]
pub struct Hex;

impl Codec for Hex {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            key: "hex",
            display_name: "Hexadecimal",
            aliases: &["base16", "b16"],
            byte_model: ByteModel::Bytes,
            description: "Lowercase hexadecimal, two digits per byte",
        }
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(HEXLOWER.encode(input))
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        if input.len() % 2 != 0 {
            return Err(ConvertError::invalid_length(
                LengthConstraint::MultipleOf(2),
                input.len(),
            ));
        }

        HEXLOWER_PERMISSIVE
            .decode(input.as_bytes())
            .map_err(|e| match e.kind {
                DecodeKind::Symbol => {
                    let ch = input
                        .get(e.position..)
                        .and_then(|s| s.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    ConvertError::invalid_char(ch, e.position)
                }
                _ => ConvertError::invalid_input(e.to_string()),
            })
    }
}
