use super::Codec;
use crate::error::{ConvertError, Result};
use crate::types::{ByteModel, FormatMeta};

/// Binary: each byte rendered as eight zero-padded base-2 digits, groups
/// joined by a single space. Decoding splits on any whitespace and accepts
/// groups of any length that still fit in one byte.
#[derive(Debug)]
pub struct Binary;

impl Codec for Binary {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            key: "binary",
            display_name: "Binary",
            aliases: &["bin", "base2"],
            byte_model: ByteModel::Bytes,
            description: "Space-separated binary octets, eight digits per byte",
        }
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(input
            .iter()
            .map(|&b| format!("{:08b}", b))
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        // from_str_radix tolerates a sign prefix, so digits are checked here.
        for (pos, ch) in input.char_indices() {
            if ch != '0' && ch != '1' && !ch.is_whitespace() {
                return Err(ConvertError::invalid_char(ch, pos));
            }
        }

        input
            .split_whitespace()
            .map(|group| {
                u8::from_str_radix(group, 2).map_err(|_| {
                    ConvertError::invalid_input(format!(
                        "binary group '{}' does not fit in one byte",
                        group
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_encode() {
        assert_eq!(Binary.encode(b"A").unwrap(), "01000001");
        assert_eq!(Binary.encode(b"Hi").unwrap(), "01001000 01101001");
        assert_eq!(Binary.encode(&[0, 255]).unwrap(), "00000000 11111111");
    }

    #[test]
    fn test_binary_decode() {
        assert_eq!(Binary.decode("01000001").unwrap(), b"A".to_vec());
        assert_eq!(Binary.decode("01001000 01101001").unwrap(), b"Hi".to_vec());
    }

    #[test]
    fn test_binary_decode_any_whitespace() {
        assert_eq!(Binary.decode("01001000\t01101001").unwrap(), b"Hi".to_vec());
        assert_eq!(Binary.decode("01001000\n01101001\n").unwrap(), b"Hi".to_vec());
        assert_eq!(Binary.decode("  01000001  ").unwrap(), b"A".to_vec());
    }

    #[test]
    fn test_binary_decode_short_group() {
        assert_eq!(Binary.decode("1000001").unwrap(), b"A".to_vec());
        assert_eq!(Binary.decode("0").unwrap(), vec![0]);
    }

    #[test]
    fn test_binary_roundtrip() {
        let data = b"\x00\x7f\x80\xff";
        let encoded = Binary.encode(data).unwrap();
        assert_eq!(Binary.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_binary_invalid_digit() {
        let result = Binary.decode("01000002");
        assert!(matches!(
            result,
            Err(ConvertError::InvalidCharacter { char: '2', position: 7 })
        ));
    }

    #[test]
    fn test_binary_rejects_sign_prefix() {
        assert!(Binary.decode("+1000001").is_err());
        assert!(Binary.decode("-1000001").is_err());
    }

    #[test]
    fn test_binary_group_overflow() {
        let result = Binary.decode("100000000");
        assert!(matches!(result, Err(ConvertError::InvalidInput { .. })));
    }

    #[test]
    fn test_binary_empty_and_whitespace_only() {
        assert_eq!(Binary.encode(&[]).unwrap(), "");
        assert_eq!(Binary.decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(Binary.decode("   \n\t ").unwrap(), Vec::<u8>::new());
    }
}
