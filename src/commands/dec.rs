use data_encoding::HEXLOWER;
use serde::Serialize;

use crate::io::read_input;
use fconv::error::{ConvertError, Result};
use fconv::types::{Context, InputSource};

/// Decode input text with one format. The encoded text must itself be UTF-8;
/// surrounding whitespace (a trailing newline from a pipe, say) is trimmed
/// here, not in the codec.
pub fn run_decode(ctx: &Context, format: &str, input: &InputSource) -> Result<Vec<u8>> {
    let codec = ctx.registry.get(format)?;
    let data = read_input(input)?;
    let text =
        std::str::from_utf8(&data).map_err(|e| ConvertError::non_text(e.to_string()))?;
    codec.decode(text.trim())
}

#[derive(Serialize)]
pub struct DecodeReport {
    pub format: &'static str,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl DecodeReport {
    fn new(format: &'static str, decoded: Vec<u8>) -> Self {
        let bytes = decoded.len();
        match String::from_utf8(decoded) {
            Ok(text) => DecodeReport {
                format,
                bytes,
                text: Some(text),
                hex: None,
            },
            Err(e) => DecodeReport {
                format,
                bytes,
                text: None,
                hex: Some(HEXLOWER.encode(e.as_bytes())),
            },
        }
    }
}

pub fn run_decode_json(ctx: &Context, format: &str, input: &InputSource) -> Result<DecodeReport> {
    let key = ctx.registry.get(format)?.key();
    let decoded = run_decode(ctx, format, input)?;
    Ok(DecodeReport::new(key, decoded))
}

pub fn run_decode_all(ctx: &Context, input: &InputSource) -> Result<()> {
    let data = read_input(input)?;
    let text =
        std::str::from_utf8(&data).map_err(|e| ConvertError::non_text(e.to_string()))?;
    let text = text.trim();

    println!("{:<12} {}", "FORMAT", "DECODED (as text, or hex if binary)");
    println!("{}", "-".repeat(70));

    let mut successes = 0;
    for meta in ctx.registry.list() {
        let codec = ctx.registry.get(meta.key)?;
        if let Ok(decoded) = codec.decode(text) {
            successes += 1;
            println!("{:<12} {}", meta.key, format_decoded(&decoded));
        }
    }

    if successes == 0 {
        println!("(no format could decode the input)");
    }

    Ok(())
}

#[derive(Serialize)]
pub struct DecodeAllEntry {
    pub format: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run_decode_all_json(ctx: &Context, input: &InputSource) -> Result<Vec<DecodeAllEntry>> {
    let data = read_input(input)?;
    let text =
        std::str::from_utf8(&data).map_err(|e| ConvertError::non_text(e.to_string()))?;
    let text = text.trim();

    let mut entries = Vec::new();
    for meta in ctx.registry.list() {
        let codec = ctx.registry.get(meta.key)?;
        let entry = match codec.decode(text) {
            Ok(decoded) => {
                let report = DecodeReport::new(meta.key, decoded);
                DecodeAllEntry {
                    format: meta.key,
                    ok: true,
                    text: report.text,
                    hex: report.hex,
                    error: None,
                }
            }
            Err(e) => DecodeAllEntry {
                format: meta.key,
                ok: false,
                text: None,
                hex: None,
                error: Some(e.to_string()),
            },
        };
        entries.push(entry);
    }

    Ok(entries)
}

fn format_decoded(data: &[u8]) -> String {
    if data.is_empty() {
        return "(empty)".to_string();
    }

    match std::str::from_utf8(data) {
        Ok(s) => {
            let one_line: String = s
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            if one_line.chars().count() > 50 {
                let cut: String = one_line.chars().take(47).collect();
                format!("\"{}...\"", cut)
            } else {
                format!("\"{}\"", one_line)
            }
        }
        Err(_) => {
            let hex = HEXLOWER.encode(&data[..data.len().min(25)]);
            if data.len() > 25 {
                format!("[{}...] ({} bytes)", hex, data.len())
            } else {
                format!("[{}] ({} bytes)", hex, data.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fconv::types::InputSource;

    #[test]
    fn test_run_decode_trims_input() {
        let ctx = Context::default();
        let input = InputSource::Literal(b"  SGVsbG8=\n".to_vec());
        assert_eq!(run_decode(&ctx, "base64", &input).unwrap(), b"Hello".to_vec());
    }

    #[test]
    fn test_run_decode_rejects_non_utf8_input() {
        let ctx = Context::default();
        let input = InputSource::Literal(vec![0xff, 0xfe]);
        assert!(matches!(
            run_decode(&ctx, "base64", &input),
            Err(ConvertError::NonText { .. })
        ));
    }

    #[test]
    fn test_decode_report_binary_payload() {
        let report = DecodeReport::new("hex", vec![0xff, 0x00]);
        assert_eq!(report.bytes, 2);
        assert!(report.text.is_none());
        assert_eq!(report.hex.as_deref(), Some("ff00"));
    }

    #[test]
    fn test_format_decoded_previews() {
        assert_eq!(format_decoded(b""), "(empty)");
        assert_eq!(format_decoded(b"Hello"), "\"Hello\"");
        assert!(format_decoded(&[0xff, 0x00]).starts_with("[ff00]"));
    }
}
