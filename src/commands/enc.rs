use serde::Serialize;

use crate::io::read_input;
use fconv::error::Result;
use fconv::types::{Context, InputSource};

pub fn run_encode(ctx: &Context, format: &str, input: &InputSource) -> Result<String> {
    let codec = ctx.registry.get(format)?;
    let data = read_input(input)?;
    codec.encode(&data)
}

#[derive(Serialize)]
pub struct EncodeReport {
    pub format: &'static str,
    pub input_bytes: usize,
    pub encoded: String,
}

pub fn run_encode_json(ctx: &Context, format: &str, input: &InputSource) -> Result<EncodeReport> {
    let codec = ctx.registry.get(format)?;
    let data = read_input(input)?;
    let encoded = codec.encode(&data)?;
    Ok(EncodeReport {
        format: codec.key(),
        input_bytes: data.len(),
        encoded,
    })
}

pub fn run_encode_all(ctx: &Context, input: &InputSource) -> Result<String> {
    let data = read_input(input)?;

    let mut out = String::new();
    out.push_str(&format!("{:<12} {}\n", "FORMAT", "ENCODED"));
    out.push_str(&format!("{}\n", "-".repeat(70)));

    for meta in ctx.registry.list() {
        let codec = ctx.registry.get(meta.key)?;
        match codec.encode(&data) {
            Ok(encoded) => {
                out.push_str(&format!("{:<12} {}\n", meta.key, preview(&encoded, 56)));
            }
            Err(e) => {
                out.push_str(&format!("{:<12} (failed: {})\n", meta.key, e));
            }
        }
    }

    Ok(out)
}

#[derive(Serialize)]
pub struct EncodeAllEntry {
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run_encode_all_json(ctx: &Context, input: &InputSource) -> Result<Vec<EncodeAllEntry>> {
    let data = read_input(input)?;

    let mut entries = Vec::new();
    for meta in ctx.registry.list() {
        let codec = ctx.registry.get(meta.key)?;
        let entry = match codec.encode(&data) {
            Ok(encoded) => EncodeAllEntry {
                format: meta.key,
                encoded: Some(encoded),
                error: None,
            },
            Err(e) => EncodeAllEntry {
                format: meta.key,
                encoded: None,
                error: Some(e.to_string()),
            },
        };
        entries.push(entry);
    }

    Ok(entries)
}

/// Single-line, char-safe table preview (json output spans lines).
fn preview(s: &str, max: usize) -> String {
    let one_line = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.chars().count() > max {
        let cut: String = one_line.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        one_line
    }
}
