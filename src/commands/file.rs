use std::fs;
use std::path::{Path, PathBuf};

use data_encoding::HEXLOWER;
use serde::Serialize;

use fconv::error::{ConvertError, Result};
use fconv::types::{Context, Direction};

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub name: String,
    pub size: String,
    pub size_bytes: u64,
    pub kind: &'static str,
    pub format: &'static str,
    pub direction: &'static str,
    pub input_bytes: usize,
    pub output_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Ok(FileReport),
    Failed { name: String, error: String },
}

/// Transcode each file and report name, size, kind, and the converted
/// payload. A failing file is reported and the rest still run; the command
/// fails afterwards if anything failed.
pub fn run_file(
    ctx: &Context,
    paths: &[PathBuf],
    format: &str,
    direction: Direction,
    json: bool,
) -> Result<()> {
    // Resolve the format once, not once per file.
    ctx.registry.get(format)?;

    let mut outcomes = Vec::new();
    let mut failed = 0usize;

    for path in paths {
        match process_file(ctx, path, format, direction) {
            Ok(report) => {
                if !json {
                    print_report(&report);
                }
                outcomes.push(FileOutcome::Ok(report));
            }
            Err(e) => {
                failed += 1;
                if !json {
                    eprintln!("{}: {}", path.display(), e);
                }
                outcomes.push(FileOutcome::Failed {
                    name: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes).unwrap());
    }

    if failed > 0 {
        return Err(ConvertError::invalid_input(format!(
            "{} of {} file(s) failed",
            failed,
            paths.len()
        )));
    }

    Ok(())
}

fn process_file(
    ctx: &Context,
    path: &Path,
    format: &str,
    direction: Direction,
) -> Result<FileReport> {
    let codec = ctx.registry.get(format)?;
    let data = fs::read(path)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let size_bytes = data.len() as u64;
    let kind = if std::str::from_utf8(&data).is_ok() {
        "text"
    } else {
        "binary"
    };

    let (text, hex, output_len) = match direction {
        Direction::Encode => {
            let encoded = codec.encode(&data)?;
            let len = encoded.chars().count();
            (Some(encoded), None, len)
        }
        Direction::Decode => {
            let content = std::str::from_utf8(&data)
                .map_err(|e| ConvertError::non_text(e.to_string()))?;
            let decoded = codec.decode(content.trim())?;
            let len = decoded.len();
            match String::from_utf8(decoded) {
                Ok(text) => (Some(text), None, len),
                Err(e) => (None, Some(HEXLOWER.encode(e.as_bytes())), len),
            }
        }
    };

    Ok(FileReport {
        name,
        size: format_size(size_bytes),
        size_bytes,
        kind,
        format: codec.key(),
        direction: direction.as_str(),
        input_bytes: data.len(),
        output_len,
        text,
        hex,
    })
}

fn print_report(report: &FileReport) {
    println!(
        "{} ({}, {}) -> {} {}",
        report.name, report.size, report.kind, report.format, report.direction
    );
    match (&report.text, &report.hex) {
        (Some(text), _) => println!("{}", text),
        (None, Some(hex)) => println!("(non-text payload, shown as hex) {}", hex),
        (None, None) => {}
    }
    let unit = if report.direction == "encode" {
        "chars"
    } else {
        "bytes"
    };
    println!(
        "original: {} bytes, converted: {} {}",
        report.input_bytes, report.output_len, unit
    );
    println!();
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_process_file_encode() {
        let ctx = Context::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "Hello").unwrap();

        let report = process_file(&ctx, &path, "base64", Direction::Encode).unwrap();
        assert_eq!(report.name, "hello.txt");
        assert_eq!(report.kind, "text");
        assert_eq!(report.size, "5 B");
        assert_eq!(report.text.as_deref(), Some("SGVsbG8="));
        assert_eq!(report.output_len, 8);
    }

    #[test]
    fn test_process_file_binary_kind() {
        let ctx = Context::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(&[0xff, 0x00, 0x80]).unwrap();

        let report = process_file(&ctx, &path, "hex", Direction::Encode).unwrap();
        assert_eq!(report.kind, "binary");
        assert_eq!(report.text.as_deref(), Some("ff0080"));
    }

    #[test]
    fn test_process_file_decode_requires_text() {
        let ctx = Context::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe]).unwrap();

        let err = process_file(&ctx, &path, "base64", Direction::Decode).unwrap_err();
        assert!(matches!(err, ConvertError::NonText { .. }));
    }

    #[test]
    fn test_run_file_continues_after_failure() {
        let ctx = Context::default();
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "SGVsbG8=").unwrap();
        let missing = dir.path().join("missing.txt");

        let err = run_file(
            &ctx,
            &[missing, good],
            "base64",
            Direction::Decode,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }
}
