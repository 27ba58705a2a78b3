use std::fs::File;
use std::io::{self, Write};

use is_terminal::IsTerminal;

use fconv::error::Result;
use fconv::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
}

/// Writes to the destination, except that raw non-UTF-8 bytes headed for an
/// interactive terminal are shown as a hex preview instead (override with
/// `force` or a file destination).
pub fn write_output(data: &[u8], config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(data)?;
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            if stdout.is_terminal() && !config.force && !is_safe_for_terminal(data) {
                print_hex_preview(data);
            } else {
                let mut handle = stdout.lock();
                handle.write_all(data)?;
            }
            Ok(())
        }
    }
}

fn is_safe_for_terminal(data: &[u8]) -> bool {
    std::str::from_utf8(data).is_ok()
}

fn print_hex_preview(data: &[u8]) {
    const BYTES_PER_LINE: usize = 16;
    const MAX_LINES: usize = 32;

    eprintln!(
        "Binary output ({} bytes). Showing hex preview (use --force for raw bytes or --out @file):\n",
        data.len()
    );

    for (line_idx, chunk) in data.chunks(BYTES_PER_LINE).take(MAX_LINES).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        println!(
            "{:08x}  {:<47}  |{}|",
            line_idx * BYTES_PER_LINE,
            hex.join(" "),
            ascii
        );
    }

    let shown = data.len().min(MAX_LINES * BYTES_PER_LINE);
    if shown < data.len() {
        eprintln!("\n... ({} more bytes)", data.len() - shown);
    }
}
