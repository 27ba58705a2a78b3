use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::RowsOp;
use fconv::types::Direction;

#[derive(Parser)]
#[command(name = "fconv")]
#[command(about = "Multi-format text transcoding CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode text or bytes into a format")]
    Enc {
        #[arg(long, short = 'f', default_value = "base64")]
        format: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Show the input encoded with every format")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode formatted text back to the original")]
    Dec {
        #[arg(long, short = 'f', default_value = "base64")]
        format: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Write raw bytes even to a terminal")]
        force: bool,

        #[arg(long, help = "Try every format and show which ones decode")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List supported formats")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show format details")]
    Info {
        format: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Transcode files and report per-file details")]
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[arg(long, short = 'f', default_value = "base64")]
        format: String,

        #[arg(long, short = 'd', default_value = "encode")]
        direction: DirectionArg,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Manage the saved workspace of plain/encoded row pairs")]
    Rows {
        #[arg(long, help = "State file (default $FCONV_STATE, then ~/.fconv.json)")]
        state: Option<PathBuf>,

        #[command(subcommand)]
        action: RowsAction,
    },
}

#[derive(Subcommand)]
pub enum RowsAction {
    #[command(about = "Show saved rows")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Append a row, deriving the other side")]
    Add {
        text: String,

        #[arg(long, help = "TEXT is the encoded side")]
        encoded: bool,

        #[arg(long, short = 'f', help = "Format for this row (default: active format)")]
        format: Option<String>,
    },

    #[command(about = "Replace one side of a row and re-derive the other")]
    Set {
        index: usize,

        text: String,

        #[arg(long, help = "TEXT is the encoded side")]
        encoded: bool,
    },

    #[command(about = "Delete one row")]
    Rm { index: usize },

    #[command(about = "Delete all rows")]
    Clear,

    #[command(about = "Show the active format, or switch it and re-encode all rows")]
    Format { key: Option<String> },
}

impl From<RowsAction> for RowsOp {
    fn from(action: RowsAction) -> Self {
        match action {
            RowsAction::List { json } => RowsOp::List { json },
            RowsAction::Add {
                text,
                encoded,
                format,
            } => RowsOp::Add {
                text,
                encoded,
                format,
            },
            RowsAction::Set {
                index,
                text,
                encoded,
            } => RowsOp::Set {
                index,
                text,
                encoded,
            },
            RowsAction::Rm { index } => RowsOp::Rm { index },
            RowsAction::Clear => RowsOp::Clear,
            RowsAction::Format { key } => RowsOp::Format { key },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Encode,
    Decode,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Encode => Direction::Encode,
            DirectionArg::Decode => Direction::Decode,
        }
    }
}
