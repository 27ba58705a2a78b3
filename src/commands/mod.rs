mod dec;
mod enc;
mod file;
mod info;
mod list;
mod rows;

pub use dec::{run_decode, run_decode_all, run_decode_all_json, run_decode_json};
pub use enc::{run_encode, run_encode_all, run_encode_all_json, run_encode_json};
pub use file::run_file;
pub use info::run_info;
pub use list::run_list;
pub use rows::{run_rows, RowsOp};

use std::path::PathBuf;

use crate::io::{write_output, OutputConfig};
use fconv::error::Result;
use fconv::store::Store;
use fconv::types::{Context, Direction, InputSource, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

pub struct EncCommand {
    pub format: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            if self.all {
                let result = run_encode_all_json(ctx, &self.input)?;
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                let result = run_encode_json(ctx, &self.format, &self.input)?;
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            }
            return Ok(());
        }

        if self.all {
            let table = run_encode_all(ctx, &self.input)?;
            let config = OutputConfig {
                dest: self.output.clone(),
                force: true,
            };
            write_output(table.as_bytes(), &config)?;
            return Ok(());
        }

        let encoded = run_encode(ctx, &self.format, &self.input)?;
        let config = OutputConfig {
            dest: self.output.clone(),
            force: true,
        };
        write_output(encoded.as_bytes(), &config)?;
        if matches!(self.output, OutputDest::Stdout) {
            println!();
        }
        Ok(())
    }
}

pub struct DecCommand {
    pub format: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub force: bool,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            if self.all {
                let result = run_decode_all_json(ctx, &self.input)?;
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                let result = run_decode_json(ctx, &self.format, &self.input)?;
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            }
            return Ok(());
        }

        if self.all {
            run_decode_all(ctx, &self.input)?;
            return Ok(());
        }

        let decoded = run_decode(ctx, &self.format, &self.input)?;
        let config = OutputConfig {
            dest: self.output.clone(),
            force: self.force,
        };
        write_output(&decoded, &config)?;
        Ok(())
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let formats = run_list(ctx);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&formats).unwrap());
        } else {
            println!("{:<10} {:<18} {:<7} DESCRIPTION", "KEY", "NAME", "MODEL");
            println!("{}", "-".repeat(72));
            for meta in formats {
                println!(
                    "{:<10} {:<18} {:<7} {}",
                    meta.key,
                    meta.display_name,
                    meta.byte_model.as_str(),
                    meta.description
                );
            }
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub format: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.format)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&meta).unwrap());
        } else {
            println!("Key:         {}", meta.key);
            println!("Name:        {}", meta.display_name);
            let aliases = if meta.aliases.is_empty() {
                "-".to_string()
            } else {
                meta.aliases.join(", ")
            };
            println!("Aliases:     {}", aliases);
            println!("Model:       {}", meta.byte_model.as_str());
            println!("Description: {}", meta.description);
        }
        Ok(())
    }
}

pub struct FileCommand {
    pub paths: Vec<PathBuf>,
    pub format: String,
    pub direction: Direction,
    pub json: bool,
}

impl CommandHandler for FileCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        run_file(ctx, &self.paths, &self.format, self.direction, self.json)
    }
}

pub struct RowsCommand {
    pub state: Option<PathBuf>,
    pub op: RowsOp,
}

impl CommandHandler for RowsCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let store = Store::open(self.state.clone());
        run_rows(ctx, &store, &self.op)
    }
}
