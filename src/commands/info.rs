use fconv::error::Result;
use fconv::types::{Context, FormatMeta};

pub fn run_info(ctx: &Context, format: &str) -> Result<FormatMeta> {
    let codec = ctx.registry.get(format)?;
    Ok(codec.meta())
}
