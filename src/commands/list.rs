use fconv::types::{Context, FormatMeta};

pub fn run_list(ctx: &Context) -> Vec<FormatMeta> {
    ctx.registry.list()
}
