use anyhow::Result;

use super::CommandContext;

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    if ctx.json {
        let types: Vec<_> = ctx
            .registry
            .names()
            .filter_map(|name| ctx.registry.resolve(name).ok())
            .map(|d| {
                serde_json::json!({
                    "name": d.name(),
                    "fields": d.fields().len(),
                    "constructible": d.is_constructible(),
                })
            })
            .collect();

        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "list",
            "data": { "types": types }
        }))?;
        return Ok(());
    }

    for name in ctx.registry.names() {
        println!("{name}");
    }
    Ok(())
}
