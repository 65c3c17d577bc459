use std::io;

use anyhow::Result;

use super::CommandContext;

pub fn cmd_describe(ctx: &CommandContext, config_type: &str) -> Result<()> {
    let descriptor = ctx.registry.resolve(config_type)?;

    if ctx.json {
        let fields: Vec<_> = descriptor
            .fields()
            .iter()
            .map(|f| {
                let constraints: Vec<String> = f
                    .constraints()
                    .iter()
                    .filter(|c| !c.is_marker())
                    .map(ToString::to_string)
                    .collect();
                serde_json::json!({
                    "name": f.name(),
                    "type": f.simple_type_name(),
                    "scalar": f.is_scalar(),
                    "composite_type": f.composite_type(),
                    "constraints": constraints,
                })
            })
            .collect();

        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "describe",
            "data": {
                "name": descriptor.name(),
                "constructible": descriptor.is_constructible(),
                "fields": fields,
            }
        }))?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    cfgdefaults::describe(descriptor, &mut out)?;
    Ok(())
}
