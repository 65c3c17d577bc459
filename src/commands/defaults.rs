use std::io;

use anyhow::Result;
use cfgdefaults::{Introspector, Layout};
use tracing::info;

use super::CommandContext;

pub fn cmd_defaults(
    ctx: &CommandContext,
    config_type: Option<&str>,
    layout: Option<Layout>,
) -> Result<()> {
    let type_name = config_type.unwrap_or(ctx.config.default_type.as_str());

    let mut options = ctx.config.print_options();
    if let Some(layout) = layout {
        options.layout = layout;
    }
    let introspector = Introspector::new(&ctx.registry).with_options(options);

    if ctx.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "defaults",
            "type": type_name,
            "layout": options.layout,
        }))?;

        let mut buf = Vec::new();
        let summary = introspector.print_defaults(type_name, &mut buf)?;
        let report = String::from_utf8_lossy(&buf);
        let lines: Vec<&str> = report.lines().collect();

        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "defaults",
            "data": {
                "type": type_name,
                "lines": lines,
                "skipped": summary.skipped,
            }
        }))?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    let summary = introspector.print_defaults(type_name, &mut out)?;
    info!(
        type_name,
        lines = summary.lines,
        skipped = summary.skipped.len(),
        "printed defaults"
    );
    Ok(())
}
