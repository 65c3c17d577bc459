use std::io;

use cfgdefaults::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// `--json` form of [`print_config_warnings`]: one `warning` event per key.
pub fn emit_config_warnings(warnings: &[ConfigWarning]) -> io::Result<()> {
    for event in warnings.iter().map(warning_event) {
        crate::ui::json::emit(event)?;
    }
    Ok(())
}

fn warning_event(w: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "kind": "unknown_config_key",
        "key": w.key,
        "file": w.file.display().to_string(),
        "line": w.line,
        "suggestion": w.suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_warning_event_fields() {
        let event = warning_event(&ConfigWarning {
            key: "layuot".to_string(),
            file: PathBuf::from("cfgdefaults.toml"),
            line: Some(2),
            suggestion: Some("layout".to_string()),
        });
        assert_eq!(event["event"], "warning");
        assert_eq!(event["key"], "layuot");
        assert_eq!(event["file"], "cfgdefaults.toml");
        assert_eq!(event["line"], 2);
        assert_eq!(event["suggestion"], "layout");
    }

    #[test]
    fn test_warning_event_without_line() {
        let event = warning_event(&ConfigWarning {
            key: "x".to_string(),
            file: PathBuf::from("c.toml"),
            line: None,
            suggestion: None,
        });
        assert!(event["line"].is_null());
        assert!(event["suggestion"].is_null());
    }
}
