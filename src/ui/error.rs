use cfgdefaults::DefaultsError;

fn hint(err: &DefaultsError) -> Option<&'static str> {
    match err {
        DefaultsError::TypeNotFound { .. } => {
            Some("Run 'cfgdefaults list' to see the registered configuration types.")
        }
        DefaultsError::DepthExceeded { .. } => {
            Some("Raise traversal.max_depth, or check the schema for a composite cycle.")
        }
        DefaultsError::InvalidConfig { .. } => Some("Fix the configuration file and try again."),
        DefaultsError::Instantiation { .. } => {
            Some("The root type needs a default constructor in its descriptor.")
        }
        DefaultsError::Access { .. } | DefaultsError::Io(_) => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<DefaultsError>() {
        Some(defaults) => match hint(defaults) {
            Some(hint) => format!("[ERROR] {defaults}\n  {hint}\n"),
            None => format!("[ERROR] {defaults}\n"),
        },
        None => format!("[ERROR] {err}\n"),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
