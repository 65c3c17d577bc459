//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DefaultsError, DefaultsResult};
use crate::introspect::Layout;

use super::types::{Config, LogLevel, PROJECT_CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DefaultsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DefaultsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the first config file that applies and apply env overrides.
///
/// An explicit path must exist. Project and user files are optional, but a
/// file that exists and fails to parse is an error.
pub fn discover(
    explicit: Option<&Path>,
    project_root: &Path,
) -> DefaultsResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((config.with_env_overrides(), warnings))
}

/// Apply `CFGDEFAULTS_*` overrides read through `lookup`.
///
/// Unparseable values are ignored.
pub fn with_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(layout) = lookup("CFGDEFAULTS_LAYOUT").and_then(|v| Layout::parse(&v)) {
        config.output.layout = layout;
    }

    if let Some(level) = lookup("CFGDEFAULTS_LOG_LEVEL").and_then(|v| LogLevel::parse(&v)) {
        config.output.log_level = level;
    }

    if let Some(depth) = lookup("CFGDEFAULTS_MAX_DEPTH").and_then(|v| v.trim().parse().ok()) {
        config.traversal.max_depth = depth;
    }

    if let Some(name) = lookup("CFGDEFAULTS_DEFAULT_TYPE") {
        let name = name.trim();
        if !name.is_empty() {
            config.default_type = name.to_string();
        }
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cfgdefaults").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "default_type",
        "output",
        "layout",
        "log_level",
        "traversal",
        "max_depth",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
