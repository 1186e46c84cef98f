use std::fs;
use std::path::Path;

use crate::model::config::PlannerConfig;

/// Read config.toml from the data directory. A missing file yields the
/// defaults; a malformed one is reported on stderr and also yields the
/// defaults, so a bad config can never keep the planner from starting.
pub fn read_config(data_dir: &Path) -> PlannerConfig {
    let path = data_dir.join("config.toml");
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => return PlannerConfig::default(),
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: ignoring malformed {}: {}", path.display(), e);
            PlannerConfig::default()
        }
    }
}
