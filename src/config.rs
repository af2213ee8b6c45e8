use crate::error::{Result, ScorecardError};
use crate::types::config::ScorecardConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "scorecard.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".scorecard/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/scorecard/config.toml";

#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: ScorecardConfig,
    /// Files that contributed, in merge order.
    pub layers: Vec<PathBuf>,
}

pub fn load_config(root: &Path) -> Result<LoadedConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = Vec::new();

    let candidates = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);
    for path in candidates {
        if merge_file_if_exists(&mut merged, &path)? {
            layers.push(path);
        }
    }

    let config: ScorecardConfig = merged.try_into()?;
    config.validate()?;
    Ok(LoadedConfig { config, layers })
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScorecardError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let loaded = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(loaded.layers.is_empty());
        assert_eq!(
            loaded.config.output_format().expect("default format"),
            OutputFormat::Md
        );
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[report]
format = "json"
progress_width = 30

[logging]
level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
progress_width = 12
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".scorecard")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
format = "md"
"#,
        )
        .expect("local override should write");

        let loaded = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(loaded.layers.len(), 3);
        assert_eq!(loaded.config.output_format().expect("md"), OutputFormat::Md);
        assert_eq!(loaded.config.render_options().progress_width, 12);
        assert_eq!(loaded.config.log_level(), "info");
    }

    #[test]
    fn load_config_reports_path_on_syntax_error() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[report\nformat = ")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_config_validates_merged_result() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
progress_width = 1
"#,
        )
        .expect("config should write");

        assert!(matches!(
            load_config_with_global(root.path(), None),
            Err(ScorecardError::ConfigParse(_))
        ));
    }
}
