use crate::error::{Result, ToolmatchError};
use crate::types::config::ToolmatchConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "toolmatch.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".toolmatch/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/toolmatch/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ToolmatchConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Global, project and local files merged in that order. Returns `None` when
/// the project has no `toolmatch.toml`.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ToolmatchConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let mut cfg: ToolmatchConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ToolmatchError::ConfigParse(e.to_string()))?;
    resolve_relative_paths(&mut cfg, root);
    cfg.validate()?;
    Ok(Some(cfg))
}

fn resolve_relative_paths(cfg: &mut ToolmatchConfig, root: &Path) {
    if let Some(path) = cfg.catalog.as_mut().and_then(|catalog| catalog.path.as_mut()) {
        if path.is_relative() {
            *path = root.join(&*path);
        }
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ToolmatchError::ConfigParse(format!("{}: {}", path.display(), e)))
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
