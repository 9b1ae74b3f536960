mod defaults;

pub use defaults::{ConfigFile, Defaults};

use crate::error::{InvoiceError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Output directory used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT_DIR: &str = "invoices";

/// Per-user config file (e.g. ~/.config/invoice-generator/config.toml)
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "invoice-generator")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve the output directory: absolute paths are kept, relative ones hang off the project root.
pub fn resolve_output_dir(output_dir: Option<&str>, project_root: &Path) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let path = expand_path(dir);
            if path.is_absolute() {
                path
            } else {
                project_root.join(path)
            }
        }
        None => project_root.join(DEFAULT_OUTPUT_DIR),
    }
}

/// Find the config file to read.
///
/// An explicit path must exist. Otherwise `config.toml` in the project root is
/// preferred over the per-user file, and having neither is not an error.
pub fn locate_config(explicit: Option<&Path>, project_root: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(InvoiceError::ConfigFileNotFound(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = project_root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(user_config_file().filter(|path| path.exists()))
}

/// Parse the `[defaults]` table of a config file
pub fn load_defaults_from(path: &Path) -> Result<Defaults> {
    let content = fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&content).map_err(|e| InvoiceError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(file.defaults)
}

/// Load defaults from whichever config file applies (empty when there is none)
pub fn load_defaults(explicit: Option<&Path>, project_root: &Path) -> Result<Defaults> {
    match locate_config(explicit, project_root)? {
        Some(path) => {
            log::info!("Loading defaults from {}", path.display());
            load_defaults_from(&path)
        }
        None => {
            log::info!("No config file found, using command-line values only");
            Ok(Defaults::default())
        }
    }
}
