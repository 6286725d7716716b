//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "relnote.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Writes configuration to the given path, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn save_config(path: impl AsRef<Path>, config: &Config) -> ConfigResult<()> {
    let path = path.as_ref();
    debug!(?path, "writing configuration");

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;

    Ok(())
}

/// Finds the configuration file starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut dir = start_dir.as_ref();

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        dir = dir.parent()?;
    }
}

/// Loads the nearest configuration file, or the defaults when there is none.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be parsed.
pub fn load_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    load_with_root(start_dir).map(|(config, _)| config)
}

/// Like [`load_or_default`], also returning the directory holding the file.
///
/// Relative paths inside the configuration are meant to be resolved against
/// that directory. It is `None` when the defaults are used.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be parsed.
pub fn load_with_root(start_dir: impl AsRef<Path>) -> ConfigResult<(Config, Option<PathBuf>)> {
    match find_config_from(start_dir) {
        Some(path) => {
            let config = load_config(&path)?;
            let root = path.parent().map(Path::to_path_buf);
            Ok((config, root))
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "relnote.toml");
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/relnote.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("relnote.toml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [version]
            stable_suffix = "-release"
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.version.stable_suffix, "-release");
        assert_eq!(config.version.tag_prefix, "v");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }

    #[test]
    fn test_save_config_is_loadable() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.repository.url = Some("https://github.com/o/r".to_string());
        save_config(&config_path, &config).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[filter]"));
        assert_eq!(load_config(&config_path).unwrap(), config);
    }

    #[test]
    fn test_find_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(parent_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let child_dir = parent_dir.path().join("subdir");
        fs::create_dir(&child_dir).unwrap();

        let found = find_config_from(&child_dir).unwrap();
        assert_eq!(found, parent_dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_or_default_with_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
            [changelog]
            path = "HISTORY.md"
        "#,
        )
        .unwrap();

        let config = load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config.changelog.path, "HISTORY.md");
    }

    #[test]
    fn test_load_with_root_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
            [repository]
            path = "rn"
        "#,
        )
        .unwrap();
        let scripts = temp_dir.path().join("scripts");
        fs::create_dir(&scripts).unwrap();

        let (config, root) = load_with_root(&scripts).unwrap();
        assert_eq!(config.repository.path, "rn");
        assert_eq!(root.as_deref(), Some(temp_dir.path()));
    }

    #[test]
    fn test_load_with_root_without_file() {
        let temp_dir = TempDir::new().unwrap();
        // Nothing above a fresh temp dir is expected to hold a relnote.toml.
        let (config, root) = load_with_root(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(root.is_none());
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[[[").unwrap();

        assert!(load_or_default(temp_dir.path()).is_err());
    }
}
