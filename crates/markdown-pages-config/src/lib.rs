use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a site's sources live and where the generated pages go.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown sources, converted one page per file.
    pub content_path: PathBuf,
    /// Copied as-is into the output directory.
    pub static_path: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Wiped and regenerated on every build.
    pub output_path: PathBuf,
    /// Prefix for root-relative links when the site is served from a sub-path.
    pub basepath: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("content"),
            static_path: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_path: PathBuf::from("docs"),
            basepath: String::from("/"),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "markdown-pages.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Config file in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    /// Expands shell variables and tilde in every path field.
    fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            content_path: expand(self.content_path),
            static_path: expand(self.static_path),
            template_path: expand(self.template_path),
            output_path: expand(self.output_path),
            basepath: self.basepath,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        assert_eq!(Config::config_path(), PathBuf::from("markdown-pages.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.content_path, PathBuf::from("content"));
        assert_eq!(config.static_path, PathBuf::from("static"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.output_path, PathBuf::from("docs"));
        assert_eq!(config.basepath, "/");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = toml::from_str(r#"output_path = "public""#).unwrap();

        assert_eq!(config.output_path, PathBuf::from("public"));
        assert_eq!(config.content_path, PathBuf::from("content"));
        assert_eq!(config.basepath, "/");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            basepath: "/site/".to_string(),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MDP_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$MDP_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("MDP_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_unknown_variable_keeps_literal_path() {
        let config = Config {
            content_path: PathBuf::from("$MDP_SURELY_UNSET_VAR/content"),
            ..Config::default()
        }
        .expanded();

        assert_eq!(
            config.content_path,
            PathBuf::from("$MDP_SURELY_UNSET_VAR/content")
        );
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("markdown-pages.toml");
        std::fs::write(&config_file, "content_path = [").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/markdown-pages.toml");
        let test_config = Config {
            content_path: PathBuf::from("/tmp/site/content"),
            basepath: "/blog/".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_env_var_in_toml_is_expanded_on_load() {
        unsafe {
            env::set_var("MDP_SITE_ROOT", "/custom/site");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("markdown-pages.toml");
        std::fs::write(&config_file, r#"output_path = "$MDP_SITE_ROOT/docs""#).unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.output_path, PathBuf::from("/custom/site/docs"));

        unsafe {
            env::remove_var("MDP_SITE_ROOT");
        }
    }
}
