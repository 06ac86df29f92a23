use crate::constant::log::*;
use crate::constant::util::{mask_secret, trim_base_url, SensitiveMode};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".jenkins-log-lens.toml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{msg}", msg = ERR_NEED_A_JENKINS_URL)]
    MissingUrl,

    #[error("{msg}", msg = ERR_NEED_A_JENKINS_USERNAME)]
    MissingUsername,

    #[error("{msg}", msg = ERR_NEED_A_JENKINS_API_TOKEN)]
    MissingApiToken,

    #[error("{msg}", msg = ERR_NO_HOME_DIR)]
    NoHomeDir,

    #[error("{msg} {path:?}: {source}", msg = ERR_CONFIG_READ)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{msg} {path:?}: {source}", msg = ERR_CONFIG_PARSE)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{msg} {path:?}: {reason}", msg = ERR_CONFIG_SAVE)]
    Save { path: PathBuf, reason: String },
}

/// # Config File
///
/// Partial connection settings. One of these comes from the toml file, one from flags and
/// environment variables; [`JenkinsConfig::resolve`] merges them.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub username: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// `Ok(None)` when there is no file at `path`.
    pub fn get_from_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let save_err = |reason: String| ConfigError::Save {
            path: path.to_path_buf(),
            reason,
        };

        let str = toml::to_string(self).map_err(|e| save_err(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_err(e.to_string()))?;
        }
        File::create(path)
            .and_then(|mut file| file.write_all(str.as_bytes()))
            .map_err(|e| save_err(e.to_string()))
    }

    /// Fields set in `self` win, holes are filled from `fallback`.
    pub fn or(self, fallback: ConfigFile) -> ConfigFile {
        ConfigFile {
            url: self.url.or(fallback.url),
            username: self.username.or(fallback.username),
            api_token: self.api_token.or(fallback.api_token),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
        }
    }
}

impl Debug for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFile")
            .field("url", &self.url)
            .field("username", &self.username)
            .field(
                "api_token",
                &self
                    .api_token
                    .as_deref()
                    .map(|t| mask_secret(t, SensitiveMode::Partial(4))),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

/// Connection settings for one jenkins server.
#[derive(Clone, PartialEq)]
pub struct JenkinsConfig {
    pub url: String,
    pub username: String,
    pub api_token: String,
    pub timeout_secs: u64,
}

impl JenkinsConfig {
    pub fn new(url: &str, username: &str, api_token: &str) -> Self {
        Self {
            url: trim_base_url(url).to_string(),
            username: username.to_string(),
            api_token: api_token.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// # resolve
    ///
    /// ### Arguments
    ///
    /// * `overrides`: settings from flags and environment variables
    /// * `file`: settings from the config file, if one exists
    pub fn resolve(overrides: ConfigFile, file: Option<ConfigFile>) -> Result<Self, ConfigError> {
        let merged = overrides.or(file.unwrap_or_default());

        let url = merged
            .url
            .filter(|v| !trim_base_url(v).is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let username = merged
            .username
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingUsername)?;
        let api_token = merged
            .api_token
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiToken)?;

        let mut config = JenkinsConfig::new(&url, &username, &api_token);
        if let Some(timeout_secs) = merged.timeout_secs.filter(|t| *t > 0) {
            config.timeout_secs = timeout_secs;
        }

        Ok(config)
    }

    pub fn to_config_file(&self) -> ConfigFile {
        ConfigFile {
            url: Some(self.url.clone()),
            username: Some(self.username.clone()),
            api_token: Some(self.api_token.clone()),
            timeout_secs: Some(self.timeout_secs),
        }
    }

    pub fn masked_api_token(&self) -> String {
        mask_secret(&self.api_token, SensitiveMode::Partial(4))
    }
}

impl Debug for JenkinsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("api_token", &self.masked_api_token())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_file() -> ConfigFile {
        ConfigFile {
            url: Some("https://jenkins.example.com/".to_string()),
            username: Some("somebody@email.com".to_string()),
            api_token: Some("11aa22bb33cc".to_string()),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_get_from_path_not_exist() {
        let path = PathBuf::from("non_existent_path/.jenkins-log-lens.toml");
        assert!(ConfigFile::get_from_path(&path).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let file = ConfigFile {
            timeout_secs: Some(10),
            ..full_file()
        };
        file.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            r#"url = "https://jenkins.example.com/"
username = "somebody@email.com"
api_token = "11aa22bb33cc"
timeout_secs = 10
"#
        );

        let loaded = ConfigFile::get_from_path(&path).unwrap();
        assert_eq!(loaded, Some(file));
    }

    #[test]
    fn test_get_from_path_invalid() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "url = [").unwrap();
        assert!(matches!(
            ConfigFile::get_from_path(temp_file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_resolve_prefers_overrides() {
        let overrides = ConfigFile {
            username: Some("other@email.com".to_string()),
            timeout_secs: Some(5),
            ..Default::default()
        };
        let config = JenkinsConfig::resolve(overrides, Some(full_file())).unwrap();

        assert_eq!(config.url, "https://jenkins.example.com");
        assert_eq!(config.username, "other@email.com");
        assert_eq!(config.api_token, "11aa22bb33cc");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_resolve_defaults_timeout() {
        let config = JenkinsConfig::resolve(full_file(), None).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_missing_fields() {
        assert!(matches!(
            JenkinsConfig::resolve(ConfigFile::default(), None),
            Err(ConfigError::MissingUrl)
        ));

        let no_token = ConfigFile {
            api_token: Some(String::new()),
            ..full_file()
        };
        assert!(matches!(
            JenkinsConfig::resolve(no_token, None),
            Err(ConfigError::MissingApiToken)
        ));
    }

    #[test]
    fn test_debug_masks_token() {
        let config = JenkinsConfig::resolve(full_file(), None).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("11********cc"));
        assert!(!debug.contains("11aa22bb33cc"));

        let debug = format!("{:?}", full_file());
        assert!(!debug.contains("11aa22bb33cc"));
    }
}
