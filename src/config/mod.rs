use crate::errors::{AppError, AppResult};
use crate::models::policy::{ConfirmationPolicy, DeadlineAnchor};
use crate::utils::date::Locale;
use crate::utils::path::{app_dir, expand_tilde};
use crate::utils::time::parse_duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Confirmation policy as written in the config file: a preset name, with
/// optional per-field overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<DeadlineAnchor>,
}

fn default_preset() -> String {
    "standard".to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            open_delay: None,
            close_deadline: None,
            anchor: None,
        }
    }
}

impl PolicyConfig {
    pub fn resolve(&self) -> AppResult<ConfirmationPolicy> {
        let mut policy = ConfirmationPolicy::preset(&self.preset)?;
        if let Some(d) = &self.open_delay {
            policy.open_delay = parse_duration(d)?;
        }
        if let Some(d) = &self.close_deadline {
            policy.close_deadline = parse_duration(d)?;
        }
        if let Some(a) = self.anchor {
            policy.anchor = a;
        }
        Ok(policy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub policy: PolicyConfig,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            locale: Locale::default(),
            log_level: default_log_level(),
            policy: PolicyConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        app_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpresence.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rpresence.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::from_yaml(&fs::read_to_string(&path)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Missing fields take their defaults; the policy is validated eagerly.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.policy.resolve()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
        }

        // Opening the pool creates the file and runs migrations
        crate::db::pool::DbPool::new(&config.database)
            .map_err(|e| AppError::Config(format!("cannot initialize database: {e}")))?;

        Ok(db_path)
    }
}
