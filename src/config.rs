use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://graph.microsoft.com/v1.0";
const ACCESS_TOKEN_ENV: &str = "TODOSYNC_ACCESS_TOKEN";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "todosync", "todosync")
}

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("TODOSYNC_CONFIG") {
        return PathBuf::from(path);
    }
    if let Some(dirs) = project_dirs() {
        return dirs.config_dir().join("config.toml");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".todosync-config.toml")
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub todo: TodoConfig,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TodoConfig {
    pub api_base: String,
    pub access_token: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            access_token: String::new(),
        }
    }
}

// Keeps the token out of `{:?}` output.
impl std::fmt::Debug for TodoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoConfig")
            .field("api_base", &self.api_base)
            .field("access_token", &(!self.access_token.trim().is_empty()))
            .finish()
    }
}

impl TodoConfig {
    /// Configured token, then `$TODOSYNC_ACCESS_TOKEN`. Blank values count as absent.
    pub fn credential(&self) -> Option<String> {
        let configured = self.access_token.trim();
        if !configured.is_empty() {
            return Some(configured.to_string());
        }
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn client_settings(&self) -> ClientSettings {
        let base = self.api_base.trim().trim_end_matches('/');
        ClientSettings {
            api_base: if base.is_empty() {
                DEFAULT_API_BASE.to_string()
            } else {
                base.to_string()
            },
            token: self.credential(),
        }
    }
}

/// Everything the remote client needs, passed in explicitly.
#[derive(Clone)]
pub struct ClientSettings {
    pub api_base: String,
    pub token: Option<String>,
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    pub fn load() -> Self {
        Self::load_from_path(&config_path())
    }

    pub fn load_from_path(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Config::default();
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse config, using defaults");
                Config::default()
            }
        }
    }

    pub fn save_to_path(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, content)
    }
}
