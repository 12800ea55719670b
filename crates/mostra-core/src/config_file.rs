use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// URL of the published annals document.
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://repositorio.ifrs.edu.br/bitstream/handle/123456789/1765/1234567891765.pdf";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub storage: Option<StorageConfig>,
    pub source: Option<SourceConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub records_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub document_url: Option<String>,
    pub document_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: Option<String>,
}

/// Platform config directory path: `<config_dir>/mostra/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mostra").join("config.toml"))
}

/// Load config by cascading CWD `.mostra.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".mostra.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    fn pick<T: Clone>(overlay: Option<T>, base: Option<T>) -> Option<T> {
        overlay.or(base)
    }

    ConfigFile {
        storage: Some(StorageConfig {
            data_dir: pick(
                overlay.storage.as_ref().and_then(|s| s.data_dir.clone()),
                base.storage.as_ref().and_then(|s| s.data_dir.clone()),
            ),
            records_file: pick(
                overlay.storage.as_ref().and_then(|s| s.records_file.clone()),
                base.storage.as_ref().and_then(|s| s.records_file.clone()),
            ),
        }),
        source: Some(SourceConfig {
            document_url: pick(
                overlay.source.as_ref().and_then(|s| s.document_url.clone()),
                base.source.as_ref().and_then(|s| s.document_url.clone()),
            ),
            document_file: pick(
                overlay.source.as_ref().and_then(|s| s.document_file.clone()),
                base.source.as_ref().and_then(|s| s.document_file.clone()),
            ),
        }),
        server: Some(ServerConfig {
            bind_addr: pick(
                overlay.server.as_ref().and_then(|s| s.bind_addr.clone()),
                base.server.as_ref().and_then(|s| s.bind_addr.clone()),
            ),
        }),
    }
}

/// Fully resolved runtime settings.
///
/// Resolution order: `MOSTRA_*` environment variables > config file >
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub records_path: PathBuf,
    pub document_path: PathBuf,
    pub document_url: String,
    pub bind_addr: String,
}

impl Settings {
    pub fn load() -> Self {
        Self::from_config(load_config())
    }

    pub fn from_config(file: ConfigFile) -> Self {
        let env = |name: &str| std::env::var(name).ok();

        let data_dir = PathBuf::from(
            env("MOSTRA_DATA_DIR")
                .or_else(|| file.storage.as_ref().and_then(|s| s.data_dir.clone()))
                .unwrap_or_else(|| "data".to_string()),
        );
        let records_path = env("MOSTRA_RECORDS_FILE")
            .or_else(|| file.storage.as_ref().and_then(|s| s.records_file.clone()))
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("data.json"));
        let document_path = env("MOSTRA_DOCUMENT_FILE")
            .or_else(|| file.source.as_ref().and_then(|s| s.document_file.clone()))
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("anais_2024.pdf"));
        let document_url = env("MOSTRA_DOCUMENT_URL")
            .or_else(|| file.source.as_ref().and_then(|s| s.document_url.clone()))
            .unwrap_or_else(|| DEFAULT_DOCUMENT_URL.to_string());
        let bind_addr = env("MOSTRA_BIND_ADDR")
            .or_else(|| file.server.as_ref().and_then(|s| s.bind_addr.clone()))
            .unwrap_or_else(|| "0.0.0.0:8000".to_string());

        Settings {
            data_dir,
            records_path,
            document_path,
            document_url,
            bind_addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_config(ConfigFile::default());
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.records_path, PathBuf::from("data/data.json"));
        assert_eq!(settings.document_path, PathBuf::from("data/anais_2024.pdf"));
        assert_eq!(settings.document_url, DEFAULT_DOCUMENT_URL);
        assert_eq!(settings.bind_addr, "0.0.0.0:8000");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file: ConfigFile = toml::from_str(
            r#"
            [storage]
            data_dir = "var/mostra"

            [server]
            bind_addr = "127.0.0.1:9000"
            "#,
        )
        .unwrap();
        let settings = Settings::from_config(file);
        assert_eq!(settings.data_dir, PathBuf::from("var/mostra"));
        // Derived paths follow the configured data dir.
        assert_eq!(settings.records_path, PathBuf::from("var/mostra/data.json"));
        assert_eq!(settings.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base: ConfigFile = toml::from_str(
            r#"
            [source]
            document_url = "https://example.org/base.pdf"
            document_file = "data/base.pdf"
            "#,
        )
        .unwrap();
        let overlay: ConfigFile = toml::from_str(
            r#"
            [source]
            document_url = "https://example.org/overlay.pdf"
            "#,
        )
        .unwrap();
        let merged = merge(base, overlay);
        let source = merged.source.unwrap();
        assert_eq!(
            source.document_url.as_deref(),
            Some("https://example.org/overlay.pdf")
        );
        // Base value survives where the overlay is silent.
        assert_eq!(source.document_file.as_deref(), Some("data/base.pdf"));
    }
}
