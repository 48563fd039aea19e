use std::path::PathBuf;

use crate::error::LookupError;

/// TOML config file format.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    omdb: Option<OmdbConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct OmdbConfig {
    api_key: Option<String>,
}

/// Load the OMDb API key.
///
/// Priority: `OMDB_API_KEY` env var > config file.
pub fn load_api_key() -> Result<String, LookupError> {
    std::env::var("OMDB_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .or_else(|| load_config_file().and_then(|c| c.api_key))
        .ok_or_else(|| {
            LookupError::Config(
                "Missing API key. Set OMDB_API_KEY env var or add to config file".to_string(),
            )
        })
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("reelrack").join("credentials.toml"))
}

/// Save the API key to the config file, creating parent directories as
/// needed. Returns the path the file was written to.
pub fn save_to_file(api_key: &str) -> Result<PathBuf, LookupError> {
    let path = config_path()
        .ok_or_else(|| LookupError::Config("Could not determine config directory".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        omdb: Some(OmdbConfig {
            api_key: Some(api_key.to_string()),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| LookupError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(&path, toml_str)?;
    Ok(path)
}

fn load_config_file() -> Option<OmdbConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.omdb
}
