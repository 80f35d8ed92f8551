use std::path::PathBuf;

use serde::Deserialize;

/// App configuration, read from an optional `kaloriku.json` in the working
/// directory. There are no CLI flags; a missing file just means defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Loopback address the server binds to.
    pub bind_addr: String,
    /// Pre-trained model artifact (JSON weights).
    pub model_path: PathBuf,
    /// Ordered label list, index-aligned with the model output.
    pub class_names_path: PathBuf,
    /// Calorie reference CSV.
    pub calorie_csv_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "127.0.0.1:7878".to_owned(),
            model_path: PathBuf::from("model/kaloriku_net.json"),
            class_names_path: PathBuf::from("model/class_names.json"),
            calorie_csv_path: PathBuf::from("data/kalori_fatsecret.csv"),
        }
    }
}

impl AppConfig {
    pub const FILE_NAME: &'static str = "kaloriku.json";

    pub fn load() -> Result<AppConfig, String> {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| format!("config '{}' is invalid: {}", Self::FILE_NAME, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(e) => Err(format!(
                "config '{}' could not be read: {}",
                Self::FILE_NAME,
                e
            )),
        }
    }
}
