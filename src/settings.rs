use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "sofficePath")]
    pub soffice_path: String,
    #[serde(rename = "templatePath")]
    pub template_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            soffice_path: "".to_string(),
            template_path: "Camp Check Template.xlsx".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "settings file {} is not valid JSON ({e}), using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::fs;
    use std::path::Path;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load(Path::new("no-such-settings.json"));
        assert_eq!(settings.template_path, "Camp Check Template.xlsx");
        assert!(settings.soffice_path.is_empty());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"sofficePath": "C:/soffice.com"}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.soffice_path, "C:/soffice.com");
        assert_eq!(settings.template_path, "Camp Check Template.xlsx");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let settings = Settings::load(&path);
        assert!(settings.soffice_path.is_empty());
    }
}
