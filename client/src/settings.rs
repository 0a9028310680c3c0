use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::ErrorKind;
use std::path::Path;

/// The JSON settings document: device defaults plus the window metrics a
/// graphical front end would persist. The usb crate never touches this file,
/// decoded values only reach the device through the facade.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: DefaultSettings,
    pub window: WindowMetrics,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            defaults: DefaultSettings::default(),
            window: WindowMetrics::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    pub volume: u8,
    pub led_status: String,
    pub gain: String,
    pub filter: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            volume: 50,
            led_status: "On".to_string(),
            gain: "Low".to_string(),
            filter: "Fast Roll-Off Low Latency".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowMetrics {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
        }
    }
}

impl Settings {
    pub fn read(path: &Path) -> Result<Settings> {
        match File::open(path) {
            Ok(reader) => serde_json::from_reader(reader).context(format!(
                "Could not parse settings file at {}",
                path.to_string_lossy()
            )),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Settings::default()),
            Err(error) => Err(error).context(format!(
                "Could not open settings file for reading at {}",
                path.to_string_lossy()
            )),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if let Err(e) = create_dir_all(parent) {
                if e.kind() != ErrorKind::AlreadyExists {
                    return Err(e).context(format!(
                        "Could not create settings directory at {}",
                        parent.to_string_lossy()
                    ))?;
                }
            }
        }
        let writer = File::create(path).context(format!(
            "Could not open settings file for writing at {}",
            path.to_string_lossy()
        ))?;
        serde_json::to_writer_pretty(writer, self).context(format!(
            "Could not write to settings file at {}",
            path.to_string_lossy()
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::read(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings.defaults.volume, 50);
        assert_eq!(settings.defaults.led_status, "On");
        assert_eq!(settings.window.width, 400);
    }

    #[test]
    fn settings_survive_a_save_and_load() {
        let path = temp_dir().join("dawnpro-settings-test.json");
        let mut settings = Settings::default();
        settings.defaults.volume = 75;
        settings.defaults.filter = "Non-Oversampling".to_string();
        settings.write(&path).unwrap();

        let reloaded = Settings::read(&path).unwrap();
        assert_eq!(reloaded.defaults.volume, 75);
        assert_eq!(reloaded.defaults.filter, "Non-Oversampling");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"defaults":{"volume":10}}"#).unwrap();
        assert_eq!(settings.defaults.volume, 10);
        assert_eq!(settings.defaults.gain, "Low");
        assert_eq!(settings.window.height, 300);
    }
}
