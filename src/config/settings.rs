use std::path::PathBuf;

pub struct RosterSettings {
    pub data_dir: PathBuf,
    pub extension: &'static str,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            extension: "csv",
        }
    }
}

pub struct AppConfig {
    pub roster: RosterSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            roster: RosterSettings::default(),
        }
    }
}
