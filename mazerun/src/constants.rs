use std::path::PathBuf;

use dirs::preference_dir;

pub const APP_NAME: &str = "mazerun";

pub fn base_path() -> PathBuf {
    preference_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
