use std::{fs, io, path::Path, path::PathBuf};

use mazecore::{GenAlgorithm, Strategy};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::{constants::base_path, error::AppError, logging::LogLevel};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

const DEFAULT_HEIGHT: i32 = 12;
const DEFAULT_WIDTH: i32 = 24;
const DEFAULT_STEP_DELAY: u64 = 100;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub strategies: Option<Vec<Strategy>>,
    #[serde(default)]
    pub algorithm: Option<GenAlgorithm>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub show_explored: Option<bool>,
    #[serde(default)]
    pub random_endpoints: Option<bool>,
    #[serde(default)]
    pub step_delay: Option<u64>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

#[allow(dead_code)]
impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        base_path().join("settings.ron")
    }

    pub fn set_height(mut self, value: i32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> i32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn set_width(mut self, value: i32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn set_strategies(mut self, value: Vec<Strategy>) -> Self {
        self.strategies = Some(value);
        self
    }

    /// Configured strategies, all of them when the list is missing or empty.
    pub fn get_strategies(&self) -> Vec<Strategy> {
        match &self.strategies {
            Some(strategies) if !strategies.is_empty() => strategies.clone(),
            _ => Strategy::ALL.to_vec(),
        }
    }

    pub fn set_algorithm(mut self, value: GenAlgorithm) -> Self {
        self.algorithm = Some(value);
        self
    }

    pub fn get_algorithm(&self) -> GenAlgorithm {
        self.algorithm.unwrap_or_default()
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn set_show_explored(mut self, value: bool) -> Self {
        self.show_explored = Some(value);
        self
    }

    pub fn get_show_explored(&self) -> bool {
        self.show_explored.unwrap_or(true)
    }

    pub fn set_random_endpoints(mut self, value: bool) -> Self {
        self.random_endpoints = Some(value);
        self
    }

    pub fn get_random_endpoints(&self) -> bool {
        self.random_endpoints.unwrap_or(false)
    }

    pub fn set_step_delay(mut self, value: u64) -> Self {
        self.step_delay = Some(value);
        self
    }

    /// Pause between frames of the step-by-step playback, in milliseconds.
    pub fn get_step_delay(&self) -> u64 {
        self.step_delay.unwrap_or(DEFAULT_STEP_DELAY)
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn parse(source: &str) -> Result<Self, AppError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(source)?)
    }

    /// Loads the settings file, writing the default one first if there is none.
    ///
    /// Any other read error is returned and leaves the file alone.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::parse(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::parse(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_height(), DEFAULT_HEIGHT);
        assert_eq!(settings.get_width(), DEFAULT_WIDTH);
        assert_eq!(settings.get_strategies(), Strategy::ALL.to_vec());
        assert_eq!(settings.get_algorithm(), GenAlgorithm::DepthFirstSearch);
        assert!(settings.get_color());
        assert!(settings.get_show_explored());
        assert_eq!(settings.get_log_level(), LogLevel::Warn);
        assert!(!settings.get_random_endpoints());
        assert_eq!(settings.get_step_delay(), DEFAULT_STEP_DELAY);
    }

    #[test]
    fn partial_settings() {
        let settings = Settings::parse("(width: 5, algorithm: kruskals, strategies: [astar])").unwrap();
        assert_eq!(settings.get_width(), 5);
        assert_eq!(settings.get_height(), DEFAULT_HEIGHT);
        assert_eq!(settings.get_algorithm(), GenAlgorithm::RndKruskals);
        assert_eq!(settings.get_strategies(), vec![Strategy::AStar]);
    }

    #[test]
    fn empty_strategy_list_means_all() {
        let settings = Settings::new().set_strategies(vec![]);
        assert_eq!(settings.get_strategies().len(), 3);
    }

    #[test]
    fn broken_settings() {
        assert!(matches!(
            Settings::parse("(width: \"wide\")"),
            Err(AppError::Settings(_))
        ));
        assert!(Settings::parse("(strategies: [dijkstra])").is_err());
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("mazerun-settings-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn load_writes_defaults_when_missing() {
        let path = temp_path("missing/settings.ron");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.get_width(), DEFAULT_WIDTH);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        fs::write(&path, "(width: 40)").unwrap();
        assert_eq!(Settings::load(&path).unwrap().get_width(), 40);
    }

    #[test]
    fn load_keeps_unreadable_file() {
        let path = temp_path("latin1/settings.ron");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let contents = b"(width: 40, height: 30, // caf\xe9\n)";
        fs::write(&path, contents).unwrap();

        assert!(matches!(Settings::load(&path), Err(AppError::Io(_))));
        assert_eq!(fs::read(&path).unwrap(), contents);
    }

    #[test]
    fn builder() {
        let settings = Settings::new()
            .set_height(3)
            .set_color(false)
            .set_log_level(LogLevel::Debug);
        assert_eq!(settings.get_height(), 3);
        assert!(!settings.get_color());
        assert_eq!(settings.get_log_level(), LogLevel::Debug);
    }
}
