use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use crossterm::style::{Color, Stylize as _};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

/// Log level as written in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ORDER: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Level `steps` notches more verbose, capped at `Trace`.
    pub fn raised(self, steps: u8) -> Self {
        let idx = Self::ORDER.iter().position(|&l| l == self).unwrap_or(0);
        Self::ORDER[(idx + steps as usize).min(Self::ORDER.len() - 1)]
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn, true))
}

pub fn init(level: LogLevel, color: bool) -> Result<(), AppError> {
    let logger = get_logger();
    logger.set_min_level(level.to_filter());
    logger.set_color(color);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Writes records to stderr as `[LEVEL source] message`.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
    color: RwLock<bool>,
}

impl AppLogger {
    fn new(min_level: LevelFilter, color: bool) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            color: RwLock::new(color),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        self.min_level.read().map(|l| *l).unwrap_or(LevelFilter::Warn)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        if let Ok(mut min_level) = self.min_level.write() {
            *min_level = level;
        }
    }

    fn color(&self) -> bool {
        self.color.read().map(|c| *c).unwrap_or(false)
    }

    pub fn set_color(&self, value: bool) {
        if let Ok(mut color) = self.color.write() {
            *color = value;
        }
    }

    pub fn format(&self, record: &Record) -> String {
        let level = format!("{:<5}", record.level());
        let level = if self.color() {
            level.with(level_color(record.level())).to_string()
        } else {
            level
        };
        let source = record.module_path().unwrap_or("unknown");

        format!("[{} {}] {}", level, source, record.args())
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::White,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Grey,
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere left to report a failed write to stderr
            let _ = writeln!(io::stderr().lock(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
