use std::io;

use mazecore::MazeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Maze(#[from] MazeError),
    #[error("IO error; {0}")]
    Io(#[from] io::Error),
    #[error("Error reading settings file; {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("Logger already set; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Invalid cell '{0}', expected ROW,COL")]
    InvalidCellArg(String),
}
