pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod render;
pub mod settings;

use std::{io::Write, thread, time::Duration};

use crossterm::{cursor, queue, terminal};
use mazecore::{
    generate_with, random_endpoints, search, Cell, GenAlgorithm, Maze, Random, Search, Strategy,
};
use rand::SeedableRng as _;

pub use error::AppError;
use render::{render, render_progress, RenderOptions};
use settings::Settings;

/// Everything one run needs, after merging the settings file with the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub height: i32,
    pub width: i32,
    pub seed: Option<u64>,
    pub algorithm: GenAlgorithm,
    pub strategies: Vec<Strategy>,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    /// Endpoints not given explicitly are drawn at random from the maze's seed.
    pub random_endpoints: bool,
    pub color: bool,
    pub show_explored: bool,
    /// Replay every search one expanded cell at a time before its report.
    pub step: bool,
    pub step_delay: Duration,
}

impl RunOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            height: settings.get_height(),
            width: settings.get_width(),
            seed: None,
            algorithm: settings.get_algorithm(),
            strategies: settings.get_strategies(),
            start: None,
            goal: None,
            random_endpoints: settings.get_random_endpoints(),
            color: settings.get_color(),
            show_explored: settings.get_show_explored(),
            step: false,
            step_delay: Duration::from_millis(settings.get_step_delay()),
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color,
            show_explored: self.show_explored,
        }
    }
}

/// Parses `ROW,COL`, e.g. `3,4`.
pub fn parse_cell(s: &str) -> Result<Cell, AppError> {
    let invalid = || AppError::InvalidCellArg(s.to_string());

    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Cell(row, col))
}

/// Explicit endpoints first, then random ones if asked for, then the maze's corners.
fn endpoints(maze: &Maze, options: &RunOptions) -> (Cell, Cell) {
    let (start, goal) = if options.random_endpoints {
        let mut rng = Random::seed_from_u64(maze.seed().unwrap_or_default());
        random_endpoints(maze, &mut rng)
    } else {
        (maze.start(), maze.goal())
    };

    (options.start.unwrap_or(start), options.goal.unwrap_or(goal))
}

/// Generates one maze and solves it with every requested strategy, writing a report per
/// strategy to `out`.
pub fn run(options: &RunOptions, out: &mut impl Write) -> Result<(), AppError> {
    let maze = generate_with(options.height, options.width, options.seed, options.algorithm)?;
    let (start, goal) = endpoints(&maze, options);

    writeln!(
        out,
        "Maze {}x{} ({}), seed {}",
        maze.height(),
        maze.width(),
        options.algorithm,
        maze.seed().unwrap_or_default()
    )?;
    writeln!(out, "From {} to {}", start, goal)?;

    for &strategy in &options.strategies {
        let search = search(&maze, start, goal, strategy)?;

        if options.step {
            replay(&maze, start, goal, &search, options, out)?;
        }

        writeln!(out)?;
        writeln!(out, "== {} ==", strategy)?;
        writeln!(
            out,
            "{}",
            render(&maze, start, goal, Some(&search), options.render_options())
        )?;

        let coverage = search.coverage(&maze) * 100.0;
        match &search.path {
            Some(path) => writeln!(
                out,
                "Exit at {}. Explored {} tiles ({:.2}%). Path length {}.",
                goal,
                search.explored_count(),
                coverage,
                path.steps()
            )?,
            None => {
                log::warn!("{} found no path from {} to {}", strategy, start, goal);
                writeln!(
                    out,
                    "No path from {} to {}. Explored {} tiles ({:.2}%).",
                    start,
                    goal,
                    search.explored_count(),
                    coverage
                )?
            }
        }
        writeln!(
            out,
            "Walked {} tiles. Depth {} (max {}).",
            search.walked(),
            search.depth(),
            search.max_depth()
        )?;
    }

    Ok(())
}

/// Redraws the maze after every expanded cell, in expansion order.
fn replay(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    search: &Search,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<(), AppError> {
    for (i, &current) in search.explored.iter().enumerate() {
        let explored = &search.explored[..=i];

        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        writeln!(out, "Visiting {}...", current)?;
        writeln!(
            out,
            "Explored {} tiles ({:.2}%).",
            explored.len(),
            explored.len() as f64 / maze.cell_count() as f64 * 100.0
        )?;
        writeln!(
            out,
            "{}",
            render_progress(maze, start, goal, explored, options.render_options())
        )?;
        out.flush()?;

        if !options.step_delay.is_zero() {
            thread::sleep(options.step_delay);
        }
    }

    Ok(())
}
