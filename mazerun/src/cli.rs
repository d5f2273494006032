use std::time::Duration;

use clap::{ArgAction, Parser};
use mazecore::{Cell, GenAlgorithm, Strategy};

use crate::{logging::LogLevel, parse_cell, settings::Settings, RunOptions};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazerun")]
pub struct Args {
    #[clap(long, help = "Maze height in cells")]
    pub height: Option<i32>,
    #[clap(long, help = "Maze width in cells")]
    pub width: Option<i32>,
    #[clap(short, long, help = "Seed for the maze generator")]
    pub seed: Option<u64>,
    #[clap(
        short = 'S',
        long = "strategy",
        help = "Solver to run: bfs, dfs or astar (repeatable)"
    )]
    pub strategies: Vec<Strategy>,
    #[clap(short, long, action, help = "Run every solver")]
    pub all: bool,
    #[clap(long, help = "Generation algorithm: dfs or kruskals")]
    pub algorithm: Option<GenAlgorithm>,
    #[clap(long, value_parser = parse_cell, help = "Start cell as ROW,COL")]
    pub start: Option<Cell>,
    #[clap(long, value_parser = parse_cell, help = "Goal cell as ROW,COL")]
    pub goal: Option<Cell>,
    #[clap(long, action, help = "Place start and goal on random cells")]
    pub random_endpoints: bool,
    #[clap(long, action, help = "Replay the search one expanded cell at a time")]
    pub step: bool,
    #[clap(long, help = "Milliseconds between replay frames")]
    pub step_delay: Option<u64>,
    #[clap(long, action, help = "Disable colored output")]
    pub no_color: bool,
    #[clap(long, action, help = "Don't mark explored cells")]
    pub no_explored: bool,
    #[clap(short, long, action, help = "Only log errors")]
    pub quiet: bool,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, repeat for more")]
    pub verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    pub debug_config: bool,
}

impl Args {
    /// `--quiet` wins over any number of `-v`.
    pub fn log_level(&self, settings: &Settings) -> LogLevel {
        if self.quiet {
            LogLevel::Error
        } else {
            settings.get_log_level().raised(self.verbose)
        }
    }

    pub fn color(&self, settings: &Settings) -> bool {
        settings.get_color() && !self.no_color
    }

    /// Settings file values, overridden by whatever was given on the command line.
    pub fn run_options(&self, settings: &Settings) -> RunOptions {
        let mut options = RunOptions::from_settings(settings);

        options.height = self.height.unwrap_or(options.height);
        options.width = self.width.unwrap_or(options.width);
        options.seed = self.seed;
        options.algorithm = self.algorithm.unwrap_or(options.algorithm);
        options.start = self.start;
        options.goal = self.goal;
        options.random_endpoints |= self.random_endpoints;
        options.color = self.color(settings);
        options.show_explored &= !self.no_explored;
        options.step = self.step;
        if let Some(ms) = self.step_delay {
            options.step_delay = Duration::from_millis(ms);
        }

        if self.all {
            options.strategies = Strategy::ALL.to_vec();
        } else if !self.strategies.is_empty() {
            options.strategies = self.strategies.clone();
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mazerun").chain(args.iter().copied())).unwrap()
    }

    fn settings() -> Settings {
        Settings::new()
            .set_height(5)
            .set_width(6)
            .set_strategies(vec![Strategy::Dfs])
            .set_algorithm(GenAlgorithm::RndKruskals)
            .set_step_delay(40)
            .set_log_level(LogLevel::Info)
    }

    #[test]
    fn settings_without_flags() {
        let options = parse(&[]).run_options(&settings());
        assert_eq!(options.height, 5);
        assert_eq!(options.width, 6);
        assert_eq!(options.strategies, vec![Strategy::Dfs]);
        assert_eq!(options.algorithm, GenAlgorithm::RndKruskals);
        assert_eq!(options.step_delay, Duration::from_millis(40));
        assert!(options.color);
        assert!(options.show_explored);
        assert!(!options.random_endpoints);
        assert!(!options.step);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn flags_override_settings() {
        let args = parse(&[
            "--height",
            "9",
            "--width",
            "3",
            "-s",
            "17",
            "--algorithm",
            "dfs",
            "-S",
            "astar",
            "-S",
            "bfs",
            "--start",
            "1,2",
            "--goal",
            "0,0",
            "--no-color",
            "--no-explored",
            "--random-endpoints",
            "--step",
            "--step-delay",
            "0",
        ]);
        let options = args.run_options(&settings());

        assert_eq!((options.height, options.width), (9, 3));
        assert_eq!(options.seed, Some(17));
        assert_eq!(options.algorithm, GenAlgorithm::DepthFirstSearch);
        assert_eq!(options.strategies, vec![Strategy::AStar, Strategy::Bfs]);
        assert_eq!(options.start, Some(Cell(1, 2)));
        assert_eq!(options.goal, Some(Cell(0, 0)));
        assert!(!options.color);
        assert!(!options.show_explored);
        assert!(options.random_endpoints);
        assert!(options.step);
        assert_eq!(options.step_delay, Duration::ZERO);
    }

    #[test]
    fn all_wins_over_strategy_list() {
        let options = parse(&["-S", "dfs", "--all"]).run_options(&settings());
        assert_eq!(options.strategies, Strategy::ALL.to_vec());
    }

    #[test]
    fn settings_can_enable_what_flags_cannot_disable() {
        let settings = settings().set_color(false).set_random_endpoints(true);
        let options = parse(&[]).run_options(&settings);
        assert!(!options.color);
        assert!(options.random_endpoints);
    }

    #[test]
    fn verbosity() {
        let settings = settings();
        assert_eq!(parse(&[]).log_level(&settings), LogLevel::Info);
        assert_eq!(parse(&["-v"]).log_level(&settings), LogLevel::Debug);
        assert_eq!(parse(&["-vvv"]).log_level(&settings), LogLevel::Trace);
        assert_eq!(parse(&["-q", "-vv"]).log_level(&settings), LogLevel::Error);
    }

    #[test]
    fn rejects_bad_values() {
        let parse_err = |args: &[&str]| {
            Args::try_parse_from(std::iter::once("mazerun").chain(args.iter().copied())).is_err()
        };
        assert!(parse_err(&["-S", "dijkstra"]));
        assert!(parse_err(&["--algorithm", "prim"]));
        assert!(parse_err(&["--start", "3"]));
        assert!(parse_err(&["--height", "tall"]));
    }
}
