use std::io;

use clap::Parser;
use mazerun::{cli::Args, logging, settings::Settings, AppError};

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = Settings::default_path();

    if args.reset_config {
        return Settings::reset_config(&settings_path);
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path)?);
        return Ok(());
    }

    better_panic::install();

    let fresh = !settings_path.exists();
    let settings = Settings::load(&settings_path)?;

    logging::init(args.log_level(&settings), args.color(&settings))?;
    if fresh {
        log::info!("No settings at {:?}, wrote the defaults", settings_path);
    }

    let options = args.run_options(&settings);
    log::debug!("Running with {:?}", options);

    mazerun::run(&options, &mut io::stdout().lock())
}
