mod command;
mod config;
mod error;
mod paths;
mod render;
mod shell;

use std::fs::{self, File};
use std::io;

use simplelog::WriteLogger;
use userform_lib::Form;

use crate::config::CliConfig;
use crate::error::CliError;

fn load_config() -> CliConfig {
    let Some(path) = paths::config_file() else {
        return CliConfig::default();
    };
    CliConfig::load_or_default(&path)
}

fn init_logging(config: &CliConfig) -> Result<(), CliError> {
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&log_path)?;
    let level = config.level_filter()?;
    WriteLogger::init(level, simplelog::Config::default(), log_file)?;
    log::info!("Logging to {}", log_path.display());
    Ok(())
}

fn run() -> Result<(), CliError> {
    let config = load_config();
    init_logging(&config)?;

    let mut form = Form::new().with_config(config.form_config());
    let stdin = io::stdin();
    shell::run(&mut form, stdin.lock(), &mut io::stdout(), &mut io::stderr())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
