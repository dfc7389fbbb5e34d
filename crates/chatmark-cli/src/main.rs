mod args;
mod preview;

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process,
};

use anyhow::{Context, Result};
use args::{Args, OutputMode};
use chatmark_config::Config;
use chatmark_engine::{
    Clock, FixedClock, HtmlRenderer, SystemClock, blocks_from_text, parse_thread,
};
use clap::Parser;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load()
        .with_context(|| format!("Failed to load {}", Config::config_path().display()))?
        .unwrap_or_default();

    if args.save_config {
        let config = with_input_path(config, args.file.as_deref());
        config.save().context("Failed to save config")?;
        log::info!("Wrote {}", Config::config_path().display());
        return Ok(());
    }

    let input = match args.file.as_deref().or(config.input_path.as_deref()) {
        Some(path) => read_file(path)?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            input
        }
    };

    let clock: Box<dyn Clock> = match args.at {
        Some(time) => Box::new(FixedClock(time)),
        None => Box::new(SystemClock),
    };
    let thread = parse_thread(&blocks_from_text(&input), &config.parse_options(), clock.as_ref());
    for diagnostic in &thread.diagnostics {
        log::warn!("{diagnostic}");
    }
    log::info!("Parsed {} nodes", thread.len());

    let render_options = config.render_options();
    match args.mode() {
        OutputMode::Html => {
            println!("{}", HtmlRenderer::with_options(render_options).serialize_thread(&thread));
        }
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&thread)?),
        OutputMode::Preview => preview::run(&thread, &render_options)?,
    }
    Ok(())
}

/// Config to save: the loaded settings, with `file` as the input path when
/// one is given.
fn with_input_path(mut config: Config, file: Option<&Path>) -> Config {
    if let Some(file) = file {
        config.input_path = Some(file.to_path_buf());
    }
    config
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_engine::DuplicateIdPolicy;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn saved_config_takes_file_as_input_path() {
        let mut config = Config::default();
        config.parse.duplicate_ids = DuplicateIdPolicy::FirstWins;

        let saved = with_input_path(config.clone(), Some(Path::new("chat.txt")));
        assert_eq!(saved.input_path, Some(PathBuf::from("chat.txt")));
        assert_eq!(saved.parse, config.parse);
    }

    #[test]
    fn saved_config_keeps_input_path_without_file() {
        let config = Config {
            input_path: Some(PathBuf::from("/tmp/old.chat")),
            ..Config::default()
        };
        assert_eq!(with_input_path(config.clone(), None), config);
    }
}
