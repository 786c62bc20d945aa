mod commands;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, RelinkArgs, SearchArgs};
use dotenv::dotenv;
use relinker::{config, hasher, scanner, FileRef, MissingFile, RelinkConfig, Relinker, Score};
use tracing::{error, info};

/// Exit status when the search ran but nothing matched.
const NO_MATCH: u8 = 1;
const FAILURE: u8 = 2;

fn main() -> ExitCode {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            return ExitCode::from(FAILURE);
        }
    };

    let args = Cli::parse();

    let result = match args.command {
        Some(Commands::Relink(args)) => run_relink(&config, &args),
        Some(Commands::Rank(args)) => run_rank(&config, &args),
        Some(Commands::Compare { a, b }) => run_compare(&a, &b),
        Some(Commands::Hash { file }) => run_hash(&file),
        Some(Commands::PrintConfig) => print_config(&config),
        None => print_help(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!("Error: {:#}", err);
            ExitCode::from(FAILURE)
        }
    }
}

fn print_help() -> Result<ExitCode> {
    Cli::command()
        .print_long_help()
        .context("Unable to print help")?;
    Ok(ExitCode::SUCCESS)
}

/// An empty path names no file, so there is nothing to find for it.
fn resolve_missing(relinker: &Relinker, path: &Path) -> Result<Option<FileRef>> {
    if path.as_os_str().is_empty() {
        return Ok(None);
    }
    Ok(Some(relinker.file_ref(path)?))
}

fn build_relinker(config: &RelinkConfig, threshold: Option<f64>) -> Result<Relinker> {
    let relinker = Relinker::from_config(config)?;
    Ok(match threshold {
        Some(threshold) => relinker.with_threshold(threshold)?,
        None => relinker,
    })
}

/// Every file under the search roots except the missing path itself.
fn load_candidates(
    relinker: &Relinker,
    config: &RelinkConfig,
    args: &SearchArgs,
    missing: &FileRef,
) -> Result<Vec<FileRef>> {
    let mut roots: Vec<PathBuf> = Vec::with_capacity(args.roots.len());
    for root in &args.roots {
        roots.push(relinker.file_ref(root)?.absolute().to_path_buf());
    }

    let paths = scanner::collect_candidates(
        &roots,
        &config.ignore_patterns,
        Some(missing.absolute()),
        config.follow_links,
    );
    info!(
        "{} candidates under {} root(s)",
        format!("{}", paths.len()).cyan(),
        roots.len()
    );

    Ok(relinker.file_refs(&paths))
}

fn run_relink(config: &RelinkConfig, args: &RelinkArgs) -> Result<ExitCode> {
    let relinker = build_relinker(config, args.search.threshold)?;
    let Some(file) = resolve_missing(&relinker, &args.search.missing)? else {
        info!("{} for an empty path", "No match".red());
        return Ok(ExitCode::from(NO_MATCH));
    };

    let recorded_hash = if args.hash_missing {
        let digest = hasher::hash_file(file.absolute())
            .with_context(|| format!("Unable to hash '{}'", file.path().display()))?;
        Some(digest)
    } else {
        args.hash.clone()
    };

    let mut missing = MissingFile::new(file);
    if let Some(hash) = recorded_hash {
        missing = missing.with_hash(hash);
    }

    let candidates = load_candidates(&relinker, config, &args.search, missing.file())?;

    match relinker.relink(&missing, &candidates) {
        Some(found) => {
            info!(
                "Matched by {} ({})",
                format!("{}", found.kind).green(),
                found.score
            );
            println!("{}", found.file.path().display());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            info!(
                "{} for '{}'",
                "No match".red(),
                missing.file().path().display()
            );
            Ok(ExitCode::from(NO_MATCH))
        }
    }
}

fn run_rank(config: &RelinkConfig, args: &SearchArgs) -> Result<ExitCode> {
    let relinker = build_relinker(config, args.threshold)?;
    let Some(file) = resolve_missing(&relinker, &args.missing)? else {
        info!("{} for an empty path", "No candidates".red());
        return Ok(ExitCode::from(NO_MATCH));
    };
    let missing = MissingFile::new(file);
    let candidates = load_candidates(&relinker, config, args, missing.file())?;

    let ranked = relinker.rank(&missing, &candidates);
    if ranked.is_empty() {
        info!(
            "{} at or above {:.2}",
            "No candidates".red(),
            relinker.threshold()
        );
        return Ok(ExitCode::from(NO_MATCH));
    }

    for candidate in ranked {
        if let Score::Similarity(index) = candidate.score {
            println!("{:.3}  {}", index, candidate.file.path().display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_compare(a: &Path, b: &Path) -> Result<ExitCode> {
    let relinker = Relinker::new();
    let a = relinker.file_ref(a)?;
    let b = relinker.file_ref(b)?;
    let breakdown = relinker.scorer().breakdown(&a, &b);

    println!(
        "Path distance between '{}' and '{}' = {}",
        a.path().display(),
        b.path().display(),
        breakdown.path_distance
    );
    println!(
        "Name similarity between '{}' and '{}' = {:.4}",
        a.stem(),
        b.stem(),
        breakdown.name_similarity
    );
    println!(
        "Type similarity between '{}' and '{}' = {} ({})",
        a.name(),
        b.name(),
        breakdown.type_match.score(),
        breakdown.type_match
    );
    println!(
        "Diff index = {}",
        format!("{:.4}", breakdown.index).green()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_hash(file: &Path) -> Result<ExitCode> {
    let digest = hasher::hash_file(file)
        .with_context(|| format!("Unable to hash '{}'", file.display()))?;
    println!("{}", digest);
    Ok(ExitCode::SUCCESS)
}

fn print_config(config: &RelinkConfig) -> Result<ExitCode> {
    let rendered = toml::to_string_pretty(config).context("Unable to render configuration")?;
    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}
