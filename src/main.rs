// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use practice_generator::session::{calendar_date, MAX_DAY, MIN_DAY};
use practice_generator::{
    today, FileStore, Lcg, LilypondRenderer, OutputFormat, PracticeConfig, PracticeGenerator,
    Progress, Session, TextRenderer,
};
use tracing::{info, Level};

fn print_usage() {
    println!("practice - Daily music practice generator");
    println!();
    println!("Usage: practice [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --day <N>          Use day index N instead of today");
    println!("  --seed <TEXT>      Seed the generator from TEXT instead of the day");
    println!("  --reroll <N>       Skip ahead to the Nth re-rolled session (default 0)");
    println!("  --lilypond         Write sheets as LilyPond instead of text");
    println!("  --config <PATH>    Load settings from a YAML file");
    println!("  --done <SLOT>      Mark exercise SLOT of the day as done");
    println!("  --undo <SLOT>      Mark exercise SLOT of the day as not done");
    println!("  --status           Show completion for the session's exercises");
    println!("  --verbose          Log every draw to stderr");
    println!("  --help             Show this help message");
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Show,
    Mark { slot: u32, done: bool },
    Status,
}

#[derive(Debug)]
struct Options {
    day: Option<i64>,
    seed: Option<String>,
    reroll: u32,
    lilypond: bool,
    config: Option<PathBuf>,
    action: Action,
    verbose: bool,
    help: bool,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        day: None,
        seed: None,
        reroll: 0,
        lilypond: false,
        config: None,
        action: Action::Show,
        verbose: false,
        help: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--day" => {
                let text = value(args, i, flag)?;
                let day: i64 = text
                    .parse()
                    .map_err(|_| anyhow!("Invalid day index: {}", text))?;
                if !(MIN_DAY..=MAX_DAY).contains(&day) {
                    bail!("Day index {} outside {}..={}", day, MIN_DAY, MAX_DAY);
                }
                options.day = Some(day);
                i += 1;
            }
            "--seed" => {
                options.seed = Some(value(args, i, flag)?.to_string());
                i += 1;
            }
            "--reroll" => {
                let text = value(args, i, flag)?;
                options.reroll = text
                    .parse()
                    .map_err(|_| anyhow!("Invalid reroll count: {}", text))?;
                i += 1;
            }
            "--config" => {
                options.config = Some(PathBuf::from(value(args, i, flag)?));
                i += 1;
            }
            "--done" | "--undo" => {
                let text = value(args, i, flag)?;
                let slot = text
                    .parse()
                    .map_err(|_| anyhow!("Invalid slot number: {}", text))?;
                options.action = Action::Mark {
                    slot,
                    done: flag == "--done",
                };
                i += 1;
            }
            "--status" => options.action = Action::Status,
            "--lilypond" => options.lilypond = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            _ => bail!("Unknown option: {}", flag),
        }
        i += 1;
    }

    if options.day.is_some() && options.seed.is_some() {
        bail!("--day and --seed cannot be combined");
    }
    // Progress is keyed by day; a seeded session is not that day's session
    if options.seed.is_some() && options.action != Action::Show {
        bail!("--seed sessions are not tracked; drop --done, --undo and --status");
    }
    Ok(options)
}

fn init_logging(config: &PracticeConfig, verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { config.level()? };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Generate the day's session, then `reroll` more from the same stream
fn build_session(options: &Options) -> Result<Session> {
    let day = options.day.unwrap_or_else(today);
    let mut generator = match &options.seed {
        Some(seed) => PracticeGenerator::with_rng(day, Lcg::from_text(seed)),
        None => PracticeGenerator::for_day(day),
    };

    let mut session = generator.generate()?;
    for _ in 0..options.reroll {
        session = generator.generate()?;
    }
    Ok(session)
}

fn show_session(
    session: &Session,
    config: &PracticeConfig,
    progress: Option<&Progress<FileStore>>,
    format: OutputFormat,
) -> Result<()> {
    let mut out = io::stdout().lock();
    let (year, month, day) = calendar_date(session.day);

    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "Practice for {:04}-{:02}-{:02} (day {})\n",
                year, month, day, session.day
            )?;
            let mut renderer = TextRenderer::new(&mut out);
            session.render_sheets(&mut renderer)?;
            if config.show_excerpt {
                if let Some((exercise, excerpt)) = session.excerpt() {
                    writeln!(
                        out,
                        "== {} ==\n{}\n{}\n",
                        exercise.title, excerpt.title, excerpt.url
                    )?;
                }
            }
            if let Some(progress) = progress {
                for exercise in &session.exercises {
                    let mark = if progress.is_done(session.day, exercise.slot) {
                        "x"
                    } else {
                        " "
                    };
                    writeln!(out, "[{}] {}: {}", mark, exercise.slot, exercise.title)?;
                }
            }
        }
        OutputFormat::Lilypond => {
            let mut renderer = LilypondRenderer::new(&mut out);
            session.render_sheets(&mut renderer)?;
            if config.show_excerpt {
                if let Some((_, excerpt)) = session.excerpt() {
                    writeln!(out, "% Excerpt: {} <{}>", excerpt.title, excerpt.url)?;
                }
            }
        }
    }
    Ok(())
}

fn show_status(session: &Session, progress: &Progress<FileStore>) {
    let done = session
        .exercises
        .iter()
        .filter(|e| progress.is_done(session.day, e.slot))
        .count();
    println!("Day {}: {}/{} done", session.day, done, session.exercises.len());
    for exercise in &session.exercises {
        let state = if progress.is_done(session.day, exercise.slot) {
            "done"
        } else {
            "open"
        };
        println!("  slot {} {:<22} {}", exercise.slot, exercise.title, state);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => PracticeConfig::load(path)?,
        None => PracticeConfig::default(),
    };
    init_logging(&config, options.verbose)?;

    let session = build_session(&options)?;
    let mut progress = Progress::load(FileStore::new(&config.progress_file))
        .with_context(|| format!("Failed to load progress from {:?}", config.progress_file))?;

    match options.action {
        Action::Show => {
            let format = if options.lilypond {
                OutputFormat::Lilypond
            } else {
                config.format
            };
            let tracked = options.seed.is_none().then_some(&progress);
            show_session(&session, &config, tracked, format)?;
        }
        Action::Mark { slot, done } => {
            progress.mark_done(session.day, slot, done)?;
            info!(day = session.day, slot, done, "progress saved");
            let state = if done { "done" } else { "not done" };
            println!("Day {} slot {} marked {}", session.day, slot, state);
        }
        Action::Status => show_status(&session, &progress),
    }

    Ok(())
}
