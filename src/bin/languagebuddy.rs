//! Command-line interface for languagebuddy
//! Parses study notes and vocabulary lexicons and prints them as text, JSON or YAML.
//!
//! Usage:
//!   languagebuddy notes `<path>` [--format `<format>`]     - Parse a note file
//!   languagebuddy lexicon `<path>` [--format `<format>`]   - Load and validate a lexicon
//!   languagebuddy tags                                  - List the known note tags

use clap::{Arg, ArgMatches, Command};
use languagebuddy::lesson::Lesson;
use languagebuddy::lexicon::Lexicon;
use languagebuddy::notes::Tag;
use languagebuddy::render::Render;
use languagebuddy::settings::{Loader, OutputFormat, Settings};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LANGUAGEBUDDY_LOG";

fn main() {
    let matches = Command::new("languagebuddy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns annotated study notes and vocabulary lexicons into structured records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (overrides output.format)")
                .value_parser(OutputFormat::NAMES)
                .global(true),
        )
        .subcommand(
            Command::new("notes").about("Parse a note file").arg(
                Arg::new("path")
                    .help("Path to the note file")
                    .required(true)
                    .index(1),
            ),
        )
        .subcommand(
            Command::new("lexicon")
                .about("Load and validate a YAML lexicon")
                .arg(
                    Arg::new("path")
                        .help("Path to the lexicon file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("tags").about("List the known note tags"))
        .get_matches();

    let settings = load_settings(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&settings.logging.level);

    match matches.subcommand() {
        Some(("notes", notes_matches)) => {
            let path = notes_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_notes_command(&settings, path);
        }
        Some(("lexicon", lexicon_matches)) => {
            let path = lexicon_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_lexicon_command(&settings, path);
        }
        Some(("tags", _)) => handle_tags_command(),
        _ => unreachable!(),
    }
}

fn load_settings(matches: &ArgMatches) -> Result<Settings, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Handle the notes command
fn handle_notes_command(settings: &Settings, path: &str) {
    let lesson = Lesson::from_notes(
        settings.lesson.reference_language,
        settings.lesson.foreign_language,
        path,
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print_rendered(&lesson, settings.output.format);
}

/// Handle the lexicon command
fn handle_lexicon_command(settings: &Settings, path: &str) {
    let lexicon = Lexicon::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print_rendered(&lexicon, settings.output.format);
}

/// Handle the tags command
fn handle_tags_command() {
    println!("Available note tags:\n");
    for tag in Tag::ALL {
        println!("  {:<6} {}", tag.marker(), tag.description());
    }
}

fn print_rendered<T: Render>(value: &T, format: OutputFormat) {
    let output = value.render(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}
