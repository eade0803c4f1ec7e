//! alepo command line frontend.
//!
//! Thin presentation layer over `alepo-core`: it owns argument parsing,
//! the interactive prompt, and the mapping from outcome tags to localized
//! display strings. The core only ever reports language-agnostic tags.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use alepo_core::{translate_phrase, Config, DictionarySet, DictionaryStore, Language, Outcome};

#[derive(Parser)]
#[command(name = "alepo", version, about = "Romanized-script translator")]
struct Cli {
    /// Configuration file (TOML). Defaults are used when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Active language ("fr" or "en"); overrides the configured startup
    /// language.
    #[arg(long, global = true)]
    language: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a phrase and print the per-unit breakdown.
    Translate {
        /// Phrase to translate; multiple arguments are joined with spaces.
        text: Vec<String>,
    },
    /// Interactive prompt; :lang, :units, :lexemes, :quit.
    Interactive,
    /// List the unit dictionary of the active language.
    Units,
    /// List the lexeme dictionary of the active language.
    Lexemes,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow!("failed to load config '{}': {}", path.display(), e))?,
        None => Config::default(),
    };
    let language = cli.language.unwrap_or(config.startup_language);
    let store = DictionaryStore::open(&config, language)
        .context("failed to load the startup dictionaries")?;

    match cli.command {
        Command::Translate { text } => cmd_translate(&store, &text.join(" ")),
        Command::Interactive => run_interactive(&config, &store),
        Command::Units => {
            print_units(&store.snapshot());
            Ok(())
        }
        Command::Lexemes => {
            print_lexemes(&store.snapshot());
            Ok(())
        }
    }
}

// ========== Localized display strings ==========
//
// The `{outcome, language} -> text` table lives here, not in the core, so
// the engine stays language-agnostic and new frontends can render the same
// tags their own way.

fn no_translation_label(language: Language) -> &'static str {
    match language {
        Language::French => "Traduction inexistante",
        Language::English => "No translation available",
    }
}

fn not_found_label(language: Language) -> &'static str {
    match language {
        Language::French => "Lettre inexistante",
        Language::English => "Letter not found",
    }
}

fn blank_input_warning(language: Language) -> &'static str {
    match language {
        Language::French => "Veuillez entrer un mot ou une phrase.",
        Language::English => "Please enter a word or phrase.",
    }
}

fn render_outcome<'a>(outcome: &'a Outcome, language: Language) -> &'a str {
    match outcome {
        Outcome::Translated(text) => text,
        Outcome::NoTranslationAvailable => no_translation_label(language),
        Outcome::UnitNotFound => not_found_label(language),
    }
}

// ========== Commands ==========

fn cmd_translate(store: &DictionaryStore, text: &str) -> Result<()> {
    let set = store.snapshot();
    if text.trim().is_empty() {
        println!("{}", blank_input_warning(set.language()));
        return Ok(());
    }
    print_translation(text, &set);
    Ok(())
}

fn print_translation(text: &str, set: &DictionarySet) {
    let words = translate_phrase(text, set);
    println!(">>> {}", text.trim().to_uppercase());
    println!("-----");
    for word in &words {
        for segment in &word.segments {
            println!(
                "{} - {}",
                segment.unit,
                render_outcome(&segment.outcome, set.language())
            );
        }
        println!("-----");
    }
}

fn print_units(set: &DictionarySet) {
    match set.language() {
        Language::French => println!(">>> Aide : liste des lettres et leurs traductions"),
        Language::English => println!(">>> Help: list of letters and their translations"),
    }
    println!("-----");
    for (unit, translation) in set.units().sorted_entries() {
        let text = if translation.is_empty() {
            no_translation_label(set.language())
        } else {
            translation
        };
        println!("{} - {}", unit, text);
    }
    println!("-----");
}

fn print_lexemes(set: &DictionarySet) {
    match set.language() {
        Language::French => println!(">>> Dictionnaire des mots et phrases"),
        Language::English => println!(">>> Dictionary of words and phrases"),
    }
    println!("-----");
    for (word, entry) in set.lexemes().sorted_entries() {
        println!("{} - {} - {}", word, entry.literal, entry.idiomatic);
    }
    println!("-----");
}

fn run_interactive(config: &Config, store: &DictionaryStore) -> Result<()> {
    println!(
        "alepo interactive translator — active language {}",
        store.language()
    );
    println!("type a phrase, or :lang / :units / :lexemes / :quit");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => println!("{}", blank_input_warning(store.language())),
            ":quit" | ":q" => break,
            ":lang" => match store.switch_language(config) {
                Ok(language) => println!("-> {}", language),
                Err(e) => eprintln!(
                    "language switch failed, keeping {}: {}",
                    store.language(),
                    e
                ),
            },
            ":units" => print_units(&store.snapshot()),
            ":lexemes" => print_lexemes(&store.snapshot()),
            _ => print_translation(input, &store.snapshot()),
        }
    }
    Ok(())
}
