//! Command-line interface for the keysym table generator
//!
//! Scans a key-symbol header (by default `/usr/include/X11/keysymdef.h`) and
//! writes a C++ header holding a keysym → code point array.
//!
//! Usage:
//!   keysym-gen                                   - Generate with ./keysym-gen.toml or defaults
//!   keysym-gen --input <h> --output <hpp>        - Override paths
//!   keysym-gen --naming ucs --no-format          - Pick identifiers, skip clang-format
//!   keysym-gen --stdout                          - Print the raw document
//!
//! Configuration is layered: built-in defaults, then `keysym-gen.toml` in the
//! working directory if present, then `--config <file>`, then flags.

mod cli;

use anyhow::{Context, Result};
use clap::ArgMatches;
use keysym_config::{GeneratorConfig, Loader};
use keysym_emit::{publish, render, Formatter};
use keysym_parser::{Classifier, ParsedTable};
use log::{info, warn, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

const LOCAL_CONFIG: &str = "keysym-gen.toml";

/// How many duplicate key codes to name in the warning before summarizing.
const DUPLICATES_SHOWN: usize = 5;

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    init_logging(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        LevelFilter::Error
    } else {
        match matches.get_count("verbose") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches).context("failed to load configuration")?;

    let classifier = Classifier::with_prefix(&config.input.macro_prefix)?;
    let table = ParsedTable::load(&config.input.path, &classifier)?;
    report_table(&table, &config);

    let guard = config.guard.rule().derive(&config.output.path)?;
    let document = render(
        &table,
        &config.naming.resolve(),
        &guard,
        &config.document.layout(),
    );

    if matches.get_flag("stdout") {
        print!("{document}");
        return Ok(());
    }

    let formatter = if config.formatter.enabled {
        match Formatter::locate(&config.formatter.program, config.formatter.args.clone()) {
            Ok(formatter) => Some(formatter),
            Err(err) => {
                warn!("{err}; writing unformatted output");
                None
            }
        }
    } else {
        None
    };

    publish(&document, &config.output.path, formatter.as_ref())?;
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<GeneratorConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }

    let path_overrides = [
        ("input", "input.path"),
        ("output", "output.path"),
        ("project-root", "guard.project_root"),
    ];
    for (arg, key) in path_overrides {
        if let Some(path) = matches.get_one::<PathBuf>(arg) {
            loader = loader.set_override(key, path.to_string_lossy().into_owned())?;
        }
    }

    let string_overrides = [
        ("prefix", "input.macro_prefix"),
        ("naming", "naming.preset"),
        ("formatter", "formatter.program"),
    ];
    for (arg, key) in string_overrides {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }

    if let Some(strip) = matches.get_one::<u32>("strip-components") {
        loader = loader.set_override("guard.strip_components", i64::from(*strip))?;
    }
    if matches.get_flag("no-format") {
        loader = loader.set_override("formatter.enabled", false)?;
    }

    Ok(loader.build()?)
}

/// Warn about headers that produce a table consumers will struggle with.
fn report_table(table: &ParsedTable, config: &GeneratorConfig) {
    let stats = table.stats();
    info!(
        "{}: {} definitions in {} lines ({} spaced, {} parenthesized)",
        config.input.path.display(),
        stats.matched(),
        stats.lines,
        stats.spaced,
        stats.parenthesized
    );

    if table.is_empty() {
        warn!(
            "no `{}` definitions with a Unicode annotation found in {}; the generated table is empty",
            config.input.macro_prefix,
            config.input.path.display()
        );
        return;
    }

    let duplicates = table.duplicate_codes();
    if !duplicates.is_empty() {
        let shown: Vec<&str> = duplicates.iter().take(DUPLICATES_SHOWN).copied().collect();
        let more = duplicates.len().saturating_sub(DUPLICATES_SHOWN);
        let suffix = if more > 0 {
            format!(" and {more} more")
        } else {
            String::new()
        };
        warn!(
            "{} key codes appear more than once: {}{suffix}",
            duplicates.len(),
            shown.join(", ")
        );
    }

    if !table.is_sorted_by_code() {
        warn!("key codes are not in ascending order; lookups that binary-search the table will miss entries");
    }
}
