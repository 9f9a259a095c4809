// Shared between main.rs and build.rs (shell completions); clap only.

use clap::{value_parser, Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("keysym-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a keysym to Unicode code point lookup table from a key-symbol header")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./keysym-gen.toml")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Key-symbol header to scan (default: /usr/include/X11/keysymdef.h)")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Generated header to write")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("project-root")
                .long("project-root")
                .help("Path prefix removed from the output path before deriving the header guard")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("strip-components")
                .long("strip-components")
                .help("Leading output path components left out of the header guard")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Macro name prefix of recognized definitions (default: XK_)"),
        )
        .arg(
            Arg::new("naming")
                .long("naming")
                .help("Identifier preset for the emitted struct and table")
                .value_parser(["ucs", "code-point"]),
        )
        .arg(
            Arg::new("formatter")
                .long("formatter")
                .help("Source formatter run on the generated file (default: clang-format)"),
        )
        .arg(
            Arg::new("no-format")
                .long("no-format")
                .help("Write the generated file without running the formatter")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the unformatted document instead of writing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug and trace output)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}
