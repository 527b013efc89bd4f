use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the stages from src/stages.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_STAGES: &[&str] = &[
    "clean",
    "unescape",
    "headers",
    "bold",
    "italic",
    "links",
    "images",
    "fenced-code",
    "inline-code",
    "tables",
    "rules",
    "unordered-lists",
    "ordered-lists",
    "blockquotes",
    "paragraphs",
];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("summa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render filing summaries from Markdown, HTML or plain text")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List input formats and pipeline stages")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a summa.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log rendering decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a summary to HTML (default command)")
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format, or 'auto'")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Print the detected content kind")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the result as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("clean")
                .about("Print the summary with transport escaping removed")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the pipeline output after a given stage")
                .arg(input_arg())
                .arg(
                    Arg::new("stage")
                        .help("Stage to stop after")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_STAGES,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("generate-css").about("Output the baseline CSS"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "summa", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "summa", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "summa", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
