// Command-line interface for summa
//
// This binary renders AI-generated filing summaries and comparison reports into HTML, the same
// way a document view does before injecting them: clean the transport escaping, pick Markdown,
// HTML or plain text, render, strip embedded styles and link bare URLs.
//
// Rendering:
//
// The input format is taken from --from, then from the `[render] from` config key, then from the
// file extension. When none of those decides, the payload itself is inspected ("auto").
// Usage:
//  summa <input> [--from <format>] [--output <file>]         - Render to HTML (default)
//  summa render <input> [--from <format>] [--output <file>]  - Same as above (explicit)
//  summa detect <input> [--json]                            - Print markdown, html or plaintext
//  summa clean <input>                                      - Print the unescaped payload
//  summa inspect <input> [<stage>]                          - Show the pipeline after a stage
//  summa generate-css                                       - Print the baseline CSS
//  summa --list-formats                                     - List formats and stages
//
// An input of "-" reads from stdin.
//
// Extra Parameters:
//
// Options can be passed using --extra-<parameter-name> <value>. Display and document settings
// (strip-styles, linkify, standalone, title, css-path) override the configuration; anything else
// is handed to the input format.
// Example:
//  summa payload.json --extra-field comparison --extra-standalone

use summa_cli::stages;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use summa_config::{Loader, SummaConfig};
use summa_render::{
    clean_summary_content, default_css, detect_content_kind, is_markdown, FormatRegistry,
    RenderOptions,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const STDIN: &str = "-";

const SUBCOMMANDS: &[&str] = &[
    "render",
    "detect",
    "clean",
    "inspect",
    "generate-css",
    "help",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        let Some(key) = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"))
        else {
            cleaned_args.push(arg.clone());
            continue;
        };

        // Anything that does not look like a flag is the value.
        let value = match iter.peek() {
            Some(next) if !next.starts_with('-') => {
                let value = next.to_string();
                iter.next();
                value
            }
            _ => "true".to_string(),
        };
        extra_params.insert(key.to_string(), value);
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("summa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render filing summaries from Markdown, HTML or plain text")
        .long_about(
            "summa renders AI-generated filing summaries and comparison reports into HTML.\n\n\
            Commands:\n  \
            - render:  Render a payload to an HTML fragment or page (default)\n  \
            - detect:  Report whether a payload is Markdown, HTML or plain text\n  \
            - clean:   Remove transport escaping from a payload\n  \
            - inspect: View the pipeline output after any stage\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override settings or pass format options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            summa summary.md                          # Render to stdout\n  \
            summa summary.md -o summary.html          # Render to a file\n  \
            summa payload.json --extra-standalone     # Full HTML page\n  \
            cat summary.txt | summa - --from auto     # Detect the format from content",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Render a summary payload to HTML.\n\n\
                    Input formats:\n  \
                    - markdown: Markdown summary (.md, .markdown)\n  \
                    - html:     Pre-rendered HTML (.html, .htm)\n  \
                    - text:     Plain text (.txt, .text)\n  \
                    - json:     JSON payload with a summary member (.json)\n  \
                    - auto:     Decide from the content\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    summa render summary.md                      # Fragment to stdout\n  \
                    summa render notes.txt --from auto           # Ignore the extension\n  \
                    summa render payload.json --extra-field report",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format (detected if not specified)")
                        .long_help(
                            "Input format to render from.\n\n\
                            If not specified, the configured format is used, then the file\n\
                            extension, then the content itself. Pass 'auto' to skip straight\n\
                            to content detection.",
                        )
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
                .long_about(
                    "View the Markdown pipeline output right after any of its passes.\n\n\
                    Stages run in this order: clean, unescape, headers, bold, italic, links,\n\
                    images, fenced-code, inline-code, tables, rules, unordered-lists,\n\
                    ordered-lists, blockquotes, paragraphs (default).\n\n\
                    Extra Parameters:\n  \
                    --extra-stages-json   Print every pass output as JSON\n\n\
                    Examples:\n  \
                    summa inspect summary.md tables\n  \
                    summa inspect summary.md --extra-stages-json",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("stage")
                        .help("Stage to stop after. Defaults to 'paragraphs'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            stages::AVAILABLE_STAGES,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for standalone pages")
                .long_about(
                    "Outputs the baseline CSS embedded in standalone pages.\n\n\
                    Save it, edit it, and pass it back with --extra-css-path to append\n\
                    your rules after the baseline.\n\n\
                    Examples:\n  \
                    summa generate-css > custom.css",
                ),
        )
}

/// Index of the first argument after any leading global options.
fn first_command_position(args: &[String]) -> usize {
    let mut idx = 1;
    while let Some(arg) = args.get(idx) {
        match arg.as_str() {
            "-v" | "--verbose" | "--list-formats" => idx += 1,
            "--config" => idx += 2,
            other if other.starts_with("--config=") => idx += 1,
            _ => break,
        }
    }
    idx
}

/// Parse the command line, injecting `render` when the first argument after the global
/// options is an input.
fn parse_with_default_command(args: &[String]) -> ArgMatches {
    let cli = build_cli();
    match cli.clone().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            let position = first_command_position(args);
            let looks_like_input = args.get(position).is_some_and(|first| {
                first == STDIN
                    || (!first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_str()))
            });
            if !looks_like_input {
                err.exit();
            }

            let mut injected = args[..position].to_vec();
            injected.push("render".to_string());
            injected.extend_from_slice(&args[position..]);
            cli.try_get_matches_from(&injected)
                .unwrap_or_else(|e| e.exit())
        }
    }
}

fn init_tracing(verbose: bool) {
    // --verbose forces debug, otherwise use RUST_LOG or default to warn
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = parse_with_default_command(&cleaned_args);

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = required_input(sub_matches);
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, from, output, &extra_params, &config);
        }
        Some(("detect", sub_matches)) => {
            handle_detect_command(required_input(sub_matches), sub_matches.get_flag("json"));
        }
        Some(("clean", sub_matches)) => {
            handle_clean_command(required_input(sub_matches));
        }
        Some(("inspect", sub_matches)) => {
            let stage = sub_matches
                .get_one::<String>("stage")
                .map(|s| s.as_str())
                .unwrap_or(stages::DEFAULT_STAGE);
            handle_inspect_command(required_input(sub_matches), stage, &extra_params);
        }
        Some(("generate-css", _)) => {
            print!("{}", default_css());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required_input(matches: &ArgMatches) -> &str {
    match matches.get_one::<String>("input") {
        Some(input) => input.as_str(),
        None => {
            eprintln!("Error: an input path is required");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    from_arg: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &SummaConfig,
) {
    let registry = FormatRegistry::default();
    let from = resolve_input_format(&registry, input, from_arg, config);

    // Validate the format before reading anything
    if let Some(name) = &from {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_input(input);
    let options = RenderOptions {
        display: (&config.display).into(),
        document: config.document.options(),
        extra: extra_params.clone(),
    };

    let result = match from.as_deref() {
        Some(name) => registry.render_with_options(&source, name, &options),
        None => registry.render_auto(&source, &options),
    };
    let html = result.unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => fs::write(path, html).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{html}"),
    }
}

/// Picks the input format, or `None` to detect it from the content.
fn resolve_input_format(
    registry: &FormatRegistry,
    input: &str,
    from_arg: Option<&str>,
    config: &SummaConfig,
) -> Option<String> {
    if let Some(from) = from_arg {
        return (from != "auto").then(|| from.to_string());
    }
    if let Some(name) = config.render.forced_format() {
        return Some(name.to_string());
    }
    if input == STDIN {
        return None;
    }

    let detected = registry.detect_format_from_filename(input);
    debug!(input, format = ?detected, "format from filename");
    detected
}

/// Handle the detect command
fn handle_detect_command(input: &str, json: bool) {
    let cleaned = clean_summary_content(&read_input(input));
    let kind = detect_content_kind(&cleaned);

    if json {
        let report = serde_json::json!({
            "kind": kind,
            "is_markdown": is_markdown(&cleaned),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("JSON serialization failed: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{kind}");
    }
}

/// Handle the clean command
fn handle_clean_command(input: &str) {
    println!("{}", clean_summary_content(&read_input(input)));
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, stage: &str, extra_params: &HashMap<String, String>) {
    let source = read_input(input);

    let output = stages::execute_stage(&source, stage, extra_params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    println!("{output}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Input formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {name:<10} {} (.{})",
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
    println!("  {:<10} Decide from the content", "auto");

    println!("\nPipeline stages (summa inspect):");
    for stage in stages::AVAILABLE_STAGES {
        println!("  {stage}");
    }
}

fn read_input(input: &str) -> String {
    let result = if input == STDIN {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(input)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> SummaConfig {
    let loader = Loader::new().with_optional_file("summa.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut SummaConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["strip-styles"]) {
        config.display.strip_styles = parse_bool_arg("strip-styles", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["linkify", "linkify-urls"]) {
        config.display.linkify_urls = parse_bool_arg("linkify", &raw);
    }

    if let Some(raw) = extra_params.remove("standalone") {
        config.document.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(title) = extra_params.remove("title") {
        config.document.title = title;
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        let css = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading CSS file '{path}': {e}");
            std::process::exit(1);
        });
        config.document.custom_css = Some(css);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
