// Command-line interface for vault-bridge
//
// Moves Obsidian callouts between Markdown notes and journal HTML. The actual
// work lives in vault-babel; this binary reads files, loads configuration and
// picks the pipeline.
//
// Usage:
//  vault-bridge import <input.md> [-o <out.html>]      - Markdown note to journal HTML
//  vault-bridge export <input.html> [-o <out.md>]      - Journal HTML to Markdown note
//  vault-bridge callouts <input> [--from <format>]     - Dump extracted callouts as JSON
//
// Extra Parameters:
//
// Markdown dialect settings can be overridden per run with --extra-<key> [value].
// Example:
//  vault-bridge import note.md --extra-tasklist false --extra-front-matter-delimiter ---

mod extras;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vault_babel::formats::{html, markdown};
use vault_babel::transforms::{export_html, import_markdown};
use vault_babel::{ComrakProse, ProseOptions, SourceFormat};
use vault_config::{Loader, VaultConfig};

fn build_cli() -> Command {
    Command::new("vault-bridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Move Obsidian callouts between Markdown and journal HTML")
        .long_about(
            "vault-bridge converts Markdown notes with Obsidian callouts into journal HTML\n\
            and back again, keeping callout type, title and fold state intact.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override [markdown] settings for one run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            vault-bridge import note.md                   # Journal HTML on stdout\n  \
            vault-bridge export entry.html -o note.md     # Markdown to a file\n  \
            vault-bridge callouts note.md                 # Inspect extracted callouts",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a vault-bridge.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("import")
                .about("Convert a Markdown note into journal HTML")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Convert journal HTML into a Markdown note")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("callouts")
                .about("Print the callouts found in a document as JSON")
                .long_about(
                    "Extracts callouts and prints the placeholder document together with\n\
                    the callout list as pretty JSON.\n\n\
                    The source format is auto-detected from the file extension\n\
                    (.md, .markdown, .html, .htm). Use --from to override.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            SourceFormat::ALL.iter().map(|format| format.name()),
                        ))
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = extras::parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &extra_params,
    )
    .unwrap_or_else(|err| fail(err));
    init_logging(matches.get_flag("verbose"), &config.logging.filter);

    let prose = ComrakProse::new(ProseOptions::from(&config.markdown));
    debug!(options = ?prose.options(), "prose converter ready");

    let result = match matches.subcommand() {
        Some(("import", sub_matches)) => handle_import_command(sub_matches, &prose),
        Some(("export", sub_matches)) => handle_export_command(sub_matches, &prose),
        Some(("callouts", sub_matches)) => handle_callouts_command(sub_matches, &prose),
        _ => Err("Unknown subcommand. Use --help for usage information.".to_string()),
    };

    if let Err(err) = result {
        fail(err);
    }
}

fn fail(message: String) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// `--verbose` wins over `RUST_LOG`, which wins over `logging.filter`.
fn init_logging(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &std::collections::BTreeMap<String, String>,
) -> Result<VaultConfig, String> {
    let loader = Loader::new().with_local_file(".");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = extras::apply_overrides(loader, extra_params)?;
    loader
        .build()
        .map_err(|err| format!("Failed to load configuration: {err}"))
}

/// Handle the import command
fn handle_import_command(matches: &ArgMatches, prose: &ComrakProse) -> Result<(), String> {
    let input = required(matches, "input")?;
    let source = read_input(input)?;
    let html = import_markdown(&source, prose);
    write_output(matches.get_one::<String>("output"), &html)
}

/// Handle the export command
fn handle_export_command(matches: &ArgMatches, prose: &ComrakProse) -> Result<(), String> {
    let input = required(matches, "input")?;
    let source = read_input(input)?;
    let markdown = export_html(&source, prose);
    write_output(matches.get_one::<String>("output"), &markdown)
}

/// Handle the callouts command
fn handle_callouts_command(matches: &ArgMatches, prose: &ComrakProse) -> Result<(), String> {
    let input = required(matches, "input")?;

    // Auto-detect --from if not provided
    let format = match matches.get_one::<String>("from") {
        Some(name) => SourceFormat::from_name(name)
            .ok_or_else(|| format!("Format '{name}' not found"))?,
        None => SourceFormat::detect_from_filename(input).ok_or_else(|| {
            format!("Could not detect format from filename '{input}'. Please specify --from explicitly")
        })?,
    };
    debug!(format = format.name(), "extracting callouts");

    let source = read_input(input)?;
    let json = match format {
        SourceFormat::Markdown => serde_json::to_string_pretty(&markdown::extract_callouts(&source)),
        SourceFormat::Html => serde_json::to_string_pretty(&html::extract_callouts(&source, prose)),
    }
    .map_err(|err| format!("Serialization error: {err}"))?;

    println!("{json}");
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing required argument '{id}'"))
}

fn read_input(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("Cannot read file '{path}': {err}"))
}

fn write_output(output: Option<&String>, text: &str) -> Result<(), String> {
    match output {
        Some(path) => {
            fs::write(path, text).map_err(|err| format!("Cannot write file '{path}': {err}"))?;
            info!(path = %path, bytes = text.len(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}
