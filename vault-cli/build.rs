use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the source formats in vault_babel::SourceFormat
// Build scripts can't depend on the crate being built
const SOURCE_FORMATS: &[&str] = &["markdown", "html"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let output = || {
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("vault-bridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Move Obsidian callouts between Markdown and journal HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("import").arg(input()).arg(output()))
        .subcommand(Command::new("export").arg(input()).arg(output()))
        .subcommand(
            Command::new("callouts").arg(input()).arg(
                Arg::new("from")
                    .long("from")
                    .value_parser(clap::builder::PossibleValuesParser::new(SOURCE_FORMATS))
                    .value_hint(ValueHint::Other),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "vault-bridge", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "vault-bridge", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "vault-bridge", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
