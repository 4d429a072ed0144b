//! `--extra-<key> [value]` handling
//!
//! Extra parameters are stripped from the argument list before clap sees
//! them, then mapped onto `markdown.*` configuration keys. A flag without a
//! value counts as `true`.

use std::collections::BTreeMap;
use vault_config::Loader;

/// Settings under `[markdown]` that take a boolean value.
pub const BOOLEAN_KEYS: &[&str] = &[
    "table",
    "strikethrough",
    "autolink",
    "tasklist",
    "superscript",
    "unsafe_html",
];

/// Settings under `[markdown]` that take a string value.
pub const TEXT_KEYS: &[&str] = &["front_matter_delimiter"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>=<value>` (inline value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
///
/// Text settings always take the next argument, so `--extra-front-matter-delimiter ---` works.
pub fn parse_extra_args(args: &[String]) -> (Vec<String>, BTreeMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = BTreeMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            if let Some((key, value)) = key.split_once('=') {
                extra_params.insert(key.to_string(), value.to_string());
                i += 1;
                continue;
            }

            // A following value must not look like another flag, unless the key takes text
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| is_text_key(key) || !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn is_text_key(key: &str) -> bool {
    TEXT_KEYS.contains(&key.replace('-', "_").as_str())
}

/// Layer extra parameters onto `loader` as `markdown.*` overrides.
///
/// Keys accept either dashes or underscores (`unsafe-html`, `unsafe_html`).
pub fn apply_overrides(
    mut loader: Loader,
    extra_params: &BTreeMap<String, String>,
) -> Result<Loader, String> {
    for (raw_key, raw_value) in extra_params {
        let key = raw_key.replace('-', "_");
        let path = format!("markdown.{key}");

        let layered = if BOOLEAN_KEYS.contains(&key.as_str()) {
            let value = parse_bool_arg(raw_key, raw_value)?;
            loader.set_override(&path, value)
        } else if TEXT_KEYS.contains(&key.as_str()) {
            loader.set_override(&path, raw_value.as_str())
        } else {
            return Err(format!("Unknown parameter --extra-{raw_key}"));
        };
        loader = layered.map_err(|err| format!("Invalid value for --extra-{raw_key}: {err}"))?;
    }
    Ok(loader)
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool, String> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}
