//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Target style name (positional).
pub fn style_arg() -> Arg {
    Arg::new("style")
        .value_name("STYLE")
        .required(true)
        .help("Target style (run 'recase styles' for the list)")
}

/// Input texts (positional, repeatable). Stdin lines when absent or `-`.
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .num_args(0..)
        .help("Input text; reads lines from stdin when omitted or '-'")
}

/// Separator override (--fill).
pub fn fill_arg() -> Arg {
    Arg::new("fill")
        .long("fill")
        .value_name("TEXT")
        .help("Join words with TEXT instead of the style's separator (lower, upper, capital)")
}

/// Keep inner apostrophes (--keep-apostrophes).
pub fn keep_apostrophes_arg() -> Arg {
    Arg::new("keep_apostrophes")
        .short('a')
        .long("keep-apostrophes")
        .action(ArgAction::SetTrue)
        .help("Keep apostrophes between letters inside words (don't)")
}

/// Emit JSON lines (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print one JSON object per input")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
