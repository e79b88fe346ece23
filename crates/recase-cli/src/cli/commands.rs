//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("recase")
        .about("Convert identifiers between naming styles and detect their style")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(to_command())
        .subcommand(detect_command())
        .subcommand(split_command())
        .subcommand(styles_command())
}

/// Convert text to a style.
pub fn to_command() -> Command {
    Command::new("to")
        .about("Convert text to a naming style")
        .override_usage(
            "\
  recase to <STYLE> [TEXT]...
  recase to <STYLE> < names.txt
  recase to <lower|upper|capital> --fill <TEXT> [TEXT]...",
        )
        .after_help(
            r#"EXAMPLES:
  recase to camel foo_bar             # fooBar
  recase to header HTTPServer         # Http-Server
  recase to upper --fill . foo_bar    # FOO.BAR
  recase to capital -a "don't stop"   # Don't Stop
  cat names.txt | recase to snake     # one conversion per line"#,
        )
        .arg(style_arg())
        .arg(text_arg())
        .arg(fill_arg())
        .arg(keep_apostrophes_arg())
}

/// Detect the style of text.
pub fn detect_command() -> Command {
    Command::new("detect")
        .about("Detect the naming style of text")
        .override_usage(
            "\
  recase detect [TEXT]...
  recase detect --json [TEXT]...",
        )
        .after_help(
            r#"EXAMPLES:
  recase detect foo_bar               # snake
  recase detect FooBar fooBar         # pascal, camel
  recase detect --json FOO_BAR        # {"text":"FOO_BAR","style":"constant"}"#,
        )
        .arg(text_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Show how text is split into words.
pub fn split_command() -> Command {
    Command::new("split")
        .about("Show the words text is split into")
        .arg(text_arg())
        .arg(keep_apostrophes_arg())
}

/// List styles.
pub fn styles_command() -> Command {
    Command::new("styles")
        .about("List supported styles")
        .arg(color_arg())
}
