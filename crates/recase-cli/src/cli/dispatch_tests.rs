//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Each subcommand parses its own flags
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. The global -v flag is accepted before and after the subcommand

use super::*;
use crate::cli::commands::{detect_command, split_command, styles_command, to_command};

#[test]
fn to_extracts_style_and_texts() {
    let m = to_command()
        .try_get_matches_from(["to", "camel", "foo_bar", "BAZ_QUX"])
        .unwrap();
    let params = ToParams::from_matches(&m);

    assert_eq!(params.style, "camel");
    assert_eq!(params.texts, ["foo_bar", "BAZ_QUX"]);
    assert_eq!(params.fill, None);
    assert!(!params.keep_apostrophes);
}

#[test]
fn to_without_texts_reads_stdin() {
    let m = to_command().try_get_matches_from(["to", "snake"]).unwrap();
    let params = ToParams::from_matches(&m);
    assert!(params.texts.is_empty());

    let m = to_command()
        .try_get_matches_from(["to", "snake", "-"])
        .unwrap();
    let params = ToParams::from_matches(&m);
    assert_eq!(params.texts, ["-"]);
}

#[test]
fn to_accepts_options() {
    let m = to_command()
        .try_get_matches_from(["to", "upper", "--fill", ".", "-a", "don't stop"])
        .unwrap();
    let params = ToParams::from_matches(&m);

    assert_eq!(params.style, "upper");
    assert_eq!(params.fill.as_deref(), Some("."));
    assert!(params.keep_apostrophes);
    assert_eq!(params.texts, ["don't stop"]);
}

#[test]
fn to_requires_style() {
    let result = to_command().try_get_matches_from(["to"]);
    assert!(result.is_err());
}

#[test]
fn detect_flags() {
    let m = detect_command()
        .try_get_matches_from(["detect", "--json", "--color", "always", "FooBar"])
        .unwrap();
    let params = DetectParams::from_matches(&m);

    assert_eq!(params.texts, ["FooBar"]);
    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn detect_json_disables_color() {
    let m = detect_command()
        .try_get_matches_from(["detect", "--json", "--color", "always"])
        .unwrap();
    let args: crate::commands::detect::DetectArgs = DetectParams::from_matches(&m).into();
    assert!(args.json);
    assert!(!args.color);
}

#[test]
fn detect_rejects_bad_color() {
    let result = detect_command().try_get_matches_from(["detect", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn split_flags() {
    let m = split_command()
        .try_get_matches_from(["split", "--keep-apostrophes", "rock'n'roll"])
        .unwrap();
    let params = SplitParams::from_matches(&m);
    assert!(params.keep_apostrophes);
    assert_eq!(params.texts, ["rock'n'roll"]);
}

#[test]
fn styles_color_default_is_auto() {
    let m = styles_command().try_get_matches_from(["styles"]).unwrap();
    let params = StylesParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn styles_color_never() {
    let m = styles_command()
        .try_get_matches_from(["styles", "--color", "never"])
        .unwrap();
    let args: crate::commands::styles::StylesArgs = StylesParams::from_matches(&m).into();
    assert!(!args.color);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["recase", "-vv", "detect", "foo"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);

    let m = build_cli()
        .try_get_matches_from(["recase", "to", "camel", "-v", "foo"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "to");
    assert_eq!(sub.get_count("verbose"), 1);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["recase"]).is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for line in [
        "Usage: recase [OPTIONS] <COMMAND>",
        "to      Convert text to a naming style",
        "detect  Detect the naming style of text",
        "split   Show the words text is split into",
        "styles  List supported styles",
    ] {
        assert!(help.contains(line), "missing {line:?} in:\n{help}");
    }
}
