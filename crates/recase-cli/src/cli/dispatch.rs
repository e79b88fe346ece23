//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch → command handlers

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::detect::DetectArgs;
use crate::commands::split::SplitArgs;
use crate::commands::styles::StylesArgs;
use crate::commands::to::ToArgs;

pub struct ToParams {
    pub style: String,
    pub texts: Vec<String>,
    pub fill: Option<String>,
    pub keep_apostrophes: bool,
}

impl ToParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            style: m.get_one::<String>("style").cloned().unwrap_or_default(),
            texts: parse_texts(m),
            fill: m.get_one::<String>("fill").cloned(),
            keep_apostrophes: m.get_flag("keep_apostrophes"),
        }
    }
}

impl From<ToParams> for ToArgs {
    fn from(p: ToParams) -> Self {
        Self {
            style: p.style,
            texts: p.texts,
            fill: p.fill,
            keep_apostrophes: p.keep_apostrophes,
        }
    }
}

pub struct DetectParams {
    pub texts: Vec<String>,
    pub json: bool,
    pub color: ColorChoice,
}

impl DetectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            texts: parse_texts(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DetectParams> for DetectArgs {
    fn from(p: DetectParams) -> Self {
        Self {
            texts: p.texts,
            json: p.json,
            // JSON output is never colorized.
            color: !p.json && p.color.should_colorize(),
        }
    }
}

pub struct SplitParams {
    pub texts: Vec<String>,
    pub keep_apostrophes: bool,
}

impl SplitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            texts: parse_texts(m),
            keep_apostrophes: m.get_flag("keep_apostrophes"),
        }
    }
}

impl From<SplitParams> for SplitArgs {
    fn from(p: SplitParams) -> Self {
        Self {
            texts: p.texts,
            keep_apostrophes: p.keep_apostrophes,
        }
    }
}

pub struct StylesParams {
    pub color: ColorChoice,
}

impl StylesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
        }
    }
}

impl From<StylesParams> for StylesArgs {
    fn from(p: StylesParams) -> Self {
        Self {
            color: p.color.should_colorize(),
        }
    }
}

fn parse_texts(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("text")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
