use recase_core::{Style, classify};
use serde::Serialize;

use crate::colors::Colors;

use super::error::CommandError;
use super::exit_on_error;
use super::input::load_texts;

pub struct DetectArgs {
    pub texts: Vec<String>,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct Detection<'a> {
    text: &'a str,
    style: Style,
}

pub fn run(args: DetectArgs) {
    exit_on_error(execute(args));
}

fn execute(args: DetectArgs) -> Result<(), CommandError> {
    let colors = Colors::new(args.color);
    for text in load_texts(args.texts)? {
        println!("{}", detect_line(&text, args.json, colors)?);
    }
    Ok(())
}

/// Output line for one input: the style name, or a JSON object.
pub fn detect_line(text: &str, json: bool, colors: Colors) -> Result<String, CommandError> {
    let style = classify(text);
    log::debug!("{text:?} classified as {style}");

    if json {
        return Ok(serde_json::to_string(&Detection { text, style })?);
    }

    let color = if style.is_unknown() {
        colors.dim
    } else {
        colors.blue
    };
    Ok(format!("{color}{style}{}", colors.reset))
}
