use recase_core::{RenderOptions, Style, render, segment_with};

use super::error::CommandError;
use super::exit_on_error;
use super::input::load_texts;
use super::style_resolver::resolve_style;

pub struct ToArgs {
    pub style: String,
    pub texts: Vec<String>,
    pub fill: Option<String>,
    pub keep_apostrophes: bool,
}

pub fn run(args: ToArgs) {
    exit_on_error(execute(args));
}

fn execute(args: ToArgs) -> Result<(), CommandError> {
    let style = resolve_style(&args.style)?;
    let options = RenderOptions {
        fill: args.fill.unwrap_or_default(),
        keep_apostrophes: args.keep_apostrophes,
    };
    check_options(style, &options)?;
    log::debug!("target style: {style}, options: {options:?}");

    for text in load_texts(args.texts)? {
        println!("{}", convert_line(&text, style, &options)?);
    }
    Ok(())
}

/// Options are only accepted by the styles that declare them.
pub fn check_options(style: Style, options: &RenderOptions) -> Result<(), CommandError> {
    if !style.has_options() && !options.is_default() {
        return Err(CommandError::OptionsNotSupported(style));
    }
    Ok(())
}

pub fn convert_line(
    text: &str,
    style: Style,
    options: &RenderOptions,
) -> Result<String, CommandError> {
    let words = segment_with(text, options.keep_apostrophes);
    log::trace!("{text:?} -> {:?}", words.iter().collect::<Vec<_>>());
    Ok(render(&words, style, options)?)
}
