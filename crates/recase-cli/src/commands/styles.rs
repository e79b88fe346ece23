use recase_core::{RenderOptions, Style, convert_ext};

use crate::colors::Colors;

use super::error::CommandError;
use super::exit_on_error;

/// Text every style is demonstrated on.
const SAMPLE: &str = "foo_bar";

pub struct StylesArgs {
    pub color: bool,
}

pub fn run(args: StylesArgs) {
    exit_on_error(render_table(Colors::new(args.color)).map(|table| print!("{table}")));
}

/// One row per style: name, `foo_bar` in that style, and an `[options]`
/// marker for styles accepting `--fill`/`--keep-apostrophes`.
pub fn render_table(colors: Colors) -> Result<String, CommandError> {
    let mut out = format!("Supported styles ({}):\n", Style::ALL.len());
    for style in Style::ALL {
        let example = convert_ext(SAMPLE, style, &RenderOptions::default())?;
        let row = format!("  {}{:<10}{}{:<11}", colors.blue, style.name(), colors.reset, example);
        if style.has_options() {
            out.push_str(&format!("{row}{}[options]{}\n", colors.dim, colors.reset));
        } else {
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }
    Ok(out)
}
