use recase_core::segment_with;

use super::error::CommandError;
use super::exit_on_error;
use super::input::load_texts;

pub struct SplitArgs {
    pub texts: Vec<String>,
    pub keep_apostrophes: bool,
}

pub fn run(args: SplitArgs) {
    exit_on_error(execute(args));
}

fn execute(args: SplitArgs) -> Result<(), CommandError> {
    for text in load_texts(args.texts)? {
        println!("{}", split_line(&text, args.keep_apostrophes));
    }
    Ok(())
}

/// Words of `text`, space separated.
pub fn split_line(text: &str, keep_apostrophes: bool) -> String {
    segment_with(text, keep_apostrophes)
        .iter()
        .collect::<Vec<_>>()
        .join(" ")
}
