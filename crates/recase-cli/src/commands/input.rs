//! Input collection shared by the text-processing commands.

use std::io::{self, BufRead};

/// Texts given on the command line, or stdin lines when none (or only `-`)
/// were given.
pub fn load_texts(texts: Vec<String>) -> io::Result<Vec<String>> {
    if !reads_stdin(&texts) {
        return Ok(texts);
    }
    log::debug!("reading inputs from stdin");
    read_lines(io::stdin().lock())
}

pub fn reads_stdin(texts: &[String]) -> bool {
    match texts {
        [] => true,
        [only] => only == "-",
        _ => false,
    }
}

/// One input per line. A trailing `\r` is dropped.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|mut l| {
                if l.ends_with('\r') {
                    l.pop();
                }
                l
            })
        })
        .collect()
}
