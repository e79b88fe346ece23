use std::io::Cursor;

use super::input::{load_texts, read_lines, reads_stdin};

#[test]
fn stdin_only_without_texts_or_dash() {
    assert!(reads_stdin(&[]));
    assert!(reads_stdin(&["-".to_string()]));
    assert!(!reads_stdin(&["foo".to_string()]));
    assert!(!reads_stdin(&["-".to_string(), "foo".to_string()]));
}

#[test]
fn explicit_texts_pass_through() {
    let texts = vec!["foo_bar".to_string(), "BazQux".to_string()];
    assert_eq!(load_texts(texts.clone()).unwrap(), texts);
}

#[test]
fn lines_are_split_and_trimmed_of_cr() {
    let lines = read_lines(Cursor::new("foo_bar\r\nBazQux\n\nlast")).unwrap();
    assert_eq!(lines, ["foo_bar", "BazQux", "", "last"]);
}
