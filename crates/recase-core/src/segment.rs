//! Word segmentation.
//!
//! Splits text into words without copying: each `Word` is a byte span into
//! the source. Boundaries come from delimiters, digit/letter transitions,
//! lower→upper transitions, and the last letter of an uppercase run that is
//! followed by lowercase (`HTTPServer` → `HTTP`, `Server`).
//!
//! Only ASCII letters, ASCII digits, and (optionally) inner apostrophes end
//! up inside words. Every other byte, including each byte of a multi-byte
//! UTF-8 sequence, is a delimiter, so word spans always fall on char
//! boundaries.

use std::ops::Range;

/// A word inside a `WordSequence`: a byte span of its source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Word {
    start: usize,
    len: usize,
}

impl Word {
    fn span(start: usize, end: usize) -> Self {
        Self {
            start,
            len: end - start,
        }
    }

    #[inline]
    pub fn start(self) -> usize {
        self.start
    }

    #[inline]
    pub fn len(self) -> usize {
        self.len
    }

    /// Always false for words produced by segmentation.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn end(self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Ordered words of one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSequence<'a> {
    source: &'a str,
    words: Vec<Word>,
}

impl<'a> WordSequence<'a> {
    /// The text the words point into.
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Text of `word`. The word must belong to this sequence.
    pub fn text(&self, word: Word) -> &'a str {
        &self.source[word.range()]
    }

    /// Word texts in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        let source = self.source;
        self.words.iter().map(move |w| &source[w.range()])
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Apostrophe,
    Delimiter,
}

impl CharClass {
    fn of(b: u8) -> Self {
        match b {
            b'A'..=b'Z' => Self::Upper,
            b'a'..=b'z' => Self::Lower,
            b'0'..=b'9' => Self::Digit,
            b'\'' => Self::Apostrophe,
            _ => Self::Delimiter,
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, Self::Upper | Self::Lower)
    }
}

/// Segment `text` treating apostrophes as delimiters.
pub fn segment(text: &str) -> WordSequence<'_> {
    segment_with(text, false)
}

/// Segment `text`. With `keep_apostrophes`, an apostrophe between two
/// letters stays inside its word (`don't`); any other apostrophe is a
/// delimiter.
pub fn segment_with(text: &str, keep_apostrophes: bool) -> WordSequence<'_> {
    let bytes = text.as_bytes();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev = CharClass::Delimiter;

    for (i, &b) in bytes.iter().enumerate() {
        let class = match CharClass::of(b) {
            CharClass::Apostrophe if keep_apostrophes && is_inner_apostrophe(bytes, i) => {
                CharClass::Apostrophe
            }
            CharClass::Apostrophe => CharClass::Delimiter,
            class => class,
        };

        if class == CharClass::Delimiter {
            if let Some(s) = start.take() {
                words.push(Word::span(s, i));
            }
            prev = class;
            continue;
        }

        match start {
            None => start = Some(i),
            Some(s) => {
                if let Some(split) = split_point(bytes, s, i, prev, class) {
                    words.push(Word::span(s, split));
                    start = Some(split);
                }
            }
        }
        prev = class;
    }

    if let Some(s) = start {
        words.push(Word::span(s, bytes.len()));
    }

    WordSequence {
        source: text,
        words,
    }
}

fn is_inner_apostrophe(bytes: &[u8], i: usize) -> bool {
    let before = i
        .checked_sub(1)
        .is_some_and(|j| bytes[j].is_ascii_alphabetic());
    let after = bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic);
    before && after
}

/// Where a new word starts, given the current word began at `start` and the
/// byte at `i` (class `class`) follows a byte of class `prev`.
fn split_point(
    bytes: &[u8],
    start: usize,
    i: usize,
    prev: CharClass,
    class: CharClass,
) -> Option<usize> {
    match (prev, class) {
        (CharClass::Digit, c) if c.is_letter() => Some(i),
        (p, CharClass::Digit) if p.is_letter() => Some(i),
        (CharClass::Lower, CharClass::Upper) => Some(i),
        // Uppercase run of two or more followed by lowercase: the run's last
        // letter opens the next word.
        (CharClass::Upper, CharClass::Lower)
            if i - 1 > start && bytes[i - 2].is_ascii_uppercase() =>
        {
            Some(i - 1)
        }
        _ => None,
    }
}
