//! Case rendering.
//!
//! One loop serves both entry points: `render` writes into a fresh `String`,
//! `render_into` into a caller-owned byte slice after checking it is large
//! enough. Output length is known before anything is written.

use crate::invariants::ensure_utf8;
use crate::segment::WordSequence;
use crate::style::{Style, WordCasing};
use crate::{Error, Result};

/// Options for rendering and conversion.
///
/// `fill` replaces the style's separator when non-empty. It applies to every
/// style, including Camel and Pascal which otherwise have none.
/// `keep_apostrophes` only influences segmentation, so it matters to the
/// `convert*` functions and not to `render` itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub fill: String,
    pub keep_apostrophes: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_keep_apostrophes(mut self, keep: bool) -> Self {
        self.keep_apostrophes = keep;
        self
    }

    /// Whether these options differ from the defaults.
    pub fn is_default(&self) -> bool {
        self.fill.is_empty() && !self.keep_apostrophes
    }

    /// Text joining two words under `style`.
    pub fn separator_for(&self, style: Style) -> &str {
        if self.fill.is_empty() {
            style.separator()
        } else {
            &self.fill
        }
    }
}

/// Exact byte length `render` would produce.
pub fn rendered_len(
    words: &WordSequence<'_>,
    style: Style,
    options: &RenderOptions,
) -> Result<usize> {
    if style.is_unknown() {
        return Err(Error::InvalidStyle(style));
    }
    Ok(required_len(words, style, options))
}

/// Render `words` under `style` into a new string.
pub fn render(
    words: &WordSequence<'_>,
    style: Style,
    options: &RenderOptions,
) -> Result<String> {
    if style.is_unknown() {
        return Err(Error::InvalidStyle(style));
    }
    Ok(render_unchecked(words, style, options))
}

/// Render `words` under `style` into `buf`, returning the written prefix.
///
/// Fails with `BufferTooSmall` without touching `buf` when the output does
/// not fit. Bytes past the returned span are left as they were.
pub fn render_into<'b>(
    words: &WordSequence<'_>,
    style: Style,
    buf: &'b mut [u8],
    options: &RenderOptions,
) -> Result<&'b str> {
    let required = rendered_len(words, style, options)?;
    if required > buf.len() {
        return Err(Error::BufferTooSmall {
            required,
            available: buf.len(),
        });
    }

    {
        let mut sink = SliceSink {
            buf: &mut buf[..required],
            pos: 0,
        };
        write_words(words, style, options, &mut sink);
    }

    let buf: &'b [u8] = buf;
    Ok(ensure_utf8(&buf[..required]))
}

/// `render` for callers that already know `style` is not `Unknown`.
pub(crate) fn render_unchecked(
    words: &WordSequence<'_>,
    style: Style,
    options: &RenderOptions,
) -> String {
    let mut out = String::with_capacity(required_len(words, style, options));
    write_words(words, style, options, &mut out);
    out
}

fn required_len(words: &WordSequence<'_>, style: Style, options: &RenderOptions) -> usize {
    let letters: usize = words.words().iter().map(|w| w.len()).sum();
    let joints = words.len().saturating_sub(1);
    letters + joints * options.separator_for(style).len()
}

trait Sink {
    fn put(&mut self, byte: u8);
    fn put_str(&mut self, s: &str);
}

impl Sink for String {
    fn put(&mut self, byte: u8) {
        // Word bytes are ASCII.
        self.push(char::from(byte));
    }

    fn put_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

struct SliceSink<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl Sink for SliceSink<'_> {
    fn put(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    fn put_str(&mut self, s: &str) {
        let end = self.pos + s.len();
        self.buf[self.pos..end].copy_from_slice(s.as_bytes());
        self.pos = end;
    }
}

fn write_words(
    words: &WordSequence<'_>,
    style: Style,
    options: &RenderOptions,
    sink: &mut impl Sink,
) {
    let separator = options.separator_for(style);
    let casing = style.casing();

    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            sink.put_str(separator);
        }
        write_word(word.as_bytes(), casing.for_word(index), sink);
    }
}

fn write_word(word: &[u8], casing: WordCasing, sink: &mut impl Sink) {
    for (i, &b) in word.iter().enumerate() {
        let cased = match casing {
            WordCasing::Lower => b.to_ascii_lowercase(),
            WordCasing::Upper => b.to_ascii_uppercase(),
            WordCasing::Capitalized | WordCasing::Camel if i == 0 => b.to_ascii_uppercase(),
            WordCasing::Capitalized | WordCasing::Camel => b.to_ascii_lowercase(),
        };
        sink.put(cased);
    }
}
