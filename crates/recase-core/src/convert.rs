//! Segment-then-render conveniences.

use crate::render::{RenderOptions, render, render_into, render_unchecked};
use crate::segment::{segment, segment_with};
use crate::style::Style;
use crate::{Error, Result};

/// Convert `text` to `style` with default options.
///
/// Only for styles without options (Camel, Pascal, Snake, Constant, Kebab,
/// Header). Lower, Upper, Capital and Unknown fail with `InvalidStyle`;
/// use `convert_ext` for those.
///
/// # Examples
/// ```
/// use recase_core::{Style, convert};
/// assert_eq!(convert("foo_bar", Style::Header).unwrap(), "Foo-Bar");
/// assert_eq!(convert("HTTPServer", Style::Snake).unwrap(), "http_server");
/// ```
pub fn convert(text: &str, style: Style) -> Result<String> {
    reject_options_style(style)?;
    render(&segment(text), style, &RenderOptions::default())
}

/// Convert `text` to any renderable style.
///
/// # Examples
/// ```
/// use recase_core::{RenderOptions, Style, convert_ext};
/// let opts = RenderOptions::new().with_keep_apostrophes(true);
/// assert_eq!(convert_ext("don't_stop", Style::Capital, &opts).unwrap(), "Don't Stop");
/// ```
pub fn convert_ext(text: &str, style: Style, options: &RenderOptions) -> Result<String> {
    render(
        &segment_with(text, options.keep_apostrophes),
        style,
        options,
    )
}

/// `convert` writing into `buf`.
pub fn convert_into<'b>(text: &str, style: Style, buf: &'b mut [u8]) -> Result<&'b str> {
    reject_options_style(style)?;
    render_into(&segment(text), style, buf, &RenderOptions::default())
}

/// `convert_ext` writing into `buf`.
pub fn convert_ext_into<'b>(
    text: &str,
    style: Style,
    buf: &'b mut [u8],
    options: &RenderOptions,
) -> Result<&'b str> {
    render_into(
        &segment_with(text, options.keep_apostrophes),
        style,
        buf,
        options,
    )
}

fn reject_options_style(style: Style) -> Result<()> {
    if style.has_options() {
        return Err(Error::InvalidStyle(style));
    }
    Ok(())
}

fn to_fixed(text: &str, style: Style) -> String {
    render_unchecked(&segment(text), style, &RenderOptions::default())
}

fn to_with_options(text: &str, style: Style, options: &RenderOptions) -> String {
    render_unchecked(
        &segment_with(text, options.keep_apostrophes),
        style,
        options,
    )
}

/// `fooBar`
pub fn to_camel_case(text: &str) -> String {
    to_fixed(text, Style::Camel)
}

/// `FooBar`
pub fn to_pascal_case(text: &str) -> String {
    to_fixed(text, Style::Pascal)
}

/// `foo_bar`
pub fn to_snake_case(text: &str) -> String {
    to_fixed(text, Style::Snake)
}

/// `FOO_BAR`
pub fn to_constant_case(text: &str) -> String {
    to_fixed(text, Style::Constant)
}

/// `foo-bar`
pub fn to_kebab_case(text: &str) -> String {
    to_fixed(text, Style::Kebab)
}

/// `Foo-Bar`
pub fn to_header_case(text: &str) -> String {
    to_fixed(text, Style::Header)
}

/// `foo bar`, or words joined by `options.fill`.
pub fn to_lower_case(text: &str, options: &RenderOptions) -> String {
    to_with_options(text, Style::Lower, options)
}

/// `FOO BAR`, or words joined by `options.fill`.
pub fn to_upper_case(text: &str, options: &RenderOptions) -> String {
    to_with_options(text, Style::Upper, options)
}

/// `Foo Bar`, or words joined by `options.fill`.
pub fn to_capital_case(text: &str, options: &RenderOptions) -> String {
    to_with_options(text, Style::Capital, options)
}
