#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Identifier case conversion and style detection.
//!
//! Three layers, consumed leaf to root:
//! - **Segmentation** (`segment`): text → borrowed word spans
//! - **Rendering** (`render`, `render_into`): words + style → text
//! - **Classification** (`classify`, `matches`): text → `Style`
//!
//! The `convert*` functions and the `to_*_case` shortcuts compose the
//! first two layers for the common cases.
//!
//! # Examples
//! ```
//! use recase_core::{Style, classify, convert};
//!
//! assert_eq!(convert("foo_bar", Style::Camel).unwrap(), "fooBar");
//! assert_eq!(classify("FOO_BAR"), Style::Constant);
//! ```

mod classify;
mod convert;
mod invariants;
mod render;
mod segment;
mod style;

#[cfg(test)]
mod convert_tests;

pub use classify::{
    classify, is_camel_case, is_capital_case, is_constant_case, is_header_case, is_kebab_case,
    is_lower_case, is_pascal_case, is_snake_case, is_upper_case, matches,
};
pub use convert::{
    convert, convert_ext, convert_ext_into, convert_into, to_camel_case, to_capital_case,
    to_constant_case, to_header_case, to_kebab_case, to_lower_case, to_pascal_case,
    to_snake_case, to_upper_case,
};
pub use render::{RenderOptions, render, render_into, rendered_len};
pub use segment::{Word, WordSequence, segment, segment_with};
pub use style::{Style, WordCasing, style_has_options, style_name};

/// Errors returned by rendering and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller-supplied buffer cannot hold the rendered text.
    /// Nothing was written.
    #[error("output buffer too small: need {required} bytes, have {available}")]
    BufferTooSmall { required: usize, available: usize },

    /// The style cannot be used for this operation: `Unknown` as a render
    /// target, or an options-taking style passed to `convert`.
    #[error("style '{0}' is not valid for this operation")]
    InvalidStyle(Style),

    #[error("unknown style name '{0}'")]
    UnknownStyleName(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
