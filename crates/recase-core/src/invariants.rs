//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// View rendered bytes as text.
///
/// Rendered output is built from ASCII word bytes and a `&str` fill, so it is
/// valid UTF-8 by construction.
pub(crate) fn ensure_utf8(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap_or_else(|e| {
        panic!(
            "render: written span is not UTF-8 ({e}) \
             (words must only contain ASCII bytes)"
        )
    })
}
