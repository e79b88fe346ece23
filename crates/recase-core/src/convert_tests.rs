use crate::Error;
use crate::classify::*;
use crate::convert::*;
use crate::render::RenderOptions;
use crate::style::Style;

/// Every style applied to `foo_bar`.
const FOO_BAR: [(Style, &str); 9] = [
    (Style::Camel, "fooBar"),
    (Style::Pascal, "FooBar"),
    (Style::Snake, "foo_bar"),
    (Style::Constant, "FOO_BAR"),
    (Style::Kebab, "foo-bar"),
    (Style::Header, "Foo-Bar"),
    (Style::Lower, "foo bar"),
    (Style::Upper, "FOO BAR"),
    (Style::Capital, "Foo Bar"),
];

fn convert_any(text: &str, style: Style) -> String {
    if style.has_options() {
        convert_ext(text, style, &RenderOptions::default()).unwrap()
    } else {
        convert(text, style).unwrap()
    }
}

#[test]
fn foo_bar_end_to_end() {
    assert_eq!(convert("foo_bar", Style::Header).unwrap(), "Foo-Bar");
    assert_eq!(convert("foo_bar", Style::Constant).unwrap(), "FOO_BAR");
    assert_eq!(convert("foo_bar", Style::Camel).unwrap(), "fooBar");
    assert_eq!(convert("foo_bar", Style::Pascal).unwrap(), "FooBar");
    assert_eq!(
        convert_ext("foo_bar", Style::Upper, &RenderOptions::new().with_fill("")).unwrap(),
        "FOO BAR"
    );
}

#[test]
fn foo_bar_matrix() {
    let mut buf = [0u8; 20];
    for (style, expected) in FOO_BAR {
        assert_eq!(convert_any("foo_bar", style), expected, "to {style}");

        let written = if style.has_options() {
            convert_ext_into("foo_bar", style, &mut buf, &RenderOptions::default()).unwrap()
        } else {
            convert_into("foo_bar", style, &mut buf).unwrap()
        };
        assert_eq!(written, expected, "buffered to {style}");

        assert_eq!(classify(expected), style, "classify {expected}");
        assert!(matches(expected, style), "{expected} matches {style}");
    }
}

#[test]
fn convert_rejects_options_styles() {
    for style in [Style::Lower, Style::Upper, Style::Capital] {
        assert_eq!(convert("foo_bar", style), Err(Error::InvalidStyle(style)));
        let mut buf = [0u8; 20];
        assert_eq!(
            convert_into("foo_bar", style, &mut buf),
            Err(Error::InvalidStyle(style))
        );
    }
}

#[test]
fn unknown_target_is_invalid() {
    assert_eq!(
        convert("foo", Style::Unknown),
        Err(Error::InvalidStyle(Style::Unknown))
    );
    assert_eq!(
        convert_ext("foo", Style::Unknown, &RenderOptions::default()),
        Err(Error::InvalidStyle(Style::Unknown))
    );
}

#[test]
fn degenerate_inputs_render_empty() {
    for style in Style::ALL {
        assert_eq!(convert_any("", style), "");
        assert_eq!(convert_any(" -_- ", style), "");
    }
}

#[test]
fn convert_ext_fill_and_apostrophes() {
    let opts = RenderOptions::new()
        .with_fill("_")
        .with_keep_apostrophes(true);
    assert_eq!(
        convert_ext("don't stop believing", Style::Upper, &opts).unwrap(),
        "DON'T_STOP_BELIEVING"
    );

    let opts = RenderOptions::new().with_keep_apostrophes(true);
    assert_eq!(
        convert_ext("rock'n'roll ain't noise", Style::Capital, &opts).unwrap(),
        "Rock'n'roll Ain't Noise"
    );

    let opts = RenderOptions::default();
    assert_eq!(
        convert_ext("don't stop", Style::Lower, &opts).unwrap(),
        "don t stop"
    );
}

#[test]
fn buffer_variants_check_capacity() {
    let mut buf = [0u8; 6];
    assert_eq!(
        convert_into("foo_bar", Style::Kebab, &mut buf),
        Err(Error::BufferTooSmall {
            required: 7,
            available: 6
        })
    );
    assert_eq!(buf, [0u8; 6]);

    let opts = RenderOptions::new().with_fill("...");
    let mut buf = [0u8; 9];
    assert_eq!(
        convert_ext_into("foo_bar", Style::Lower, &mut buf, &opts),
        Ok("foo...bar")
    );
}

#[test]
fn round_trip_classifies_as_target() {
    let inputs = [
        "foo_bar",
        "HTTPServer",
        "xml http request",
        "Content-Type",
        "user_id_2",
        "parseJSONValue",
    ];
    for input in inputs {
        for style in Style::ALL {
            let out = convert_any(input, style);
            assert_eq!(classify(&out), style, "{input} -> {out}");
        }
    }
}

#[test]
fn conversion_is_idempotent() {
    let inputs = [
        "foo_bar",
        "HTTPServer",
        "XMLHttpRequest",
        "user_id_2",
        "  leading and trailing  ",
        "get-HTTP-response",
    ];
    for input in inputs {
        for style in Style::ALL {
            let once = convert_any(input, style);
            let twice = convert_any(&once, style);
            assert_eq!(twice, once, "{input} via {style}");
        }
    }
}

#[test]
fn acronyms_across_styles() {
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_camel_case("XMLHttpRequest"), "xmlHttpRequest");
    assert_eq!(to_kebab_case("getHTTPResponse"), "get-http-response");
    assert_eq!(to_constant_case("IOError"), "IO_ERROR");
}

#[test]
fn shortcuts_match_convert() {
    let input = "someMixed_input-Text";
    assert_eq!(to_camel_case(input), "someMixedInputText");
    assert_eq!(to_pascal_case(input), "SomeMixedInputText");
    assert_eq!(to_snake_case(input), "some_mixed_input_text");
    assert_eq!(to_constant_case(input), "SOME_MIXED_INPUT_TEXT");
    assert_eq!(to_kebab_case(input), "some-mixed-input-text");
    assert_eq!(to_header_case(input), "Some-Mixed-Input-Text");

    let opts = RenderOptions::default();
    assert_eq!(to_lower_case(input, &opts), "some mixed input text");
    assert_eq!(to_upper_case(input, &opts), "SOME MIXED INPUT TEXT");
    assert_eq!(to_capital_case(input, &opts), "Some Mixed Input Text");

    let opts = RenderOptions::new().with_fill("/");
    assert_eq!(to_lower_case(input, &opts), "some/mixed/input/text");
}
