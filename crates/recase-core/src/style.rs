//! Naming styles and their static descriptors.
//!
//! Every style maps to one row of `DESCRIPTORS`: the renderer and the CLI
//! read separator, casing rule, and option support from there instead of
//! matching on the style themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Naming convention for identifier-like text.
///
/// Declaration order is part of the public contract: discriminants are
/// stable and `Unknown` is always last.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Style {
    /// `fooBar`
    Camel = 0,
    /// `FooBar`
    Pascal = 1,
    /// `foo_bar`
    Snake = 2,
    /// `FOO_BAR`
    Constant = 3,
    /// `foo-bar`
    Kebab = 4,
    /// `Foo-Bar`
    Header = 5,
    /// `foo bar`
    Lower = 6,
    /// `FOO BAR`
    Upper = 7,
    /// `Foo Bar`
    Capital = 8,
    /// No style matched. Never a valid render target.
    Unknown = 9,
}

/// How the letters of a single word are cased.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WordCasing {
    /// Every letter lowercase.
    Lower,
    /// Every letter uppercase.
    Upper,
    /// First letter uppercase, the rest lowercase.
    Capitalized,
    /// First word lowercase, every following word capitalized.
    Camel,
}

impl WordCasing {
    /// Casing applied to the word at `index` in a sequence.
    pub fn for_word(self, index: usize) -> WordCasing {
        match self {
            WordCasing::Camel if index == 0 => WordCasing::Lower,
            WordCasing::Camel => WordCasing::Capitalized,
            other => other,
        }
    }
}

struct Descriptor {
    name: &'static str,
    separator: &'static str,
    casing: WordCasing,
    has_options: bool,
}

const DESCRIPTORS: [Descriptor; 10] = [
    Descriptor {
        name: "camel",
        separator: "",
        casing: WordCasing::Camel,
        has_options: false,
    },
    Descriptor {
        name: "pascal",
        separator: "",
        casing: WordCasing::Capitalized,
        has_options: false,
    },
    Descriptor {
        name: "snake",
        separator: "_",
        casing: WordCasing::Lower,
        has_options: false,
    },
    Descriptor {
        name: "constant",
        separator: "_",
        casing: WordCasing::Upper,
        has_options: false,
    },
    Descriptor {
        name: "kebab",
        separator: "-",
        casing: WordCasing::Lower,
        has_options: false,
    },
    Descriptor {
        name: "header",
        separator: "-",
        casing: WordCasing::Capitalized,
        has_options: false,
    },
    Descriptor {
        name: "lower",
        separator: " ",
        casing: WordCasing::Lower,
        has_options: true,
    },
    Descriptor {
        name: "upper",
        separator: " ",
        casing: WordCasing::Upper,
        has_options: true,
    },
    Descriptor {
        name: "capital",
        separator: " ",
        casing: WordCasing::Capitalized,
        has_options: true,
    },
    Descriptor {
        name: "unknown",
        separator: "",
        casing: WordCasing::Lower,
        has_options: false,
    },
];

impl Style {
    /// Every renderable style, in declaration order.
    pub const ALL: [Style; 9] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Constant,
        Style::Kebab,
        Style::Header,
        Style::Lower,
        Style::Upper,
        Style::Capital,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Camel),
            1 => Some(Self::Pascal),
            2 => Some(Self::Snake),
            3 => Some(Self::Constant),
            4 => Some(Self::Kebab),
            5 => Some(Self::Header),
            6 => Some(Self::Lower),
            7 => Some(Self::Upper),
            8 => Some(Self::Capital),
            9 => Some(Self::Unknown),
            _ => None,
        }
    }

    fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Lowercase name, e.g. `"camel"`.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Text placed between words. Empty for Camel, Pascal, and Unknown.
    pub fn separator(self) -> &'static str {
        self.descriptor().separator
    }

    pub fn casing(self) -> WordCasing {
        self.descriptor().casing
    }

    /// Whether the style accepts fill text and apostrophe handling
    /// (Lower, Upper, Capital).
    pub fn has_options(self) -> bool {
        self.descriptor().has_options
    }

    pub fn is_unknown(self) -> bool {
        self == Style::Unknown
    }
}

/// Lowercase name of `style`.
pub fn style_name(style: Style) -> &'static str {
    style.name()
}

/// Whether `style` accepts render options.
pub fn style_has_options(style: Style) -> bool {
    style.has_options()
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Accepts the style name in any ASCII case, plus a few common aliases
    /// (`snake_case`, `kebab-case`, `screaming`, `title`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        let style = match lowered.as_str() {
            "camel" | "camelcase" => Style::Camel,
            "pascal" | "pascalcase" => Style::Pascal,
            "snake" | "snake_case" => Style::Snake,
            "constant" | "constant_case" | "screaming" | "screaming_snake" => Style::Constant,
            "kebab" | "kebab-case" => Style::Kebab,
            "header" | "header-case" | "train" => Style::Header,
            "lower" => Style::Lower,
            "upper" => Style::Upper,
            "capital" | "title" => Style::Capital,
            _ => return Err(Error::UnknownStyleName(s.to_string())),
        };
        Ok(style)
    }
}
