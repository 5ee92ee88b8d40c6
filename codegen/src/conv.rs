/*!
Conversion of vector vocabulary to Rust identifiers.
*/

use core::fmt;

// Contains all keywords, strict or weak, in 2024 and any previous edition.
// https://doc.rust-lang.org/reference/keywords.html
pub(crate) const KEYWORDS_2024: &[&str] = &[
    "abstract",
    "as",
    "async",
    "await",
    "become",
    "box",
    "break",
    "const",
    "continue",
    "crate",
    "do",
    "dyn",
    "else",
    "enum",
    "extern",
    "false",
    "final",
    "fn",
    "for",
    "gen",
    "if",
    "impl",
    "in",
    "let",
    "loop",
    "macro_rules",
    "macro",
    "match",
    "mod",
    "move",
    "mut",
    "override",
    "priv",
    "pub",
    "raw",
    "ref",
    "return",
    "safe",
    "self",
    "Self",
    "static",
    "struct",
    "super",
    "trait",
    "true",
    "try",
    "type",
    "typeof",
    "union",
    "unsafe",
    "unsized",
    "use",
    "virtual",
    "where",
    "while",
    "yield",
];

/// Identifiers which cannot be written as raw identifiers, and so cannot be accessor names.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

/// Names of inherent methods of every generated vector type.
/// A trait accessor with one of these names would be unreachable by method call syntax.
pub(crate) const INHERENT_METHODS: &[&str] = &["new", "splat"];

/// How a name must be written as a Rust identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum IdentKind {
    /// Not a keyword; written as is.
    Plain,
    /// A keyword which must be written with the `r#` prefix.
    Raw,
    /// A keyword which cannot be used as an identifier at all.
    Unusable,
}

pub(crate) fn classify_ident(name: &str) -> IdentKind {
    if NOT_RAW.contains(&name) {
        IdentKind::Unusable
    } else if KEYWORDS_2024.contains(&name) {
        IdentKind::Raw
    } else {
        IdentKind::Plain
    }
}

/// Formats a name as a Rust identifier, adding the `r#` prefix to keywords.
///
/// The name must already have been checked not to be [`IdentKind::Unusable`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ident<'a>(pub &'a str);

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match classify_ident(self.0) {
            IdentKind::Plain | IdentKind::Unusable => f.write_str(self.0),
            IdentKind::Raw => write!(f, "r#{}", self.0),
        }
    }
}
