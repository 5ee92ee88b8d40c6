//! Code generator for fixed-size vector types with swizzle accessors.
//!
//! For each requested [`ScalarKind`], this library writes Rust source for vector types of 2, 3,
//! and 4 components, each with one accessor per way of selecting components
//! (`xy()`, `zyx()`, `xxww()`, …) under every configured [`Alphabet`].
//!
//! The generated code requires the `swizzle-vec` library.
//! You should probably use that library’s `vectors!` macro to embed code in your project,
//! unless you want to generate code in a build script instead.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

// -------------------------------------------------------------------------------------------------

mod config;
mod conv;
mod scalar;
mod select;
mod util;
mod writer;

pub use config::Config;
pub use scalar::ScalarKind;
pub use select::{Alphabet, Selection};
pub use writer::Writer;

// -------------------------------------------------------------------------------------------------

/// Errors returned by the vector code generator.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The provided [`fmt::Write`] implementation returned an error.
    FmtError(fmt::Error),

    /// An [`Alphabet`] cannot be used to spell accessor names.
    InvalidAlphabet {
        /// The alphabet as written.
        alphabet: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Two configured alphabets share a symbol, so their accessors would have the same names.
    DuplicateSymbol(char),

    /// An accessor name would be a Rust identifier that cannot be used as a method name,
    /// or that would be shadowed by an inherent method of the vector type.
    ReservedName(String),

    /// The same scalar kind was requested more than once.
    DuplicateScalar(ScalarKind),

    /// More alphabets were added with [`Config::alphabet()`] than the limit of five.
    TooManyAlphabets(usize),

    /// Vector types were requested without the `rgba` spellings, but they would implement
    /// the runtime library’s swizzle traits, which have them.
    /// [`Config::swizzle_traits()`] must be enabled too.
    ColorAliasesWithoutTraits,
}

impl From<fmt::Error> for Error {
    fn from(value: fmt::Error) -> Self {
        Self::FmtError(value)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::FmtError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FmtError(fmt::Error) => write!(f, "formatting cancelled"),
            Error::InvalidAlphabet { alphabet, reason } => {
                write!(f, "invalid alphabet “{alphabet}”: {reason}")
            }
            Error::DuplicateSymbol(symbol) => {
                write!(f, "symbol ‘{symbol}’ is used by more than one alphabet")
            }
            Error::ReservedName(name) => {
                write!(f, "accessor name `{name}` is reserved and cannot be generated")
            }
            Error::DuplicateScalar(kind) => {
                write!(f, "scalar type `{kind}` was requested more than once")
            }
            Error::TooManyAlphabets(count) => {
                write!(f, "{count} additional alphabets were given; at most 5 are allowed")
            }
            Error::ColorAliasesWithoutTraits => write!(
                f,
                "disabling `rgba` spellings of vector types requires generating swizzle traits too"
            ),
        }
    }
}

/// Generates vector types for each of `scalars` as a string of Rust code.
///
/// # Errors
///
/// Returns an error if the configuration or the list of scalars is not valid;
/// see [`Error`].
pub fn write_string(scalars: &[ScalarKind], config: Config) -> Result<String, Error> {
    let mut w = Writer::new(String::new(), config);
    w.write(scalars)?;
    let output = w.finish();
    Ok(output)
}
