use alloc::string::{String, ToString as _};
use core::fmt::{self, Write as _};

use arrayvec::{ArrayString, ArrayVec};

use crate::Error;

/// The largest number of components a vector may have.
pub(crate) const MAX_DIM: u8 = 4;

/// The four symbols used to spell accessor names, one per component.
///
/// Symbol `i` names component `i`, so `"wzyx"` in [`Alphabet::POSITIONAL`] and `"abgr"` in
/// [`Alphabet::COLOR`] both name the components in reverse order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Alphabet {
    symbols: [char; 4],
}

impl Alphabet {
    /// `x`, `y`, `z`, `w`: the names of the vector fields themselves.
    pub const POSITIONAL: Self = Self::new(['x', 'y', 'z', 'w']);

    /// `r`, `g`, `b`, `a`: names for vectors used as colors.
    pub const COLOR: Self = Self::new(['r', 'g', 'b', 'a']);

    /// Creates an alphabet from four symbols.
    ///
    /// The symbols are checked when code is generated; they must be distinct lowercase ASCII
    /// letters.
    #[must_use]
    pub const fn new(symbols: [char; 4]) -> Self {
        Self { symbols }
    }

    /// Parses a string of exactly four symbols, such as `"stpq"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] if the string is not four distinct lowercase ASCII
    /// letters.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let wrong_length = || Error::InvalidAlphabet {
            alphabet: text.to_string(),
            reason: "must have exactly four symbols",
        };
        let mut chars = text.chars();
        let mut symbols = ['\0'; 4];
        for slot in &mut symbols {
            *slot = chars.next().ok_or_else(wrong_length)?;
        }
        if chars.next().is_some() {
            return Err(wrong_length());
        }

        let alphabet = Self::new(symbols);
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Returns the four symbols.
    #[must_use]
    pub const fn symbols(self) -> [char; 4] {
        self.symbols
    }

    /// Returns the symbol naming component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than 4.
    #[must_use]
    pub const fn symbol(self, index: usize) -> char {
        self.symbols[index]
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        let invalid = |reason| Error::InvalidAlphabet {
            alphabet: self.to_string(),
            reason,
        };
        if !self.symbols.iter().all(char::is_ascii_lowercase) {
            return Err(invalid("symbols must be lowercase ASCII letters"));
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].contains(symbol) {
                return Err(invalid("symbols must be distinct"));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|&ch| f.write_char(ch))
    }
}

// -------------------------------------------------------------------------------------------------

/// A choice of source components for each component of a swizzle’s output,
/// such as `[2, 1, 0]` for `zyx`.
///
/// Indices may repeat and appear in any order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Selection {
    indices: ArrayVec<u8, 4>,
}

impl Selection {
    /// Creates a selection from component indices.
    ///
    /// Returns [`None`] if there are fewer than 2 or more than 4 indices,
    /// or any index is not less than 4.
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Option<Self> {
        if !(2..=usize::from(MAX_DIM)).contains(&indices.len())
            || indices.iter().any(|&i| i >= MAX_DIM)
        {
            return None;
        }
        Some(Self {
            indices: indices.iter().copied().collect(),
        })
    }

    /// Returns every selection of `len` components from a vector of `dim` components,
    /// in lexicographic order of their indices (`xx`, `xy`, `yx`, `yy` for 2 and 2).
    ///
    /// There are `dim.pow(len)` of them.
    ///
    /// # Panics
    ///
    /// Panics if `dim` or `len` is not in the range `2..=4`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remainders are less than 4"
    )]
    pub fn of_len(dim: u8, len: u8) -> impl Iterator<Item = Self> {
        assert!((2..=MAX_DIM).contains(&dim), "dimension {dim} out of range");
        assert!((2..=MAX_DIM).contains(&len), "length {len} out of range");
        let dim = u32::from(dim);
        (0..dim.pow(u32::from(len))).map(move |mut n| {
            let mut indices = [0u8; MAX_DIM as usize];
            for slot in indices[..usize::from(len)].iter_mut().rev() {
                *slot = (n % dim) as u8;
                n /= dim;
            }
            Self {
                indices: indices[..usize::from(len)].iter().copied().collect(),
            }
        })
    }

    /// Returns every selection from a vector of `dim` components:
    /// all those of length 2, then 3, then 4.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is not in the range `2..=4`.
    pub fn all(dim: u8) -> impl Iterator<Item = Self> {
        (2..=MAX_DIM).flat_map(move |len| Self::of_len(dim, len))
    }

    /// Returns the source component index for each output component.
    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the number of components of the output vector.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, reason = "at most 4")]
    pub fn output_dim(&self) -> u8 {
        self.indices.len() as u8
    }

    /// Returns the name of this selection’s accessor in `alphabet`, such as `"zyx"`.
    #[must_use]
    pub fn spelling(&self, alphabet: Alphabet) -> ArrayString<16> {
        let mut name = ArrayString::new();
        for &i in &self.indices {
            // symbols are ASCII, so each takes 1 byte, but allow room for any char
            name.push(alphabet.symbol(usize::from(i)));
        }
        name
    }

    /// Returns the spelling as an owned [`String`], for error reporting.
    pub(crate) fn spelling_string(&self, alphabet: Alphabet) -> String {
        self.spelling(alphabet).as_str().into()
    }
}
