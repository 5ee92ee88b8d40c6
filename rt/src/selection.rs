use core::fmt;

const POSITIONAL: [char; 4] = ['x', 'y', 'z', 'w'];
const COLOR: [char; 4] = ['r', 'g', 'b', 'a'];

/// A choice of `K` source components, parsed from a spelling such as `"zyx"` or `"bgr"`.
///
/// This is the runtime counterpart of the named swizzle accessors; it is used by
/// [`Swizzle::try_swizzle()`](crate::Swizzle::try_swizzle).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Selection<const K: usize> {
    indices: [usize; K],
}

impl<const K: usize> Selection<K> {
    /// Parses `text` as a selection of components from a vector of `dim` components.
    ///
    /// `text` must consist of exactly `K` symbols, all from `xyzw` or all from `rgba`,
    /// each naming a component less than `dim`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] describing the first problem found.
    pub fn parse(text: &str, dim: usize) -> Result<Self, SelectionError> {
        let found = text.chars().count();
        if found != K {
            return Err(SelectionError::Length { expected: K, found });
        }

        let mut alphabet: Option<&[char; 4]> = None;
        let mut indices = [0; K];
        for (slot, symbol) in indices.iter_mut().zip(text.chars()) {
            let (symbol_alphabet, index) = lookup(symbol)?;
            match alphabet {
                None => alphabet = Some(symbol_alphabet),
                Some(a) if a == symbol_alphabet => {}
                Some(_) => return Err(SelectionError::MixedAlphabets),
            }
            if index >= dim {
                return Err(SelectionError::OutOfRange { symbol, dim });
            }
            *slot = index;
        }
        Ok(Self { indices })
    }

    /// Returns the source component index for each output component.
    #[must_use]
    pub const fn indices(self) -> [usize; K] {
        self.indices
    }
}

fn lookup(symbol: char) -> Result<(&'static [char; 4], usize), SelectionError> {
    [&POSITIONAL, &COLOR]
        .into_iter()
        .find_map(|alphabet| {
            let index = alphabet.iter().position(|&c| c == symbol)?;
            Some((alphabet, index))
        })
        .ok_or(SelectionError::UnknownSymbol(symbol))
}

// -------------------------------------------------------------------------------------------------

/// Error returned when a string is not a valid swizzle selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SelectionError {
    /// The selection has the wrong number of symbols.
    Length {
        /// Number of symbols required.
        expected: usize,
        /// Number of symbols given.
        found: usize,
    },

    /// A symbol is not in any alphabet.
    UnknownSymbol(char),

    /// A symbol names a component the vector does not have.
    OutOfRange {
        /// The symbol.
        symbol: char,
        /// The number of components of the vector.
        dim: usize,
    },

    /// Symbols from different alphabets were combined, as in `"xg"`.
    MixedAlphabets,
}

impl core::error::Error for SelectionError {}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::Length { expected, found } => {
                write!(f, "expected {expected} components in selection, found {found}")
            }
            SelectionError::UnknownSymbol(symbol) => {
                write!(f, "‘{symbol}’ does not name a vector component")
            }
            SelectionError::OutOfRange { symbol, dim } => {
                write!(f, "‘{symbol}’ is out of range for a vector of {dim} components")
            }
            SelectionError::MixedAlphabets => {
                write!(f, "selection mixes symbols from different alphabets")
            }
        }
    }
}
