use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::Alphabet;

/// Maximum number of alphabets added with [`Config::alphabet()`].
///
/// Every alphabet uses four distinct letters, so more than this would be unusable anyway.
pub(crate) const MAX_EXTRA_ALPHABETS: usize = 5;

/// Configuration/builder for options for vector code generation.
///
/// This configuration allows you to control which names are generated and the
/// syntactic characteristics of the output.
#[derive(Debug)]
pub struct Config {
    pub(crate) flags: WriterFlags,
    pub(crate) runtime_path: Cow<'static, str>,
    pub(crate) extra_alphabets: Vec<Alphabet>,
}

impl Default for Config {
    #[must_use]
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a [`Config`] with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: WriterFlags::COLOR_ALIASES,
            runtime_path: Cow::Borrowed("::swizzle_vec::rt"),
            extra_alphabets: Vec::new(),
        }
    }

    /// Sets whether generated items have `pub` visibility instead of private.
    ///
    /// The default is `false`.
    #[must_use]
    pub fn public_items(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::PUBLIC, value);
        self
    }

    /// Sets whether the [`Alphabet::COLOR`] spellings (`rgba`) are generated
    /// in addition to the positional ones (`xyzw`).
    ///
    /// The runtime library’s swizzle traits always have the `rgba` spellings, so disabling
    /// them when writing vector types also requires [`swizzle_traits()`](Self::swizzle_traits);
    /// otherwise writing fails with [`Error::ColorAliasesWithoutTraits`](crate::Error::ColorAliasesWithoutTraits).
    ///
    /// The default is `true`.
    #[must_use]
    pub fn color_aliases(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::COLOR_ALIASES, value);
        self
    }

    /// Sets whether the swizzle accessor traits (`Vec2Swizzles` and so on) are generated
    /// alongside the vector types, instead of using the ones in the runtime library.
    ///
    /// This must be enabled for any additional [`alphabet()`](Self::alphabet) to take effect
    /// on swizzle accessors, since the runtime library’s traits only know the default
    /// alphabets.
    ///
    /// The default is `false`.
    #[must_use]
    pub fn swizzle_traits(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::SWIZZLE_TRAITS, value);
        self
    }

    /// Adds an alphabet whose spellings are generated as aliases of the positional ones.
    ///
    /// At most five alphabets may be added; writing with more fails with
    /// [`Error::TooManyAlphabets`](crate::Error::TooManyAlphabets).
    ///
    /// Only the named accessors and component getters use the added alphabet.
    /// The runtime parsing done by `try_swizzle()` knows only `xyzw` and `rgba`.
    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.extra_alphabets.push(alphabet);
        self
    }

    /// Sets the Rust module path to the runtime support library.
    ///
    /// The default is `"::swizzle_vec::rt"`.
    ///
    /// # Panics
    ///
    /// Panics if the path is not an absolute path or a path starting with `crate`;
    /// see [`Config::is_valid_runtime_path()`].
    #[must_use]
    pub fn runtime_path(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        assert!(
            Self::is_valid_runtime_path(&value),
            "path should be an absolute path"
        );
        self.runtime_path = value;
        self
    }

    /// Returns whether `path` is acceptable to [`Config::runtime_path()`].
    ///
    /// This is a syntactic check only; it does not check that the path names anything.
    #[must_use]
    pub fn is_valid_runtime_path(path: &str) -> bool {
        let rest = if let Some(rest) = path.strip_prefix("::") {
            rest
        } else if path == "crate" {
            return true;
        } else if let Some(rest) = path.strip_prefix("crate::") {
            rest
        } else {
            return false;
        };
        !rest.is_empty()
            && rest.split("::").all(|segment| {
                let mut chars = segment.chars();
                chars
                    .next()
                    .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
                    && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            })
    }

    /// Returns every alphabet accessors are generated for, positional first.
    pub(crate) fn alphabets(&self) -> impl Iterator<Item = Alphabet> + '_ {
        let color = self
            .flags
            .contains(WriterFlags::COLOR_ALIASES)
            .then_some(Alphabet::COLOR);
        core::iter::once(Alphabet::POSITIONAL)
            .chain(color)
            .chain(self.extra_alphabets.iter().copied())
    }
}

bitflags::bitflags! {
    /// Options for what Rust code is generated.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct WriterFlags: u32 {
        /// Generate items with `pub` visibility instead of private.
        const PUBLIC = 0x1;

        /// Generate `rgba` spellings.
        const COLOR_ALIASES = 0x2;

        /// Generate the swizzle accessor traits rather than referring to the runtime’s.
        const SWIZZLE_TRAITS = 0x4;
    }
}
