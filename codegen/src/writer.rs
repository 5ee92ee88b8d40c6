use core::fmt::Write;
use core::ops::RangeInclusive;

use arrayvec::ArrayVec;
use hashbrown::HashSet;

use crate::config::{MAX_EXTRA_ALPHABETS, WriterFlags};
use crate::conv::{self, Ident, IdentKind};
use crate::select::MAX_DIM;
use crate::util::{Level, sep};
use crate::{Alphabet, Config, Error, ScalarKind, Selection};

// -------------------------------------------------------------------------------------------------

/// Shorthand result used internally by the generator
type BackendResult = Result<(), Error>;

/// Every vector dimension that is generated.
const DIMS: RangeInclusive<u8> = 2..=MAX_DIM;

/// Upper bound on the number of alphabets a valid [`Config`] can have:
/// positional, color, and the added ones.
const MAX_ALPHABETS: usize = MAX_EXTRA_ALPHABETS + 2;

/// Writes Rust code for vector types and their swizzle accessors
/// to a [`Write`] implementation of type `W`.
#[derive(Debug)]
pub struct Writer<W> {
    out: W,
    config: Config,
}

impl<W: Write> Writer<W> {
    /// Creates a new [`Writer`] for writing code to `out`.
    pub fn new(out: W, config: Config) -> Self {
        Writer { out, config }
    }

    /// Writes vector types of every dimension for each of `scalars`,
    /// preceded by the swizzle accessor traits if [`Config::swizzle_traits()`] is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if a scalar kind is repeated,
    /// or if the contained [`Write`] implementation returns an error.
    pub fn write(&mut self, scalars: &[ScalarKind]) -> BackendResult {
        self.validate()?;
        if !scalars.is_empty() {
            self.validate_vectors()?;
        }
        for (i, &kind) in scalars.iter().enumerate() {
            if scalars[..i].contains(&kind) {
                return Err(Error::DuplicateScalar(kind));
            }
        }

        if self.config.flags.contains(WriterFlags::SWIZZLE_TRAITS) {
            for dim in DIMS {
                self.write_swizzle_trait_unchecked(dim)?;
                writeln!(self.out)?;
            }
        }
        for &kind in scalars {
            for dim in DIMS {
                self.write_vector_unchecked(kind, dim)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Writes only the swizzle accessor traits `Vec2Swizzles`, `Vec3Swizzles`, and
    /// `Vec4Swizzles`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    /// or if the contained [`Write`] implementation returns an error.
    pub fn write_swizzle_traits(&mut self) -> BackendResult {
        self.validate()?;
        for dim in DIMS {
            self.write_swizzle_trait_unchecked(dim)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Writes the swizzle accessor trait for vectors of `dim` components.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    /// or if the contained [`Write`] implementation returns an error.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is not in the range `2..=4`.
    pub fn write_swizzle_trait(&mut self, dim: u8) -> BackendResult {
        assert!(DIMS.contains(&dim), "dimension {dim} out of range");
        self.validate()?;
        self.write_swizzle_trait_unchecked(dim)
    }

    /// Writes the vector type of `dim` components of `kind`.
    ///
    /// The output refers to the vector types of the same kind and other dimensions,
    /// so it will only compile if they are written too.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    /// or if the contained [`Write`] implementation returns an error.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is not in the range `2..=4`.
    pub fn write_vector(&mut self, kind: ScalarKind, dim: u8) -> BackendResult {
        assert!(DIMS.contains(&dim), "dimension {dim} out of range");
        self.validate()?;
        self.validate_vectors()?;
        self.write_vector_unchecked(kind, dim)
    }

    /// Returns the output, consuming the writer.
    pub fn finish(self) -> W {
        self.out
    }

    /// Checks that the configured alphabets can spell every accessor name.
    fn validate(&self) -> BackendResult {
        let extra = self.config.extra_alphabets.len();
        if extra > MAX_EXTRA_ALPHABETS {
            return Err(Error::TooManyAlphabets(extra));
        }

        let mut seen: HashSet<char> = HashSet::new();
        for alphabet in self.config.alphabets() {
            alphabet.validate()?;
            for symbol in alphabet.symbols() {
                if !seen.insert(symbol) {
                    return Err(Error::DuplicateSymbol(symbol));
                }
            }
            // Names for smaller vectors are a subset of these.
            for selection in Selection::all(MAX_DIM) {
                let name = selection.spelling(alphabet);
                if conv::classify_ident(&name) == IdentKind::Unusable
                    || conv::INHERENT_METHODS.contains(&name.as_str())
                {
                    return Err(Error::ReservedName(selection.spelling_string(alphabet)));
                }
            }
        }
        Ok(())
    }

    /// Checks options that only matter when vector types are written.
    fn validate_vectors(&self) -> BackendResult {
        let flags = self.config.flags;
        let runtime_traits = !flags.contains(WriterFlags::SWIZZLE_TRAITS);
        if runtime_traits && !flags.contains(WriterFlags::COLOR_ALIASES) {
            return Err(Error::ColorAliasesWithoutTraits);
        }
        Ok(())
    }

    fn alphabets(&self) -> ArrayVec<Alphabet, MAX_ALPHABETS> {
        self.config.alphabets().collect()
    }

    fn visibility(&self) -> &'static str {
        if self.config.flags.contains(WriterFlags::PUBLIC) {
            "pub "
        } else {
            ""
        }
    }

    fn write_swizzle_trait_unchecked(&mut self, dim: u8) -> BackendResult {
        let alphabets = self.alphabets();
        let vis = self.visibility();
        let Self { out, config } = self;
        let rt = &*config.runtime_path;
        let n = usize::from(dim);
        let l1 = Level(1);
        let l2 = l1.next();
        let l3 = l2.next();

        writeln!(
            out,
            "/// Named swizzle accessors for vectors of {dim} components.\n\
            ///\n\
            /// Each accessor is spelled with one symbol per output component,\n\
            /// all from one of the alphabets:"
        )?;
        for alphabet in &alphabets {
            write!(out, "/// - `")?;
            for &symbol in &alphabet.symbols()[..n] {
                out.write_char(symbol)?;
            }
            writeln!(out, "`")?;
        }
        writeln!(
            out,
            "{vis}trait Vec{dim}Swizzles:\n\
            {l1}Copy + {rt}::Swizzle<2> + {rt}::Swizzle<3> + {rt}::Swizzle<4>\n\
            {{"
        )?;

        // Tables of accessors
        for len in DIMS {
            if len > 2 {
                writeln!(out)?;
            }
            let count = alphabets.len() * n.pow(u32::from(len));
            writeln!(
                out,
                "{l1}/// Returns every named accessor producing {len} components,\n\
                {l1}/// with the component indices it selects.\n\
                {l1}#[must_use]\n\
                {l1}fn accessors{len}() -> [{rt}::Accessor<Self, {len}>; {count}] {{\n\
                {l2}["
            )?;
            for alphabet in &alphabets {
                for selection in Selection::of_len(dim, len) {
                    let name = selection.spelling(*alphabet);
                    write!(out, "{l3}(\"{name}\", [")?;
                    for (i, index) in selection.indices().iter().enumerate() {
                        write!(out, "{}{index}", sep(i))?;
                    }
                    writeln!(out, "], Self::{}),", Ident(&name))?;
                }
            }
            writeln!(out, "{l2}]\n{l1}}}")?;
        }

        // Accessor methods
        for (a, alphabet) in alphabets.iter().enumerate() {
            for selection in Selection::all(dim) {
                let len = selection.output_dim();
                let name = selection.spelling(*alphabet);

                write!(out, "\n{l1}/// Returns `(")?;
                for (i, &index) in selection.indices().iter().enumerate() {
                    write!(out, "{}{}", sep(i), alphabet.symbol(usize::from(index)))?;
                }
                if a == 0 {
                    writeln!(out, ")`.")?;
                } else {
                    let positional = selection.spelling(Alphabet::POSITIONAL);
                    writeln!(out, ")`; the same as `{positional}`.")?;
                }
                writeln!(
                    out,
                    "{l1}#[inline]\n\
                    {l1}#[must_use]\n\
                    {l1}fn {ident}(self) -> <Self as {rt}::Swizzle<{len}>>::Output {{",
                    ident = Ident(&name),
                )?;
                write!(out, "{l2}<Self as {rt}::Swizzle<{len}>>::swizzle(self, [")?;
                for (i, index) in selection.indices().iter().enumerate() {
                    write!(out, "{}{index}", sep(i))?;
                }
                writeln!(out, "])\n{l1}}}")?;
            }
        }

        writeln!(out, "}}")?;
        Ok(())
    }

    fn write_vector_unchecked(&mut self, kind: ScalarKind, dim: u8) -> BackendResult {
        let alphabets = self.alphabets();
        let vis = self.visibility();
        let Self { out, config } = self;
        let rt = &*config.runtime_path;
        let local_traits = config.flags.contains(WriterFlags::SWIZZLE_TRAITS);
        let n = usize::from(dim);
        let name = kind.vector_name(dim);
        let ty = kind.rust_type();
        let fields = &Alphabet::POSITIONAL.symbols()[..n];
        let aliases = &alphabets[1..];
        let l1 = Level(1);
        let l2 = l1.next();
        let l3 = l2.next();

        // Struct definition
        let derives = if kind.has_total_eq() {
            "Clone, Copy, Debug, Default, PartialEq, Eq, Hash"
        } else {
            "Clone, Copy, Debug, Default, PartialEq"
        };
        writeln!(
            out,
            "/// A vector of {dim} `{ty}` components.\n\
            #[derive({derives})]\n\
            #[repr(C)]\n\
            {vis}struct {name} {{"
        )?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{l1}/// Component {i}")?;
            for (j, alias) in aliases.iter().enumerate() {
                let joiner = if j == 0 { ", also called" } else { " or" };
                write!(out, "{joiner} `{}`", alias.symbol(i))?;
            }
            writeln!(out, ".\n{l1}{vis}{field}: {ty},")?;
        }
        writeln!(out, "}}\n")?;

        // Inherent methods
        writeln!(out, "impl {name} {{")?;

        writeln!(
            out,
            "{l1}/// Creates a vector from its components.\n\
            {l1}#[inline]\n\
            {l1}#[must_use]"
        )?;
        write!(out, "{l1}{vis}const fn new(")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}: {ty}", sep(i))?;
        }
        write!(out, ") -> Self {{\n{l2}Self {{ ")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}", sep(i))?;
        }
        writeln!(out, " }}\n{l1}}}\n")?;

        writeln!(
            out,
            "{l1}/// Creates a vector with all components equal to `value`.\n\
            {l1}#[inline]\n\
            {l1}#[must_use]\n\
            {l1}{vis}const fn splat(value: {ty}) -> Self {{"
        )?;
        write!(out, "{l2}Self {{ ")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}: value", sep(i))?;
        }
        writeln!(out, " }}\n{l1}}}\n")?;

        writeln!(
            out,
            "{l1}/// Creates a vector from an array of its components.\n\
            {l1}#[inline]\n\
            {l1}#[must_use]"
        )?;
        write!(out, "{l1}{vis}const fn from_array([")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}", sep(i))?;
        }
        write!(out, "]: [{ty}; {dim}]) -> Self {{\n{l2}Self {{ ")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}", sep(i))?;
        }
        writeln!(out, " }}\n{l1}}}\n")?;

        writeln!(
            out,
            "{l1}/// Returns the components as an array.\n\
            {l1}#[inline]\n\
            {l1}#[must_use]\n\
            {l1}{vis}const fn to_array(self) -> [{ty}; {dim}] {{"
        )?;
        write!(out, "{l2}[")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}self.{field}", sep(i))?;
        }
        writeln!(out, "]\n{l1}}}\n")?;

        for alias in aliases {
            for (i, field) in fields.iter().enumerate() {
                writeln!(
                    out,
                    "{l1}/// Returns component {i}, `{field}`.\n\
                    {l1}#[inline]\n\
                    {l1}#[must_use]\n\
                    {l1}{vis}const fn {symbol}(self) -> {ty} {{\n\
                    {l2}self.{field}\n\
                    {l1}}}\n",
                    symbol = alias.symbol(i),
                )?;
            }
        }

        let last_index = dim - 1;
        let example: ArrayVec<char, 4> = fields.iter().rev().copied().collect();
        writeln!(
            out,
            "{l1}/// Returns a vector of the components at `indices`, in order.\n\
            {l1}///\n\
            {l1}/// # Panics\n\
            {l1}///\n\
            {l1}/// Panics if any index is greater than {last_index}.\n\
            {l1}#[inline]\n\
            {l1}#[must_use]\n\
            {l1}{vis}fn swizzle<const K: usize>(self, indices: [usize; K]) -> <Self as {rt}::Swizzle<K>>::Output\n\
            {l1}where\n\
            {l2}Self: {rt}::Swizzle<K>,\n\
            {l1}{{\n\
            {l2}<Self as {rt}::Swizzle<K>>::swizzle(self, indices)\n\
            {l1}}}\n"
        )?;
        write!(
            out,
            "{l1}/// Returns a vector of the components named by `selection`, such as `\""
        )?;
        example.iter().try_for_each(|&ch| out.write_char(ch))?;
        writeln!(
            out,
            "\"`.\n\
            {l1}///\n\
            {l1}/// # Errors\n\
            {l1}///\n\
            {l1}/// Returns an error if `selection` is not `K` symbols, all from `xyzw` or all from\n\
            {l1}/// `rgba`, that name components of this vector. Other alphabets are not recognized.\n\
            {l1}#[inline]\n\
            {l1}{vis}fn try_swizzle<const K: usize>(\n\
            {l2}self,\n\
            {l2}selection: &str,\n\
            {l1}) -> Result<<Self as {rt}::Swizzle<K>>::Output, {rt}::SelectionError>\n\
            {l1}where\n\
            {l2}Self: {rt}::Swizzle<K>,\n\
            {l1}{{\n\
            {l2}<Self as {rt}::Swizzle<K>>::try_swizzle(self, selection)\n\
            {l1}}}\n\
            }}\n"
        )?;

        // Runtime traits
        writeln!(
            out,
            "impl {rt}::Vector for {name} {{\n\
            {l1}type Scalar = {ty};\n\
            {l1}const DIM: usize = {dim};\n\
            \n\
            {l1}#[inline]\n\
            {l1}fn component(&self, index: usize) -> Option<{ty}> {{\n\
            {l2}match index {{"
        )?;
        for (i, field) in fields.iter().enumerate() {
            writeln!(out, "{l3}{i} => Some(self.{field}),")?;
        }
        writeln!(out, "{l3}_ => None,\n{l2}}}\n{l1}}}\n}}\n")?;

        write!(out, "impl {rt}::New for {name} {{\n{l1}type Args = (")?;
        for i in 0..n {
            write!(out, "{}{ty}", sep(i))?;
        }
        write!(out, ");\n\n{l1}#[inline]\n{l1}fn new((")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}", sep(i))?;
        }
        write!(out, "): Self::Args) -> Self {{\n{l2}Self {{ ")?;
        for (i, field) in fields.iter().enumerate() {
            write!(out, "{}{field}", sep(i))?;
        }
        writeln!(out, " }}\n{l1}}}\n}}\n")?;

        writeln!(
            out,
            "impl From<[{ty}; {dim}]> for {name} {{\n\
            {l1}#[inline]\n\
            {l1}fn from(array: [{ty}; {dim}]) -> Self {{\n\
            {l2}Self::from_array(array)\n\
            {l1}}}\n\
            }}\n\
            \n\
            impl From<{name}> for [{ty}; {dim}] {{\n\
            {l1}#[inline]\n\
            {l1}fn from(vector: {name}) -> Self {{\n\
            {l2}vector.to_array()\n\
            {l1}}}\n\
            }}\n"
        )?;

        for len in DIMS {
            let output = kind.vector_name(len);
            writeln!(
                out,
                "impl {rt}::Swizzle<{len}> for {name} {{\n\
                {l1}type Output = {output};\n\
                \n\
                {l1}#[inline]"
            )?;
            write!(out, "{l1}fn swizzle(self, [")?;
            for i in 0..len {
                write!(out, "{}i{i}", sep(usize::from(i)))?;
            }
            write!(
                out,
                "]: [usize; {len}]) -> {output} {{\n\
                {l2}let c = self.to_array();\n\
                {l2}{output}::new("
            )?;
            for i in 0..len {
                write!(out, "{}c[i{i}]", sep(usize::from(i)))?;
            }
            writeln!(out, ")\n{l1}}}\n}}\n")?;
        }

        if local_traits {
            writeln!(out, "impl Vec{dim}Swizzles for {name} {{}}")?;
        } else {
            writeln!(out, "impl {rt}::swizzles::Vec{dim}Swizzles for {name} {{}}")?;
        }
        Ok(())
    }
}
