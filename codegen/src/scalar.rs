use core::fmt;

/// The kinds of scalar that vector types can be generated for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ScalarKind {
    /// `bool`, generating `Bool2`, `Bool3`, and `Bool4`.
    Bool,
    /// `f32`, generating `Float2`, `Float3`, and `Float4`.
    Float,
    /// `f64`, generating `Double2`, `Double3`, and `Double4`.
    Double,
    /// `i32`, generating `Int2`, `Int3`, and `Int4`.
    Int,
    /// `u32`, generating `UInt2`, `UInt3`, and `UInt4`.
    UInt,
    /// `i64`, generating `Long2`, `Long3`, and `Long4`.
    Long,
}

impl ScalarKind {
    /// All scalar kinds, in the order their types are conventionally listed.
    pub const ALL: [Self; 6] = [
        Self::Bool,
        Self::Float,
        Self::Double,
        Self::Int,
        Self::UInt,
        Self::Long,
    ];

    /// Returns the Rust primitive type of the components.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Int => "i32",
            Self::UInt => "u32",
            Self::Long => "i64",
        }
    }

    /// Returns the prefix of the vector type names, to which the dimension is appended.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Long => "Long",
        }
    }

    /// Returns whether the scalar type implements [`Eq`] and [`Hash`],
    /// and so the vector types can too.
    #[must_use]
    pub const fn has_total_eq(self) -> bool {
        !matches!(self, Self::Float | Self::Double)
    }

    /// Looks up the scalar kind whose [`rust_type()`](Self::rust_type) is `name`.
    #[must_use]
    pub fn from_rust_type(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.rust_type() == name)
    }

    /// Returns a [`Display`](fmt::Display)able name of the vector type of this scalar and
    /// dimension.
    pub(crate) const fn vector_name(self, dim: u8) -> VectorName {
        VectorName { kind: self, dim }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_type())
    }
}

/// Name of a generated vector type, such as `Float3`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct VectorName {
    kind: ScalarKind,
    dim: u8,
}

impl fmt::Display for VectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.stem(), self.dim)
    }
}
