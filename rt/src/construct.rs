/// Construction of a vector from a tuple of its components.
///
/// This allows generic code to construct a vector whose type is known only by inference.
pub trait New: Sized {
    /// Tuple of the components, such as `(f32, f32, f32)`.
    type Args;

    /// Creates a vector from its components.
    #[must_use]
    fn new(args: Self::Args) -> Self;
}

/// Creates a vector of type `T` from a tuple of its components.
#[inline]
#[must_use]
pub fn new<T: New>(args: T::Args) -> T {
    T::new(args)
}
