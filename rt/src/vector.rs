use crate::{Selection, SelectionError};

/// A vector of a fixed number of scalar components.
pub trait Vector: Copy {
    /// The type of each component.
    type Scalar: Copy;

    /// The number of components.
    const DIM: usize;

    /// Returns the component at `index`, or [`None`] if `index` is not less than
    /// [`DIM`](Self::DIM).
    fn component(&self, index: usize) -> Option<Self::Scalar>;
}

/// Selection of `K` components of a vector to form a new vector.
pub trait Swizzle<const K: usize>: Copy {
    /// The vector type of `K` components with the same scalar type.
    type Output;

    /// Returns a vector whose component `i` is component `indices[i]` of `self`.
    ///
    /// # Panics
    ///
    /// Panics if any index is not less than the number of components of `self`.
    fn swizzle(self, indices: [usize; K]) -> Self::Output;

    /// Returns a vector of the components named by `selection`, such as `"zyx"` or `"bgr"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `selection` is not exactly `K` symbols from one alphabet naming
    /// components of `Self`.
    fn try_swizzle(self, selection: &str) -> Result<Self::Output, SelectionError>
    where
        Self: Vector,
    {
        let selection = Selection::<K>::parse(selection, Self::DIM)?;
        Ok(self.swizzle(selection.indices()))
    }
}

/// An entry in a table of named swizzle accessors: the accessor’s name,
/// the component indices it selects, and the accessor itself.
pub type Accessor<V, const K: usize> = (
    &'static str,
    [usize; K],
    fn(V) -> <V as Swizzle<K>>::Output,
);
