use crate::{
    Bool2, Bool3, Bool4, Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4,
    Long2, Long3, Long4, UInt2, UInt3, UInt4,
};

/// Helper trait to pick a vector type given a scalar type and component count.
pub trait Splat<const N: usize> {
    /// The vector type of `N` components of `Self`.
    type Vec;

    /// Returns a vector with all `N` components equal to `self`.
    #[must_use]
    fn splat(self) -> Self::Vec;
}

/// Returns a vector of 2 components equal to `value`.
#[inline(always)]
pub fn splat2<T: Splat<2>>(value: T) -> T::Vec {
    Splat::splat(value)
}
/// Returns a vector of 3 components equal to `value`.
#[inline(always)]
pub fn splat3<T: Splat<3>>(value: T) -> T::Vec {
    Splat::splat(value)
}
/// Returns a vector of 4 components equal to `value`.
#[inline(always)]
pub fn splat4<T: Splat<4>>(value: T) -> T::Vec {
    Splat::splat(value)
}

macro_rules! impl_splat {
    ($scalar:ty => $stem:ident) => {
        impl_splat!(@dim 2 $scalar => $stem);
        impl_splat!(@dim 3 $scalar => $stem);
        impl_splat!(@dim 4 $scalar => $stem);
    };
    (@dim $n:literal $scalar:ty => $stem:ident) => {
        paste::paste! {
            impl Splat<$n> for $scalar {
                type Vec = [<$stem $n>];
                #[inline(always)]
                fn splat(self) -> Self::Vec {
                    // calls the inherent method, not this trait method
                    <[<$stem $n>]>::splat(self)
                }
            }
        }
    };
}
impl_splat!(bool => Bool);
impl_splat!(f32 => Float);
impl_splat!(f64 => Double);
impl_splat!(i32 => Int);
impl_splat!(u32 => UInt);
impl_splat!(i64 => Long);
