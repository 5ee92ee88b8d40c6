//! Small fixed-size vector types with every swizzle accessor.
//!
//! This library provides vectors of 2, 3, and 4 components of six scalar types,
//! named after the scalar type and the number of components:
//!
//! | Scalar | 2 | 3 | 4 |
//! |--------|---|---|---|
//! | `bool` | [`Bool2`] | [`Bool3`] | [`Bool4`] |
//! | `f32`  | [`Float2`] | [`Float3`] | [`Float4`] |
//! | `f64`  | [`Double2`] | [`Double3`] | [`Double4`] |
//! | `i32`  | [`Int2`] | [`Int3`] | [`Int4`] |
//! | `u32`  | [`UInt2`] | [`UInt3`] | [`UInt4`] |
//! | `i64`  | [`Long2`] | [`Long3`] | [`Long4`] |
//!
//! Every vector has a method for each way of choosing 2, 3, or 4 of its components, repeats
//! allowed, in either the `xyzw` or `rgba` spelling. These “swizzle” accessors are methods of
//! the traits in [`swizzles`], which are exported by the [`prelude`].
//!
//! All of the vector types and accessors are generated by the `swizzle-vec-gen` library.
//! You can generate your own family of vector types, with different visibility or additional
//! alphabets, using [`vectors!`].
//!
//! # Example
//!
//! ```
//! use swizzle_vec::prelude::*;
//! use swizzle_vec::{Float2, Float3, Float4};
//!
//! let v = Float4::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.wzyx(), Float4::new(4.0, 3.0, 2.0, 1.0));
//! assert_eq!(v.xxyy(), Float4::new(1.0, 1.0, 2.0, 2.0));
//! assert_eq!(v.rgb(), v.xyz());
//!
//! // The same selections are available with indices or text chosen at run time.
//! assert_eq!(v.swizzle([0, 0, 1]), Float3::new(1.0, 1.0, 2.0));
//! assert_eq!(v.try_swizzle::<2>("ba"), Ok(Float2::new(3.0, 4.0)));
//! ```
#![no_std]

mod scalar;
pub use scalar::{Splat, splat2, splat3, splat4};

mod types {
    swizzle_vec_macros::vectors!(
        public_items = true,
        runtime_path = "crate::rt",
        bool,
        f32,
        f64,
        i32,
        u32,
        i64,
    );
}
pub use types::{
    Bool2, Bool3, Bool4, Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4,
    Long2, Long3, Long4, UInt2, UInt3, UInt4,
};

pub use rt::swizzles;
pub use rt::{New, SelectionError, Swizzle, Vector, new};

/// Generates a family of vector types of 2, 3, and 4 components for each listed scalar type.
///
/// This macro should be used in a position where items are allowed
/// (e.g. inside a crate, module, function body, or block), and given a comma-separated list of
/// options of the form `key = value` followed by scalar types:
///
/// ```
/// mod texcoord {
///     swizzle_vec::vectors!(
///         public_items = true,
///         swizzle_traits = true,
///         alphabet = "stpq",
///         f32,
///     );
/// }
/// use texcoord::Vec2Swizzles as _;
///
/// let t = texcoord::Float2::new(0.25, 0.75);
/// assert_eq!(t.ts(), t.yx());
/// assert_eq!(t.t(), 0.75);
/// ```
///
/// The scalar types may be any of `bool`, `f32`, `f64`, `i32`, `u32`, and `i64`.
/// The options are:
///
/// * `public_items = true`: Make the generated types, fields, and methods `pub`.
///   By default, they are private.
/// * `color_aliases = false`: Don't generate the `rgba` spellings. By default, they are generated.
///   Requires `swizzle_traits = true`, since the traits in [`swizzles`] always have them.
/// * `alphabet = "stpq"`: Also generate spellings using the four given lowercase letters.
///   May be given up to five times, and requires `swizzle_traits = true` to affect swizzles.
///   `try_swizzle()` does not recognize these spellings; it knows only `xyzw` and `rgba`.
/// * `swizzle_traits = true`: Generate the `Vec2Swizzles`, `Vec3Swizzles`, and `Vec4Swizzles`
///   traits alongside the types, instead of implementing the ones in [`swizzles`].
/// * `runtime_path = "::path::to::swizzle_vec::rt"`: Where to find this library’s [`rt`] module,
///   if it is not available as `::swizzle_vec::rt`.
pub use swizzle_vec_macros::vectors;

/// Support library for the generated Rust code.
/// Do not use this directly; its contents are not guaranteed to be stable.
pub use swizzle_vec_rt as rt;

/// Traits needed to call swizzle accessors and generic vector operations as methods.
pub mod prelude {
    pub use crate::Splat as _;
    pub use crate::rt::swizzles::{Vec2Swizzles, Vec3Swizzles, Vec4Swizzles};
    pub use crate::rt::{New as _, Swizzle as _, Vector as _};
}
