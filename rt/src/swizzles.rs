//! Named swizzle accessor traits, implemented by every generated vector type.
//!
//! Each trait has one method per selection of components, in both the `xyzw` and `rgba`
//! spellings, such as [`Vec3Swizzles::zyx()`] and [`Vec3Swizzles::bgr()`].

swizzle_vec_macros::swizzle_traits!(public_items = true, runtime_path = "crate");
