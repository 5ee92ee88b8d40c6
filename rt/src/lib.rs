//! Runtime support for vector types generated by `swizzle-vec-gen`.
//!
//! Don't use this library directly; use `swizzle-vec` instead, which re-exports it as `rt`.

#![no_std]

mod construct;
mod selection;
mod vector;

pub mod swizzles;

pub use construct::{New, new};
pub use selection::{Selection, SelectionError};
pub use vector::{Accessor, Swizzle, Vector};
