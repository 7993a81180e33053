//! A small linear algebra library for real-time 3D rendering.
//!
//! The crate provides the math that a rasterizing renderer needs on its CPU side:
//!
//! - [`Vector`]s of any fixed dimension, with [`Vector::cross`] for the 3-dimensional case.
//! - [`Complex`] numbers and [`Quat`]ernions, the latter being used to represent rotations.
//! - Square, column-major [`Matrix`] types, and factories for the 4x4 transforms that make up a
//!   model-view-projection matrix ([`Matrix::translation`], [`Matrix::rotation`],
//!   [`Matrix::view`], [`Matrix::perspective`], ...).
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Dimensions are specified with const
//!   generics, so a dimension mismatch between two operands is a type error rather than a runtime
//!   error. The only runtime check happens when converting from slices ([`DimensionMismatch`]).
//! - Support only a single, column-major, unpadded data layout for matrices, which is the layout
//!   OpenGL expects. [`Matrix::as_slice`] can be uploaded as-is.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Formulas assume field semantics; integer element types work wherever no
//!   division or square root is involved.
//! - No SIMD, no automatic normalization, no floating-point error control. Degenerate inputs
//!   produce NaN or infinity exactly as IEEE-754 arithmetic dictates.
//!
//! Approximate comparisons are provided through the [`approx`] crate's traits, which every type
//! in this crate implements.
//!
//! # Example
//!
//! ```
//! use eng_linalg::*;
//!
//! let proj = Mat4f::perspective(90.0, 800.0, 600.0, 0.1, 100.0);
//! let view = Mat4f::view(0.0, 1.0, 5.0, Quat::IDENTITY);
//! let model = Mat4f::rotation_y(0.5);
//! let mvp = proj * view * model;
//! assert_eq!(mvp.as_slice().len(), 16);
//! ```

pub use approx;

mod complex;
mod error;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use complex::*;
pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
