//! Shared math and types for the coursework demos.
//!
//! Vectors and matrices are `glam` types. This crate adds the handful of
//! operations the exercises lean on: post-multiplying model matrix
//! construction, look-at / perspective, and the vector arithmetic of the
//! vector canvas exercise.
//!
//! # Invariants
//! - Every function here is pure.
//! - Division and inversion report failure instead of producing NaN.

pub mod clock;
pub mod error;
pub mod matrix;
pub mod types;
pub mod vector;

pub use clock::FrameClock;
pub use error::MathError;
pub use matrix::ModelMatrix;
pub use types::Color;
