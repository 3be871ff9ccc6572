#![forbid(unsafe_code)]

//! Dimension calculation for resizable elements.
//!
//! This crate is the pure leaf of resizekit: given where a drag started, how
//! far the pointer has travelled, which handle is held, and the element's
//! bounds, it returns the new width and height. No state, no I/O.
//!
//! # Example
//!
//! ```
//! use resizekit_core::{Dimensions, ResizeDirection};
//! use resizekit_layout::{ResizeRequest, SizeConstraints, compute_dimensions};
//!
//! let request = ResizeRequest::new(
//!     ResizeDirection::BottomRight,
//!     Dimensions::new(100.0, 100.0),
//!     SizeConstraints::default(),
//! )
//! .with_delta(20.0, 30.0);
//!
//! assert_eq!(compute_dimensions(&request), Dimensions::new(120.0, 130.0));
//! ```

pub mod calculator;
pub mod constraints;

pub use calculator::{DerivedAxisPolicy, ResizeRequest, compute_dimensions};
pub use constraints::{Axis, ConstraintError, DEFAULT_MIN_SIZE, SizeConstraints};
pub use resizekit_core::{Dimensions, ResizeDirection};
