//! A three-channel color value type for relational engines.
//!
//! A [Color] is three eight-bit channels: red, green, and blue. This crate provides everything a
//! host engine needs to store, transmit, index, and compare colors.
//!
//! # Text
//!
//! Colors are written as `(r,g,b)`:
//!
//! ```
//! use pgcolor::Color;
//! let color: Color = "(10,20,30)".parse().unwrap();
//! assert_eq!("(10,20,30)", color.to_string());
//! ```
//!
//! The grammar is strict; see the [text] module for the details and for the [text::Parser]
//! that controls what happens to out-of-range channels.
//!
//! # Binary
//!
//! The wire form is exactly three bytes, one per channel:
//!
//! ```
//! use pgcolor::Color;
//! let color = Color::new(10, 20, 30);
//! assert_eq!([10, 20, 30], color.encode());
//! assert_eq!(color, Color::decode(&[10, 20, 30]).unwrap());
//! ```
//!
//! # Comparing
//!
//! Colors are totally ordered channel by channel, red first, which makes them usable as sort and
//! index keys. They also have a euclidean distance:
//!
//! ```
//! use pgcolor::Color;
//! let a = Color::new(0, 0, 0);
//! let b = Color::new(255, 0, 0);
//! assert!(a < b);
//! assert_eq!(-1, a.compare(&b));
//! assert_eq!(255., a.distance(&b));
//! ```
//!
//! The [operator] module exposes all of this as the named functions a host registers.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod binary;
pub mod operator;
pub mod text;

mod color;
mod error;

pub use crate::{color::Color, error::Error};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
