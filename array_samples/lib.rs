//! Instructional samples for fixed-size arrays.
//!
//! The crate provides a [fixed-length sequence](crate::sequence::Sequence) whose length is
//! part of its type, a [printer](crate::display::print_sequence) that writes any sequence
//! as tab-delimited text, and the numbered [listings](crate::listings) that put both to use.

#![warn(missing_docs)]

pub mod display;
pub mod listings;
pub mod sequence;

mod macros;
