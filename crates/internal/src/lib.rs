//! Internal utilities for the ecka library
//!
//! Byte-level helpers shared by the primitive and agreement crates. Nothing in
//! here is part of the stable public API.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice, ct_is_zero};
pub use endian::{strip_leading_zeros, u32_to_be_bytes};
