//! Constant values for ecka key-agreement operations
//!
//! Published curve definitions, digest sizes and the key sizes used when a
//! derived secret is requested for a named symmetric algorithm.

#![no_std]

pub mod traditional;
pub mod utils;
