//! Constant values shared by the derivation layer

pub mod hash;
pub mod symmetric;
