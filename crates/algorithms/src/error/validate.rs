//! Validation utilities for primitive operations

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a point lies on its curve
#[inline(always)]
pub fn point(condition: bool, curve: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPoint { curve, reason });
    }
    Ok(())
}
