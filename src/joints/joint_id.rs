//! Defines the identifier that links a joint name, its limits and its position in the
//! joint vectors.

use std::fmt::Display;

use crate::Error;

#[cfg(test)]
#[path = "joint_id_tests.rs"]
mod joint_id_tests;

/// Defines the integer ID of a joint.
///
/// Configuration sources frequently provide joint ids as floating point numbers. Those values
/// can only be turned into a [JointId] through [TryFrom<f64>], which refuses values that are not
/// exact non-negative integers instead of truncating them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct JointId {
    id: usize,
}

impl JointId {
    /// Returns the index value of the ID.
    pub fn index(&self) -> usize {
        self.id
    }

    /// Creates a new ID for the given index.
    pub const fn new(id: usize) -> Self {
        Self { id }
    }
}

impl Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JointId [{}]", self.id)
    }
}

impl AsRef<JointId> for JointId {
    fn as_ref(&self) -> &JointId {
        self
    }
}

impl From<usize> for JointId {
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl TryFrom<f64> for JointId {
    type Error = Error;

    /// Converts a floating point value into a [JointId].
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidJointId] - Returned when the value is not finite, is negative, has a
    ///   fractional part or does not fit in a `usize`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite()
            || value < 0.0
            || value.fract() != 0.0
            || value >= usize::MAX as f64
        {
            return Err(Error::InvalidJointId { value });
        }

        Ok(Self { id: value as usize })
    }
}
