#![warn(missing_docs)]

//! Joint index translation for torque-control pipelines.
//!
//! A robot description file (URDF) and the control stack's signal vectors (SoT) list the joints
//! of a robot in different orders, and describe the floating base differently. This crate stores
//! the permutation between both orders together with the joint names and position limits, and
//! provides the conversions of joint, configuration and velocity vectors between the two.

use thiserror::Error;

/// Defines the joint identifiers, limits and the joint index map.
pub mod joints;

/// Converts the floating base part of a configuration between the URDF and SoT conventions.
pub mod base_pose;

/// Converts full configuration and velocity vectors between the URDF and SoT orders.
pub mod configuration;

/// Defines the different errors for the joint map crate.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Returned when a vector does not have the number of elements required by the conversion.
    #[error("Expected a vector with {expected} elements but got one with {actual} elements.")]
    LengthMismatch {
        /// The number of elements the conversion requires.
        expected: usize,
        /// The number of elements of the provided vector.
        actual: usize,
    },

    /// Returned when a permutation contains an index outside of the range of joints.
    #[error("The permutation index {index} is out of range for {joint_count} joints.")]
    InvalidPermutation {
        /// The offending index.
        index: usize,
        /// The number of joints described by the permutation.
        joint_count: usize,
    },

    /// Returned when a permutation maps more than one joint to the same index.
    #[error("The permutation index {index} is used more than once.")]
    DuplicatePermutationIndex {
        /// The index that appears more than once.
        index: usize,
    },

    /// Returned when a numeric value can not be used as a joint id, i.e. when it is negative,
    /// not finite or has a fractional part.
    #[error("The value {value} is not a valid joint id.")]
    InvalidJointId {
        /// The value that was rejected.
        value: f64,
    },

    /// Returned when an orientation can not be turned into a rotation, i.e. when it contains
    /// values that are not finite or when a quaternion has a norm of (nearly) zero.
    #[error("The orientation does not describe a valid rotation.")]
    InvalidOrientation,
}
