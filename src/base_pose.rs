//! Converts the floating base part of a configuration vector between the URDF and SoT
//! conventions.
//!
//! The URDF convention stores the base pose as 7 values, the position followed by the
//! orientation quaternion: `[x, y, z, qx, qy, qz, qw]`. The SoT convention stores the base pose
//! as 6 values, the position followed by the roll, pitch and yaw angles: `[x, y, z, roll, pitch, yaw]`,
//! where the rotation matrix is `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
//!
//! Base velocities use 6 values (linear followed by angular velocity) in both conventions.

extern crate nalgebra as na;

use std::f64::consts::FRAC_PI_2;

use na::{Matrix3, Quaternion, UnitQuaternion, Vector3};

use crate::Error;

#[cfg(test)]
#[path = "base_pose_tests.rs"]
mod base_pose_tests;

/// The number of values that describe the base pose in the URDF convention.
pub const URDF_BASE_POSE_SIZE: usize = 7;

/// The number of values that describe the base pose in the SoT convention.
pub const SOT_BASE_POSE_SIZE: usize = 6;

/// The number of values that describe the base velocity in both conventions.
pub const BASE_VELOCITY_SIZE: usize = 6;

/// Returns an error if the vector length doesn't match the expected length.
pub(crate) fn check_vector_length(expected: usize, actual: usize) -> Result<(), Error> {
    if expected != actual {
        return Err(Error::LengthMismatch { expected, actual });
    }

    Ok(())
}

/// Distance to a pitch of +/- PI / 2 below which roll and yaw are no longer separable.
const GIMBAL_LOCK_TOLERANCE: f64 = 1e-3;

/// Quaternions with a norm at or below this value have no defined orientation.
const MINIMUM_QUATERNION_NORM: f64 = 1e-9;

/// Writes the base pose given by a position and a rotation matrix in the SoT convention.
///
/// When the pitch is within [GIMBAL_LOCK_TOLERANCE] of +/- PI / 2 only the difference (or sum)
/// of roll and yaw is defined. In that case the roll is set to zero and the whole rotation
/// around the vertical axis is stored in the yaw.
///
/// ## Parameters
///
/// * 'position' - The position of the base
/// * 'rotation' - The rotation matrix describing the orientation of the base
/// * 'q_sot' - The 6 element output vector `[x, y, z, roll, pitch, yaw]`
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when `q_sot` doesn't have 6 elements.
/// * [Error::InvalidOrientation] - Returned when the rotation matrix contains values that
///   are not finite. Nothing is written in that case.
pub fn base_se3_to_sot(
    position: &Vector3<f64>,
    rotation: &Matrix3<f64>,
    q_sot: &mut [f64],
) -> Result<(), Error> {
    check_vector_length(SOT_BASE_POSE_SIZE, q_sot.len())?;
    if !rotation.iter().all(|v| v.is_finite()) {
        return Err(Error::InvalidOrientation);
    }

    let pitch = (-rotation[(2, 0)]).atan2(rotation[(2, 1)].hypot(rotation[(2, 2)]));
    let (roll, yaw) = if (pitch.abs() - FRAC_PI_2).abs() < GIMBAL_LOCK_TOLERANCE {
        (0.0, -rotation[(0, 1)].atan2(rotation[(1, 1)]))
    } else {
        (
            rotation[(2, 1)].atan2(rotation[(2, 2)]),
            rotation[(1, 0)].atan2(rotation[(0, 0)]),
        )
    };

    q_sot[..3].copy_from_slice(position.as_slice());
    q_sot[3] = roll;
    q_sot[4] = pitch;
    q_sot[5] = yaw;

    Ok(())
}

/// Converts a base pose from the URDF convention to the SoT convention.
///
/// The quaternion is normalized before it is converted.
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when `q_urdf` doesn't have 7 elements or `q_sot`
///   doesn't have 6 elements.
/// * [Error::InvalidOrientation] - Returned when the quaternion has a component that is not
///   finite or has a norm too close to zero to be normalized. Nothing is written in that case.
pub fn base_urdf_to_sot(q_urdf: &[f64], q_sot: &mut [f64]) -> Result<(), Error> {
    check_vector_length(URDF_BASE_POSE_SIZE, q_urdf.len())?;
    check_vector_length(SOT_BASE_POSE_SIZE, q_sot.len())?;

    let quaternion = Quaternion::new(q_urdf[6], q_urdf[3], q_urdf[4], q_urdf[5]);
    if !quaternion.coords.iter().all(|v| v.is_finite()) {
        return Err(Error::InvalidOrientation);
    }

    let orientation = match UnitQuaternion::try_new(quaternion, MINIMUM_QUATERNION_NORM) {
        Some(q) => q,
        None => return Err(Error::InvalidOrientation),
    };

    let position = Vector3::new(q_urdf[0], q_urdf[1], q_urdf[2]);
    base_se3_to_sot(
        &position,
        orientation.to_rotation_matrix().matrix(),
        q_sot,
    )
}

/// Converts a base pose from the SoT convention to the URDF convention.
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when `q_sot` doesn't have 6 elements or `q_urdf`
///   doesn't have 7 elements.
pub fn base_sot_to_urdf(q_sot: &[f64], q_urdf: &mut [f64]) -> Result<(), Error> {
    check_vector_length(SOT_BASE_POSE_SIZE, q_sot.len())?;
    check_vector_length(URDF_BASE_POSE_SIZE, q_urdf.len())?;

    let orientation = UnitQuaternion::from_euler_angles(q_sot[3], q_sot[4], q_sot[5]);

    q_urdf[..3].copy_from_slice(&q_sot[..3]);

    // Quaternion coordinates are stored as [i, j, k, w], which is the URDF order
    q_urdf[3..].copy_from_slice(orientation.coords.as_slice());

    Ok(())
}
