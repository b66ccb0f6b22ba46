//! Converts complete configuration and velocity vectors, i.e. the floating base part followed
//! by one value per joint, between the URDF and SoT orders.
//!
//! | Vector | URDF length | SoT length |
//! |---|---|---|
//! | configuration | 7 + N | 6 + N |
//! | velocity | 6 + N | 6 + N |
//!
//! where N is the [JointIndexMap::joint_count]. The base part is converted with the functions
//! of the [base_pose](crate::base_pose) module, the joint part is reordered with the
//! [JointIndexMap].

use crate::{
    base_pose::{
        base_sot_to_urdf, base_urdf_to_sot, check_vector_length, BASE_VELOCITY_SIZE,
        SOT_BASE_POSE_SIZE, URDF_BASE_POSE_SIZE,
    },
    joints::joint_index_map::JointIndexMap,
    Error,
};

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod configuration_tests;

/// Converts a configuration vector from the SoT order to the URDF order.
///
/// ## Parameters
///
/// * 'map' - The joint index map that defines the joint order
/// * 'q_sot' - The configuration in the SoT order, 6 + N elements
/// * 'q_urdf' - The output configuration in the URDF order, 7 + N elements
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when either vector has the wrong length. Nothing is
///   written in that case.
pub fn config_sot_to_urdf(
    map: &JointIndexMap,
    q_sot: &[f64],
    q_urdf: &mut [f64],
) -> Result<(), Error> {
    check_vector_length(SOT_BASE_POSE_SIZE + map.joint_count(), q_sot.len())?;
    check_vector_length(URDF_BASE_POSE_SIZE + map.joint_count(), q_urdf.len())?;

    let (base_sot, joints_sot) = q_sot.split_at(SOT_BASE_POSE_SIZE);
    let (base_urdf, joints_urdf) = q_urdf.split_at_mut(URDF_BASE_POSE_SIZE);

    base_sot_to_urdf(base_sot, base_urdf)?;
    map.joints_sot_to_urdf(joints_sot, joints_urdf)
}

/// Converts a configuration vector from the URDF order to the SoT order.
///
/// ## Parameters
///
/// * 'map' - The joint index map that defines the joint order
/// * 'q_urdf' - The configuration in the URDF order, 7 + N elements
/// * 'q_sot' - The output configuration in the SoT order, 6 + N elements
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when either vector has the wrong length. Nothing is
///   written in that case.
pub fn config_urdf_to_sot(
    map: &JointIndexMap,
    q_urdf: &[f64],
    q_sot: &mut [f64],
) -> Result<(), Error> {
    check_vector_length(URDF_BASE_POSE_SIZE + map.joint_count(), q_urdf.len())?;
    check_vector_length(SOT_BASE_POSE_SIZE + map.joint_count(), q_sot.len())?;

    let (base_urdf, joints_urdf) = q_urdf.split_at(URDF_BASE_POSE_SIZE);
    let (base_sot, joints_sot) = q_sot.split_at_mut(SOT_BASE_POSE_SIZE);

    base_urdf_to_sot(base_urdf, base_sot)?;
    map.joints_urdf_to_sot(joints_urdf, joints_sot)
}

/// Converts a velocity vector from the SoT order to the URDF order. The base velocity is
/// copied as is.
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when either vector doesn't have 6 + N elements.
pub fn velocity_sot_to_urdf(
    map: &JointIndexMap,
    v_sot: &[f64],
    v_urdf: &mut [f64],
) -> Result<(), Error> {
    check_vector_length(BASE_VELOCITY_SIZE + map.joint_count(), v_sot.len())?;
    check_vector_length(BASE_VELOCITY_SIZE + map.joint_count(), v_urdf.len())?;

    let (base_sot, joints_sot) = v_sot.split_at(BASE_VELOCITY_SIZE);
    let (base_urdf, joints_urdf) = v_urdf.split_at_mut(BASE_VELOCITY_SIZE);

    base_urdf.copy_from_slice(base_sot);
    map.joints_sot_to_urdf(joints_sot, joints_urdf)
}

/// Converts a velocity vector from the URDF order to the SoT order. The base velocity is
/// copied as is.
///
/// ## Errors
///
/// * [Error::LengthMismatch] - Returned when either vector doesn't have 6 + N elements.
pub fn velocity_urdf_to_sot(
    map: &JointIndexMap,
    v_urdf: &[f64],
    v_sot: &mut [f64],
) -> Result<(), Error> {
    check_vector_length(BASE_VELOCITY_SIZE + map.joint_count(), v_urdf.len())?;
    check_vector_length(BASE_VELOCITY_SIZE + map.joint_count(), v_sot.len())?;

    let (base_urdf, joints_urdf) = v_urdf.split_at(BASE_VELOCITY_SIZE);
    let (base_sot, joints_sot) = v_sot.split_at_mut(BASE_VELOCITY_SIZE);

    base_sot.copy_from_slice(base_urdf);
    map.joints_urdf_to_sot(joints_urdf, joints_sot)
}
