//! Defines the translation table between the joint order of the robot description file (URDF)
//! and the joint order of the control stack signal vectors (SoT).
//!
//! The [JointIndexMap] holds three independent tables:
//!
//! - the permutation from URDF joint indices to SoT joint indices,
//! - the joint names and their ids, in both directions,
//! - the position limits per joint id.
//!
//! Joint ids are shared keys between the tables, but no check is made that an id used in one
//! table also exists in another one.
//!
//! ```
//! use sot_joint_map::joints::{joint_id::JointId, joint_index_map::JointIndexMap};
//!
//! let mut map = JointIndexMap::new();
//! map.set_urdf_to_sot(&[2, 0, 1]).unwrap();
//!
//! let q_urdf = [10.0, 20.0, 30.0];
//! let mut q_sot = [0.0; 3];
//! map.joints_urdf_to_sot(&q_urdf, &mut q_sot).unwrap();
//! assert_eq!([20.0, 30.0, 10.0], q_sot);
//!
//! map.set_name_to_id("knee", JointId::new(2));
//! assert_eq!(Some(JointId::new(2)), map.id_from_name("knee"));
//! assert_eq!(None, map.id_from_name("ankle"));
//! ```

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::Error;

use super::{joint_id::JointId, joint_limits::JointLimits};

#[cfg(test)]
#[path = "joint_index_map_tests.rs"]
mod joint_index_map_tests;

/// Describes a single joint as provided by the robot configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct JointConfiguration {
    /// The name of the joint as used in the robot description.
    name: String,

    /// The id of the joint.
    id: JointId,

    /// The position limits of the joint.
    limits: JointLimits,
}

impl JointConfiguration {
    /// Returns the id of the joint.
    pub fn id(&self) -> JointId {
        self.id
    }

    /// Returns the position limits of the joint.
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Returns the name of the joint.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Creates a new [JointConfiguration] instance
    ///
    /// ## Parameters
    ///
    /// * 'name' - The name of the joint
    /// * 'id' - The id of the joint
    /// * 'limits' - The position limits of the joint
    pub fn new(name: impl Into<String>, id: JointId, limits: JointLimits) -> Self {
        Self {
            name: name.into(),
            id,
            limits,
        }
    }
}

/// Stores the mapping between the URDF and SoT joint orders together with the joint names
/// and the joint position limits.
#[derive(Clone, Debug, Default)]
pub struct JointIndexMap {
    /// Element i contains the SoT index of the URDF joint with index i.
    urdf_to_sot: Vec<usize>,

    /// The inverse of `urdf_to_sot`. Element j contains the URDF index of the SoT joint with index j.
    sot_to_urdf: Vec<usize>,

    /// The map from the joint name to the joint id.
    name_to_id: BTreeMap<String, JointId>,

    /// The map from the joint id to the joint name. Rebuilt from `name_to_id` each time
    /// a name is added.
    id_to_name: BTreeMap<JointId, String>,

    /// The position limits per joint id.
    limits: BTreeMap<JointId, JointLimits>,
}

impl JointIndexMap {
    /// Adds the name, id and limits of a joint.
    ///
    /// Existing entries for the same name or id are overwritten.
    pub fn add_joint(&mut self, configuration: &JointConfiguration) {
        self.set_name_to_id(configuration.name(), configuration.id());
        self.set_joint_limits_for_id(
            configuration.id(),
            configuration.limits().lower(),
            configuration.limits().upper(),
        );
    }

    /// Validates that the elements of `permutation` are a bijection on `[0, permutation.len())`.
    fn check_permutation(permutation: &[usize]) -> Result<(), Error> {
        let joint_count = permutation.len();
        let mut seen = vec![false; joint_count];
        for &index in permutation {
            if index >= joint_count {
                return Err(Error::InvalidPermutation { index, joint_count });
            }

            if seen[index] {
                return Err(Error::DuplicatePermutationIndex { index });
            }

            seen[index] = true;
        }

        Ok(())
    }

    /// Converts a numeric value into a [JointId], logging the value when it is rejected.
    fn checked_id(value: f64) -> Result<JointId, Error> {
        JointId::try_from(value).map_err(|e| {
            warn!(error = %e, "Rejecting numeric joint id");
            e
        })
    }

    /// Returns an error if a joint vector of the given length doesn't match the number of joints.
    fn check_joint_vector_length(&self, length: usize) -> Result<(), Error> {
        if length != self.joint_count() {
            return Err(Error::LengthMismatch {
                expected: self.joint_count(),
                actual: length,
            });
        }

        Ok(())
    }

    /// Creates a map from a table of joint configurations and the URDF to SoT permutation.
    ///
    /// ## Parameters
    ///
    /// * 'configurations' - The name, id and limits of each joint
    /// * 'urdf_to_sot' - Element i contains the SoT index of the URDF joint i
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidPermutation] - Returned when the permutation contains an index that is
    ///   larger than or equal to the number of joints.
    /// * [Error::DuplicatePermutationIndex] - Returned when the permutation contains an index
    ///   more than once.
    pub fn from_joint_configurations(
        configurations: &[JointConfiguration],
        urdf_to_sot: &[usize],
    ) -> Result<Self, Error> {
        let mut result = Self::new();
        result.set_urdf_to_sot(urdf_to_sot)?;
        for configuration in configurations {
            result.add_joint(configuration);
        }

        Ok(result)
    }

    /// Returns the id of the joint with the given name, or [None] if the name is unknown.
    pub fn id_from_name(&self, name: &str) -> Option<JointId> {
        let result = self.name_to_id.get(name).copied();
        if result.is_none() {
            Self::report_lookup_miss("name", name);
        }

        result
    }

    /// Returns the number of joints, i.e. the length of the current permutation.
    pub fn joint_count(&self) -> usize {
        self.urdf_to_sot.len()
    }

    /// Reorders a joint vector from the SoT order to the URDF order, i.e.
    /// `q_urdf[i] = q_sot[urdf_to_sot[i]]`.
    ///
    /// ## Errors
    ///
    /// * [Error::LengthMismatch] - Returned when either vector doesn't have exactly
    ///   [JointIndexMap::joint_count] elements. Nothing is written in that case.
    pub fn joints_sot_to_urdf(&self, q_sot: &[f64], q_urdf: &mut [f64]) -> Result<(), Error> {
        self.check_joint_vector_length(q_sot.len())?;
        self.check_joint_vector_length(q_urdf.len())?;

        for (urdf_index, &sot_index) in self.urdf_to_sot.iter().enumerate() {
            q_urdf[urdf_index] = q_sot[sot_index];
        }

        Ok(())
    }

    /// Reorders a joint vector from the URDF order to the SoT order, i.e.
    /// `q_sot[urdf_to_sot[i]] = q_urdf[i]`.
    ///
    /// ## Errors
    ///
    /// * [Error::LengthMismatch] - Returned when either vector doesn't have exactly
    ///   [JointIndexMap::joint_count] elements. Nothing is written in that case.
    pub fn joints_urdf_to_sot(&self, q_urdf: &[f64], q_sot: &mut [f64]) -> Result<(), Error> {
        self.check_joint_vector_length(q_urdf.len())?;
        self.check_joint_vector_length(q_sot.len())?;

        for (urdf_index, &sot_index) in self.urdf_to_sot.iter().enumerate() {
            q_sot[sot_index] = q_urdf[urdf_index];
        }

        Ok(())
    }

    /// Returns the stored limits for the joint, or [None] if no limits were set for it.
    pub fn limits_from_id(&self, id: JointId) -> Option<&JointLimits> {
        let result = self.limits.get(&id);
        if result.is_none() {
            Self::report_lookup_miss("limits", &id.to_string());
        }

        result
    }

    /// Returns the stored limits for the joint, or zero limits if no limits were set for it.
    pub fn limits_or_default(&self, id: JointId) -> JointLimits {
        self.limits_from_id(id).copied().unwrap_or_default()
    }

    /// Returns the name of the joint with the given id, or [None] if the id is unknown.
    pub fn name_from_id(&self, id: JointId) -> Option<&str> {
        let result = self.id_to_name.get(&id).map(String::as_str);
        if result.is_none() {
            Self::report_lookup_miss("id", &id.to_string());
        }

        result
    }

    /// Returns an iterator over the joint names and their ids, ordered by name.
    pub fn names(&self) -> impl Iterator<Item = (&str, JointId)> {
        self.name_to_id
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
    }

    /// Creates a new, empty, [JointIndexMap].
    pub fn new() -> Self {
        Self {
            urdf_to_sot: Vec::new(),
            sot_to_urdf: Vec::new(),
            name_to_id: BTreeMap::new(),
            id_to_name: BTreeMap::new(),
            limits: BTreeMap::new(),
        }
    }

    /// Recreates the id to name map from the name to id map.
    fn rebuild_id_to_name(&mut self) {
        self.id_to_name = self
            .name_to_id
            .iter()
            .map(|(name, id)| (*id, name.clone()))
            .collect();
    }

    #[cfg_attr(test, mutants::skip)] // Only emits a log event
    fn report_lookup_miss(table: &str, key: &str) {
        debug!(table, key, "Joint lookup did not find a matching entry");
    }

    /// Sets the position limits for the joint with the given id.
    ///
    /// The limits are stored as provided, an inverted range is not rejected.
    ///
    /// ## Parameters
    ///
    /// * 'id' - The id of the joint
    /// * 'lower' - The lower position bound
    /// * 'upper' - The upper position bound
    pub fn set_joint_limits_for_id(&mut self, id: JointId, lower: f64, upper: f64) {
        let limits = JointLimits::new(lower, upper);
        if !limits.is_consistent() {
            warn!(%id, lower, upper, "Storing joint limits with a lower bound above the upper bound");
        }

        debug!(%id, lower, upper, "Setting joint limits");
        self.limits.insert(id, limits);
    }

    /// Sets the position limits for the joint with the given numeric id.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidJointId] - Returned when `id` is not an exact non-negative integer.
    pub fn set_joint_limits_for_value(
        &mut self,
        id: f64,
        lower: f64,
        upper: f64,
    ) -> Result<(), Error> {
        let id = Self::checked_id(id)?;
        self.set_joint_limits_for_id(id, lower, upper);
        Ok(())
    }

    /// Links the joint name to the given id.
    ///
    /// An existing link for the name is overwritten. The id to name map is rebuilt afterwards
    /// so that it reflects the current name to id map.
    pub fn set_name_to_id(&mut self, name: impl Into<String>, id: JointId) {
        let name = name.into();
        debug!(name = name.as_str(), %id, "Linking joint name to id");

        self.name_to_id.insert(name, id);
        self.rebuild_id_to_name();
    }

    /// Links the joint name to the given numeric id.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidJointId] - Returned when `id` is not an exact non-negative integer. The
    ///   tables are not changed in that case.
    pub fn set_name_to_id_from_value(
        &mut self,
        name: impl Into<String>,
        id: f64,
    ) -> Result<(), Error> {
        let id = Self::checked_id(id)?;
        self.set_name_to_id(name, id);
        Ok(())
    }

    /// Sets the permutation from URDF joint indices to SoT joint indices. The number of joints
    /// becomes the length of the permutation.
    ///
    /// ## Parameters
    ///
    /// * 'urdf_to_sot' - Element i contains the SoT index of the URDF joint i
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidPermutation] - Returned when the permutation contains an index that is
    ///   larger than or equal to the number of joints.
    /// * [Error::DuplicatePermutationIndex] - Returned when the permutation contains an index
    ///   more than once.
    ///
    /// The current permutation is kept when an error is returned.
    pub fn set_urdf_to_sot(&mut self, urdf_to_sot: &[usize]) -> Result<(), Error> {
        if let Err(e) = Self::check_permutation(urdf_to_sot) {
            warn!(error = %e, "Rejecting URDF to SoT permutation");
            return Err(e);
        }

        let mut sot_to_urdf = vec![0; urdf_to_sot.len()];
        for (urdf_index, &sot_index) in urdf_to_sot.iter().enumerate() {
            sot_to_urdf[sot_index] = urdf_index;
        }

        debug!(joint_count = urdf_to_sot.len(), "Setting URDF to SoT permutation");
        self.urdf_to_sot = urdf_to_sot.to_vec();
        self.sot_to_urdf = sot_to_urdf;
        Ok(())
    }

    /// Sets the permutation from URDF joint indices to SoT joint indices from numeric values.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidJointId] - Returned when one of the values is not an exact
    ///   non-negative integer.
    /// * [Error::InvalidPermutation] - Returned when the permutation contains an index that is
    ///   larger than or equal to the number of joints.
    /// * [Error::DuplicatePermutationIndex] - Returned when the permutation contains an index
    ///   more than once.
    pub fn set_urdf_to_sot_from_values(&mut self, urdf_to_sot: &[f64]) -> Result<(), Error> {
        let indices = urdf_to_sot
            .iter()
            .map(|&value| Self::checked_id(value).map(|id| id.index()))
            .collect::<Result<Vec<usize>, Error>>()?;

        self.set_urdf_to_sot(&indices)
    }

    /// Returns the SoT index of the joint with the given URDF index, or [None] if the index is
    /// out of range.
    pub fn sot_index_of_urdf(&self, urdf_index: usize) -> Option<usize> {
        self.urdf_to_sot.get(urdf_index).copied()
    }

    /// Returns the current URDF to SoT permutation.
    pub fn urdf_to_sot(&self) -> &[usize] {
        &self.urdf_to_sot
    }

    /// Returns the URDF index of the joint with the given SoT index, or [None] if the index is
    /// out of range.
    pub fn urdf_index_of_sot(&self, sot_index: usize) -> Option<usize> {
        self.sot_to_urdf.get(sot_index).copied()
    }
}
