/// Provides the strict integer identifier for joints
pub mod joint_id;

/// Provides the position limits of a joint
pub mod joint_limits;

/// Defines the translation table between the URDF and SoT joint orders
pub mod joint_index_map;
