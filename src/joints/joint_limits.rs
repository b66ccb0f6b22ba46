#[cfg(test)]
#[path = "joint_limits_tests.rs"]
mod joint_limits_tests;

/// Stores the lower and upper position bounds of a joint.
///
/// The bounds are stored as given. No check is made that the lower bound is smaller than
/// the upper bound, use [JointLimits::is_consistent] to find out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointLimits {
    /// The lower position bound of the joint.
    lower: f64,

    /// The upper position bound of the joint.
    upper: f64,
}

impl JointLimits {
    /// Returns the position closest to the given position that lies within the limits.
    ///
    /// For inconsistent limits the lower bound takes precedence.
    pub fn clamp(&self, position: f64) -> f64 {
        if position < self.lower {
            self.lower
        } else if position > self.upper {
            self.upper.max(self.lower)
        } else {
            position
        }
    }

    /// Returns a value indicating whether the position lies within the limits, bounds included.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.lower && position <= self.upper
    }

    /// Returns a value indicating whether the lower bound does not exceed the upper bound.
    pub fn is_consistent(&self) -> bool {
        self.lower <= self.upper
    }

    /// Returns the lower position bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Creates a new [JointLimits] instance
    ///
    /// ## Parameters
    ///
    /// * 'lower' - The lower position bound of the joint
    /// * 'upper' - The upper position bound of the joint
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns the upper position bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}
