//! Estimator variance sample

/// Three-axis vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Largest component
    pub fn max_component(&self) -> f32 {
        self.x.max(self.y).max(self.z)
    }
}

/// Two-axis vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// Variances reported by the estimator for one tick
///
/// Values are normalised test ratios: 1.0 means the innovation sits
/// exactly on the estimator's own gate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VarianceSample {
    /// Velocity variance
    pub velocity: f32,
    /// Horizontal position variance
    pub position: f32,
    /// Height variance (not used in the verdict)
    pub height: f32,
    /// Magnetometer variance per axis
    pub mag: Vector3,
    /// True airspeed variance (not used in the verdict)
    pub airspeed: f32,
    /// Position offset (not used in the verdict)
    pub offset: Vector2,
}

impl VarianceSample {
    /// Sample with the verdict-relevant channels set and the rest zero
    pub const fn new(velocity: f32, position: f32, mag: Vector3) -> Self {
        Self {
            velocity,
            position,
            height: 0.0,
            mag,
            airspeed: 0.0,
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
