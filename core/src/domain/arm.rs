//! Two-link planar arm: which angles put the tip on a target point?
//!
//! The shoulder sits at the origin. Every function takes its inputs explicitly; there is
//! no shared state to set up first.

use std::f64::consts::PI;

use dirule_common::DiError;

const TOLERANCE: f64 = 1e-9;

/// Heading from the shoulder to `(x, y)`, in radians.
pub fn direction(x: f64, y: f64) -> f64 {
    y.atan2(x)
}

/// Law of cosines: cosine of the angle at the tip, between the lower segment and the
/// shoulder-to-target line of length `d`.
pub fn cos_at_tip(d: f64, upper: f64, lower: f64) -> f64 {
    (d * d + lower * lower - upper * upper) / (2.0 * lower * d)
}

/// Law of cosines: cosine of the angle at the shoulder, between the upper segment and
/// the shoulder-to-target line of length `d`.
pub fn cos_at_shoulder(d: f64, upper: f64, lower: f64) -> f64 {
    (d * d - lower * lower + upper * upper) / (2.0 * d * upper)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arm {
    upper: f64,
    lower: f64,
}

/// Joint angles, in radians, reaching a target with the elbow bent upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reach {
    /// Heading of the upper segment.
    pub shoulder: f64,
    /// Bend at the elbow. Zero means the arm is fully stretched.
    pub elbow: f64,
    /// Distance from shoulder to target.
    pub distance: f64,
}

impl Arm {
    pub fn new(upper: f64, lower: f64) -> Result<Self, DiError> {
        for length in [upper, lower] {
            if !(length.is_finite() && length > 0.0) {
                return Err(DiError::InvalidSegment { length });
            }
        }
        Ok(Self { upper, lower })
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn reach(&self, x: f64, y: f64) -> Result<Reach, DiError> {
        let distance = x.hypot(y);
        let too_far = distance > self.upper + self.lower + TOLERANCE;
        let too_close = distance + TOLERANCE < (self.upper - self.lower).abs();
        if !distance.is_finite() || distance < TOLERANCE || too_far || too_close {
            return Err(DiError::Unreachable { x, y });
        }

        // Rounding can push a cosine just past ±1 at the edges of the workspace.
        let at_shoulder = cos_at_shoulder(distance, self.upper, self.lower)
            .clamp(-1.0, 1.0)
            .acos();
        let at_tip = cos_at_tip(distance, self.upper, self.lower)
            .clamp(-1.0, 1.0)
            .acos();

        Ok(Reach {
            shoulder: direction(x, y) + at_shoulder,
            elbow: at_shoulder + at_tip,
            distance,
        })
    }

    /// Forward kinematics: where the tip ends up for the given joint angles.
    pub fn tip(&self, reach: &Reach) -> (f64, f64) {
        let forearm = reach.shoulder - reach.elbow;
        (
            self.upper * reach.shoulder.cos() + self.lower * forearm.cos(),
            self.upper * reach.shoulder.sin() + self.lower * forearm.sin(),
        )
    }
}

impl Reach {
    /// Interior angle between the two segments.
    pub fn interior(&self) -> f64 {
        PI - self.elbow
    }
}
