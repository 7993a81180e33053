//! A curve traced by a point on a circle rolling around a fixed circle.
//!
//! All positions are computed with complex rotations. Equal radii produce a cardioid; the default
//! uses a fixed circle that is larger by the golden ratio.

use eng_linalg::Complexf;

/// Angle (in radians) the traced point advances per frame.
pub const ANGLE_PER_FRAME: f32 = 0.0345;

/// Frames per second the curve is traced at.
pub const FRAME_RATE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cardioid {
    /// Center of the fixed circle.
    pub center: Complexf,
    pub fixed_radius: f32,
    pub rolling_radius: f32,
}

/// The state of a [`Cardioid`] at some angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    /// Center of the rolling circle.
    pub rolling_center: Complexf,
    /// The point on the rolling circle that draws the curve.
    pub point: Complexf,
}

impl Default for Cardioid {
    /// Radii of 50 and 50·φ, centered in a 1240×720 canvas.
    fn default() -> Self {
        Self {
            center: Complexf::new(620.0, 360.0),
            fixed_radius: 50.0 * 1.618_034,
            rolling_radius: 50.0,
        }
    }
}

impl Cardioid {
    pub fn at_frame(&self, frame: u32) -> Trace {
        self.at_angle(ANGLE_PER_FRAME * frame as f32)
    }

    /// Computes the trace after the point has turned by `angle` radians.
    ///
    /// The rolling circle's center advances clockwise by `angle · rolling_radius / fixed_radius`.
    pub fn at_angle(&self, angle: f32) -> Trace {
        let spin = rotor(-angle);
        let orbit = rotor(-angle * (self.rolling_radius / self.fixed_radius));

        let rolling_center = self.center + orbit * (self.fixed_radius + self.rolling_radius);
        let point = rolling_center + spin * orbit * self.rolling_radius;
        Trace {
            rolling_center,
            point,
        }
    }
}

/// The unit complex number rotating by `angle` radians.
fn rotor(angle: f32) -> Complexf {
    Complexf::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use eng_linalg::approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn starts_right_of_center() {
        let cardioid = Cardioid::default();
        let trace = cardioid.at_frame(0);
        assert_abs_diff_eq!(
            trace.rolling_center,
            Complexf::new(620.0 + 130.901_7, 360.0),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            trace.point,
            Complexf::new(620.0 + 180.901_7, 360.0),
            epsilon = 1e-3
        );
    }

    #[test]
    fn circles_keep_their_radii() {
        let cardioid = Cardioid::default();
        for frame in [1, 17, 60, 299, 1000] {
            let trace = cardioid.at_frame(frame);
            let orbit = (trace.rolling_center - cardioid.center).length();
            let arm = (trace.point - trace.rolling_center).length();
            assert_abs_diff_eq!(orbit, 130.901_7, epsilon = 1e-3);
            assert_abs_diff_eq!(arm, 50.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn equal_radii_trace_a_cardioid() {
        let cardioid = Cardioid {
            center: Complexf::ZERO,
            fixed_radius: 1.0,
            rolling_radius: 1.0,
        };

        // The cusp touches the fixed circle opposite the starting point.
        let cusp = cardioid.at_angle(PI);
        assert_abs_diff_eq!(cusp.rolling_center, Complexf::new(-2.0, 0.0), epsilon = 1e-5);
        assert_abs_diff_eq!(cusp.point, Complexf::new(-1.0, 0.0), epsilon = 1e-5);

        // After a quarter turn the rolling circle sits at `-2i` and the point has spun to face -X.
        let quarter = cardioid.at_angle(PI / 2.0);
        assert_abs_diff_eq!(quarter.point, Complexf::new(-1.0, -2.0), epsilon = 1e-5);
    }
}
