//! Affine rescaling of continuous actions with clipping.
use crate::error::RtxError;
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// Bounds of an affine remap from `[low, high]` onto
/// `[post_scaling_min, post_scaling_max]`.
///
/// After the remap, values are clipped into
/// `[post_scaling_min + safety_margin, post_scaling_max - safety_margin]`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub struct RescaleConfig {
    /// Lower bound of the input range.
    pub low: f32,

    /// Upper bound of the input range.
    pub high: f32,

    /// Margin kept away from both ends of the output range.
    pub safety_margin: f32,

    /// Lower bound of the output range.
    pub post_scaling_min: f32,

    /// Upper bound of the output range.
    pub post_scaling_max: f32,
}

impl Default for RescaleConfig {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl RescaleConfig {
    /// Bounds for `world_vector`.
    pub const WORLD_VECTOR: Self = Self {
        low: -0.05,
        high: 0.05,
        safety_margin: 0.01,
        post_scaling_min: -1.75,
        post_scaling_max: 1.75,
    };

    /// Bounds for `rotation_delta`.
    pub const ROTATION_DELTA: Self = Self {
        low: -0.25,
        high: 0.25,
        safety_margin: 0.01,
        post_scaling_min: -1.4,
        post_scaling_max: 1.4,
    };

    /// Remaps `[low, high]` onto `[-1, 1]` without margin.
    pub fn new(low: f32, high: f32) -> Self {
        Self {
            low,
            high,
            safety_margin: 0.0,
            post_scaling_min: -1.0,
            post_scaling_max: 1.0,
        }
    }

    /// Sets the safety margin.
    pub fn safety_margin(mut self, v: f32) -> Self {
        self.safety_margin = v;
        self
    }

    /// Sets the output range.
    pub fn post_scaling(mut self, min: f32, max: f32) -> Self {
        self.post_scaling_min = min;
        self.post_scaling_max = max;
        self
    }

    /// Checks that the input range is not empty and the clip window is not inverted.
    pub fn check(&self) -> Result<(), RtxError> {
        let (clip_min, clip_max) = self.clip_bounds();
        if self.high > self.low && self.safety_margin >= 0.0 && clip_min <= clip_max {
            Ok(())
        } else {
            Err(RtxError::InvalidRescaleBound {
                low: self.low,
                high: self.high,
                safety_margin: self.safety_margin,
                post_scaling_min: self.post_scaling_min,
                post_scaling_max: self.post_scaling_max,
            })
        }
    }

    /// The interval the output is clipped into.
    pub fn clip_bounds(&self) -> (f32, f32) {
        (
            self.post_scaling_min + self.safety_margin,
            self.post_scaling_max - self.safety_margin,
        )
    }

    /// The affine remap of `x`, before clipping.
    pub fn remap(&self, x: f32) -> f32 {
        (x - self.low) / (self.high - self.low) * (self.post_scaling_max - self.post_scaling_min)
            + self.post_scaling_min
    }

    /// Clips `y` into [`RescaleConfig::clip_bounds`].
    pub fn clip(&self, y: f32) -> f32 {
        let (min, max) = self.clip_bounds();
        y.max(min).min(max)
    }

    /// Remaps and clips a scalar.
    pub fn rescale(&self, x: f32) -> f32 {
        self.clip(self.remap(x))
    }

    /// Remaps and clips a fixed-size vector elementwise.
    pub fn rescale_vec<const N: usize>(&self, x: [f32; N]) -> [f32; N] {
        let mut y = x;
        y.iter_mut().for_each(|v| *v = self.rescale(*v));
        y
    }

    /// Remaps and clips an array of any shape elementwise.
    pub fn rescale_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f32, D>
    where
        S: Data<Elem = f32>,
        D: Dimension,
    {
        x.mapv(|v| self.rescale(v))
    }
}

/// Remaps `actions` from `[low, high]` onto `[post_scaling_min, post_scaling_max]`
/// and clips the result, keeping `safety_margin` away from both ends.
pub fn rescale_action_with_bound<S, D>(
    actions: &ArrayBase<S, D>,
    low: f32,
    high: f32,
    safety_margin: f32,
    post_scaling_max: f32,
    post_scaling_min: f32,
) -> Array<f32, D>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    RescaleConfig {
        low,
        high,
        safety_margin,
        post_scaling_min,
        post_scaling_max,
    }
    .rescale_array(actions)
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{arr1, arr2};

    const EPS: f32 = 1e-6;

    #[test]
    fn test_world_vector_upper_end() {
        let c = RescaleConfig::WORLD_VECTOR;
        assert!((c.remap(0.05) - 1.75).abs() < EPS);
        assert!((c.rescale(0.05) - 1.74).abs() < EPS);
    }

    #[test]
    fn test_rotation_delta_lower_end() {
        let c = RescaleConfig::ROTATION_DELTA;
        assert!((c.remap(-0.25) + 1.4).abs() < EPS);
        assert!((c.rescale(-0.25) + 1.39).abs() < EPS);
    }

    #[test]
    fn test_midpoint_maps_to_center() {
        assert!(RescaleConfig::WORLD_VECTOR.rescale(0.0).abs() < EPS);
        assert!((RescaleConfig::new(0.0, 2.0).rescale(1.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_saturates_at_margin() {
        let c = RescaleConfig::WORLD_VECTOR;
        assert!((c.rescale(10.0) - 1.74).abs() < EPS);
        assert!((c.rescale(-10.0) + 1.74).abs() < EPS);
    }

    #[test]
    fn test_clip_is_idempotent() {
        for c in [RescaleConfig::WORLD_VECTOR, RescaleConfig::ROTATION_DELTA].iter() {
            for x in [-1.0f32, -0.05, -0.01, 0.0, 0.02, 0.25, 3.0].iter() {
                let y = c.rescale(*x);
                assert_eq!(c.clip(y), y);
            }
        }
    }

    #[test]
    fn test_identity_bounds_rescale_twice() {
        let c = RescaleConfig::default();
        for x in [-0.9f32, -0.5, 0.0, 0.3, 0.99].iter() {
            let once = c.rescale(*x);
            assert!((c.rescale(once) - once).abs() < EPS);
        }
    }

    #[test]
    fn test_monotonic() {
        let c = RescaleConfig::ROTATION_DELTA;
        let xs: Vec<f32> = (-40..=40).map(|i| i as f32 * 0.01).collect();
        let ys: Vec<f32> = xs.iter().map(|x| c.rescale(*x)).collect();
        assert!(ys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_rescale_array_keeps_shape() {
        let x = arr2(&[[0.05f32, -0.05, 0.0], [0.025, -0.025, 1.0]]);
        let y = rescale_action_with_bound(&x, -0.05, 0.05, 0.01, 1.75, -1.75);
        assert_eq!(y.shape(), &[2, 3]);
        assert!((y[[0, 0]] - 1.74).abs() < EPS);
        assert!((y[[0, 1]] + 1.74).abs() < EPS);
        assert!((y[[1, 0]] - 0.875).abs() < EPS);

        let v = RescaleConfig::default().rescale_array(&arr1(&[2.0f32, -2.0]));
        assert_eq!(v, arr1(&[1.0f32, -1.0]));
    }

    #[test]
    fn test_check() {
        assert!(RescaleConfig::WORLD_VECTOR.check().is_ok());
        assert!(RescaleConfig::new(1.0, 1.0).check().is_err());
        assert!(RescaleConfig::new(0.0, 1.0).safety_margin(1.5).check().is_err());
    }
}
