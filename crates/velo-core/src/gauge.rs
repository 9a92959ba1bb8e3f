//! Bounded gauge value model.
//!
//! Owns a single integer in a fixed `[min, max]` range. Every mutation
//! clamps, so the stored value can never leave the range and no operation
//! here can fail. Presentation (arc fill, numeric label) is the owning
//! screen's job; it reads [`GaugeModel::value`] back after each mutation.

/// Clamped integer gauge state with a fixed range.
#[derive(Debug, Clone, Copy)]
pub struct GaugeModel {
    min: i32,
    max: i32,
    value: i32,
}

impl GaugeModel {
    /// Create a gauge over `[min, max]` with the given starting value,
    /// clamped into range. Requires `min < max`.
    pub fn new(min: i32, max: i32, initial: i32) -> Self {
        debug_assert!(min < max);
        Self {
            min,
            max,
            value: initial.clamp(min, max),
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Store `v` clamped into `[min, max]` and return the stored value.
    pub fn set_value(&mut self, v: i32) -> i32 {
        self.value = v.clamp(self.min, self.max);
        self.value
    }

    /// Raise the value by `step`, clamped at the upper bound.
    pub fn increment(&mut self, step: i32) -> i32 {
        self.set_value(self.value.saturating_add(step))
    }

    /// Lower the value by `step`, clamped at the lower bound.
    pub fn decrement(&mut self, step: i32) -> i32 {
        self.set_value(self.value.saturating_sub(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GAUGE_MAX, GAUGE_MIN, GAUGE_STEP};

    #[test]
    fn test_initial_value_is_clamped() {
        let gauge = GaugeModel::new(-40, 140, 500);
        assert_eq!(gauge.value(), 140);

        let gauge = GaugeModel::new(-40, 140, -500);
        assert_eq!(gauge.value(), -40);
    }

    #[test]
    fn test_set_value_clamps_both_ends() {
        let mut gauge = GaugeModel::new(-40, 140, 0);
        assert_eq!(gauge.set_value(200), 140);
        assert_eq!(gauge.set_value(-100), -40);
        assert_eq!(gauge.set_value(55), 55);
    }

    #[test]
    fn test_clamping_is_idempotent() {
        // set_value(set_value(v)) stores the same value as set_value(v)
        for v in [-1000, -41, -40, 0, 139, 140, 141, 1000, i32::MAX, i32::MIN] {
            let mut gauge = GaugeModel::new(GAUGE_MIN, GAUGE_MAX, 0);
            let once = gauge.set_value(v);
            let twice = gauge.set_value(once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_increment_clamps_at_max() {
        let mut gauge = GaugeModel::new(-40, 140, 135);
        assert_eq!(gauge.increment(10), 140);
        assert_eq!(gauge.increment(10), 140);
    }

    #[test]
    fn test_decrement_clamps_at_min() {
        let mut gauge = GaugeModel::new(-40, 140, -35);
        assert_eq!(gauge.decrement(10), -40);
        assert_eq!(gauge.decrement(10), -40);
    }

    #[test]
    fn test_value_never_leaves_range() {
        let mut gauge = GaugeModel::new(GAUGE_MIN, GAUGE_MAX, 0);
        // Alternating walk that repeatedly slams into both bounds
        for i in 0..200 {
            if i % 3 == 0 {
                gauge.decrement(GAUGE_STEP * 7);
            } else {
                gauge.increment(GAUGE_STEP);
            }
            assert!(gauge.value() >= GAUGE_MIN && gauge.value() <= GAUGE_MAX);
        }
    }

    #[test]
    fn test_step_arithmetic_saturates() {
        let mut gauge = GaugeModel::new(GAUGE_MIN, GAUGE_MAX, GAUGE_MAX);
        assert_eq!(gauge.increment(i32::MAX), GAUGE_MAX);
        assert_eq!(gauge.decrement(i32::MAX), GAUGE_MIN);
    }
}
