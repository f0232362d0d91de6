use crate::ScrollMetrics;
use crate::options::DEFAULT_THRESHOLD;

/// Decides whether the viewport is close enough to the end of the content to reveal more.
///
/// The sensor is stateless; it only compares [`ScrollMetrics::distance_to_end`] against a
/// threshold. Feeding it metrics is the job of whatever observes the real viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximitySensor {
    pub threshold: u64,
}

impl ProximitySensor {
    pub const fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    /// Returns `true` once the remaining distance is at or below the threshold.
    pub fn is_near_end(&self, metrics: ScrollMetrics) -> bool {
        let distance = metrics.distance_to_end();
        let near = distance <= self.threshold;
        dtrace!(distance, threshold = self.threshold, near, "ProximitySensor::is_near_end");
        near
    }
}

impl Default for ProximitySensor {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
