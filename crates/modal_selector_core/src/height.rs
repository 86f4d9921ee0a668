//! Dynamic height estimation from the first rendered option.

/// Two-state measurement machine.
///
/// Starts unmeasured (height `0`). The first non-zero report is recorded and
/// every later report is ignored, so exactly one layout event drives sizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeightEstimator {
    measured: u16,
}

/// Current state of a [`HeightEstimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Unmeasured,
    Measured(u16),
}

impl HeightEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a layout report for the first option.
    ///
    /// Returns `true` only on the transition to measured. A zero height keeps
    /// the estimator unmeasured.
    pub fn report(&mut self, height: u16) -> bool {
        if self.measured != 0 || height == 0 {
            return false;
        }
        self.measured = height;
        tracing::debug!(height, "item height measured");
        true
    }

    pub fn state(&self) -> Measurement {
        match self.measured {
            0 => Measurement::Unmeasured,
            h => Measurement::Measured(h),
        }
    }

    pub fn is_measured(&self) -> bool {
        self.measured != 0
    }

    /// The measured height, `0` while unmeasured.
    pub fn height(&self) -> u16 {
        self.measured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unmeasured() {
        let estimator = HeightEstimator::new();
        assert_eq!(estimator.state(), Measurement::Unmeasured);
        assert_eq!(estimator.height(), 0);
    }

    #[test]
    fn test_first_report_wins() {
        let mut estimator = HeightEstimator::new();
        assert!(estimator.report(3));
        assert!(!estimator.report(5));
        assert!(!estimator.report(1));
        assert_eq!(estimator.state(), Measurement::Measured(3));
    }

    #[test]
    fn test_zero_report_ignored() {
        let mut estimator = HeightEstimator::new();
        assert!(!estimator.report(0));
        assert!(!estimator.is_measured());
        assert!(estimator.report(2));
        assert_eq!(estimator.height(), 2);
    }
}
