//! # Exponential backoff policy.
//!
//! [`BackoffPolicy`] is the configuration of the default retry schedule:
//! - [`BackoffPolicy::first`] the initial interval;
//! - [`BackoffPolicy::factor`] the multiplicative growth factor;
//! - [`BackoffPolicy::max`] the cap on a single interval;
//! - [`BackoffPolicy::jitter`] randomization applied to each interval;
//! - [`BackoffPolicy::max_times`] the cap on the number of retries;
//! - [`BackoffPolicy::max_elapsed`] the overall budget after which retrying stops.
//!
//! The policy is plain data. Interval arithmetic belongs to [`backon`]: the
//! policy turns into an [`ExponentialBuilder`] and builds a fresh schedule for
//! every call to [`retry_with_backoff`](crate::retry_with_backoff).
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use errclass::{BackoffBuilder, BackoffPolicy};
//!
//! let policy = BackoffPolicy {
//!     first: Duration::from_millis(100),
//!     max: Duration::from_secs(1),
//!     factor: 2.0,
//!     jitter: false,
//!     max_times: Some(6),
//!     max_elapsed: None,
//! };
//!
//! let got: Vec<_> = policy.build().collect();
//! let want = [100, 200, 400, 800, 1000, 1000].map(Duration::from_millis);
//! assert_eq!(got, want);
//! ```

use std::time::Duration;

use backon::{BackoffBuilder, ExponentialBackoff, ExponentialBuilder};

/// Exponential retry schedule configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackoffPolicy {
    /// Interval before the first retry.
    pub first: Duration,
    /// Cap for a single interval (before jitter).
    pub max: Duration,
    /// Multiplicative growth factor (`>= 1.0` recommended).
    pub factor: f32,
    /// Add a random extra of up to one interval to every interval.
    pub jitter: bool,
    /// Hand out at most this many intervals.
    ///
    /// `None` leaves the limit to [`max_elapsed`](Self::max_elapsed).
    pub max_times: Option<usize>,
    /// Stop once the intervals handed out would add up to more than this.
    ///
    /// `None` retries for as long as the operation keeps failing retryably.
    pub max_elapsed: Option<Duration>,
}

impl Default for BackoffPolicy {
    /// Returns the classic exponential schedule:
    /// - `first = 500ms`;
    /// - `factor = 1.5`;
    /// - `max = 60s`;
    /// - `jitter = true`;
    /// - `max_times = None`;
    /// - `max_elapsed = 15min`.
    fn default() -> Self {
        Self {
            first: Duration::from_millis(500),
            max: Duration::from_secs(60),
            factor: 1.5,
            jitter: true,
            max_times: None,
            max_elapsed: Some(Duration::from_secs(15 * 60)),
        }
    }
}

impl BackoffPolicy {
    /// Returns the [`ExponentialBuilder`] this policy describes.
    pub fn builder(&self) -> ExponentialBuilder {
        let mut builder = ExponentialBuilder::default()
            .with_min_delay(self.first)
            .with_max_delay(self.max)
            .with_factor(self.factor)
            .with_total_delay(self.max_elapsed);

        builder = match self.max_times {
            Some(n) => builder.with_max_times(n),
            None => builder.without_max_times(),
        };
        if self.jitter {
            builder = builder.with_jitter();
        }
        builder
    }
}

impl BackoffBuilder for BackoffPolicy {
    type Backoff = ExponentialBackoff;

    fn build(self) -> Self::Backoff {
        self.builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(first_ms: u64, max: Duration, factor: f32) -> BackoffPolicy {
        BackoffPolicy {
            first: Duration::from_millis(first_ms),
            max,
            factor,
            jitter: false,
            max_times: Some(10),
            max_elapsed: None,
        }
    }

    #[test]
    fn test_exponential_growth_no_jitter() {
        let got: Vec<_> = exact(100, Duration::from_secs(30), 2.0).build().take(4).collect();
        assert_eq!(got, [100, 200, 400, 800].map(Duration::from_millis));
    }

    #[test]
    fn test_constant_factor() {
        let got: Vec<_> = exact(500, Duration::from_secs(30), 1.0).build().collect();
        assert_eq!(got.len(), 10);
        assert!(got.iter().all(|d| *d == Duration::from_millis(500)), "{got:?}");
    }

    #[test]
    fn test_clamped_to_max() {
        let got: Vec<_> = exact(100, Duration::from_secs(1), 2.0).build().collect();
        assert_eq!(got.last(), Some(&Duration::from_secs(1)));
        assert!(got.iter().all(|d| *d <= Duration::from_secs(1)), "{got:?}");
    }

    #[test]
    fn test_uncapped_interval_saturates() {
        let policy = BackoffPolicy {
            first: Duration::from_secs(1),
            max: Duration::MAX,
            factor: 2.0,
            jitter: false,
            max_times: Some(100),
            max_elapsed: None,
        };

        let got: Vec<_> = policy.build().collect();
        assert_eq!(got.len(), 100);
        assert_eq!(got[0], Duration::from_secs(1));
        assert!(got.windows(2).all(|w| w[0] <= w[1]), "{got:?}");
    }

    #[test]
    fn test_max_times_limits_intervals() {
        let mut policy = exact(10, Duration::from_secs(1), 2.0);
        policy.max_times = Some(3);
        assert_eq!(policy.build().count(), 3);

        policy.max_times = Some(0);
        assert_eq!(policy.build().next(), None);
    }

    #[test]
    fn test_stops_once_budget_is_spent() {
        let mut policy = exact(100, Duration::from_secs(1), 2.0);
        policy.max_elapsed = Some(Duration::from_secs(1));

        // 100 + 200 + 400 fits, another 800 would not.
        let got: Vec<_> = policy.build().collect();
        assert_eq!(got, [100, 200, 400].map(Duration::from_millis));
    }

    #[test]
    fn test_every_build_starts_over() {
        let policy = exact(100, Duration::from_secs(1), 2.0);
        let mut first = policy.build();
        first.next();
        first.next();
        assert_eq!(policy.build().next(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_default_policy_jitter_band() {
        for _ in 0..100 {
            let d = BackoffPolicy::default().build().next();
            let d = d.unwrap_or_default();
            assert!(d >= Duration::from_millis(500), "{d:?}");
            assert!(d <= Duration::from_secs(1), "{d:?}");
        }
    }
}
