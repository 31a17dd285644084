use std::time::Duration;

/// Tolerances and iteration caps for the solve entry points.
///
/// Every field has a default, so a partial configuration file only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default, deny_unknown_fields))]
pub struct Settings {
    /// Convergence tolerance shared by all methods.
    pub tolerance: f64,

    pub bisection_max_iters: usize,
    pub golden_max_iters: usize,
    pub newton_max_iters: usize,

    /// Outer iteration cap for coordinate descent.
    pub descent_max_iters: usize,

    /// Narrowing steps allowed per coordinate descent line search.
    pub line_max_iters: usize,

    /// The window each coordinate descent line search covers.
    pub window: [f64; 2],

    /// Maximum number of probes recorded in [`Outcome::path`](crate::Outcome::path).
    pub path_limit: usize,

    /// Wall-clock budget per solve, in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            bisection_max_iters: 200,
            golden_max_iters: 200,
            newton_max_iters: 100,
            descent_max_iters: 100,
            line_max_iters: 500,
            window: [-10.0, 10.0],
            path_limit: 1000,
            time_limit_ms: None,
        }
    }
}

impl Settings {
    /// Returns a copy with a different tolerance.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    pub(crate) fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}
