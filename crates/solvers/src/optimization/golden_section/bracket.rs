use optima_core::Interval;

/// 1/φ, the fraction of the window kept by each step.
const KEEP: f64 = 0.618_033_988_749_895;

/// Position at fraction `t` of the way from `low` to `high`.
///
/// Blends the bounds instead of scaling the width, so it stays finite for
/// any pair of finite bounds.
fn section(low: f64, high: f64, t: f64) -> f64 {
    low * (1.0 - t) + high * t
}

/// The shrinking window of a golden-section search.
///
/// `inner_low` and `inner_high` sit at fractions `1 - 1/φ` and `1/φ` of
/// `[low, high]`. Keeping either outer section leaves one of them at the
/// right place for the next step, so each step evaluates one new point.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) low: f64,
    pub(super) high: f64,
    pub(super) inner_low: f64,
    pub(super) inner_high: f64,
}

impl GoldenBracket {
    pub(super) fn new(interval: Interval) -> Self {
        let [low, high] = interval.bounds();
        Self {
            low,
            high,
            inner_low: section(low, high, 1.0 - KEEP),
            inner_high: section(low, high, KEEP),
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.high - self.low
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.low + 0.5 * self.high
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Narrows to `[low, inner_high]`; `inner_low` moves up to `inner_high`.
    pub(super) fn keep_lower(&mut self) {
        let next = self.next_inner_low();
        self.high = self.inner_high;
        self.inner_high = self.inner_low;
        self.inner_low = next;
    }

    /// Narrows to `[inner_low, high]`; `inner_high` moves down to `inner_low`.
    pub(super) fn keep_upper(&mut self) {
        let next = self.next_inner_high();
        self.low = self.inner_low;
        self.inner_low = self.inner_high;
        self.inner_high = next;
    }

    /// The point [`GoldenBracket::keep_lower`] will add.
    pub(super) fn next_inner_low(&self) -> f64 {
        section(self.low, self.inner_high, 1.0 - KEEP)
    }

    /// The point [`GoldenBracket::keep_upper`] will add.
    pub(super) fn next_inner_high(&self) -> f64 {
        section(self.inner_low, self.high, KEEP)
    }
}
