use std::fmt;

/// Where a solver ended up: a scalar for one-variable methods, a pair for
/// coordinate descent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(untagged))]
pub enum Location {
    Scalar(f64),
    Pair([f64; 2]),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "x = {x}"),
            Self::Pair([x, y]) => write!(f, "(x, y) = ({x}, {y})"),
        }
    }
}

impl From<[f64; 1]> for Location {
    fn from([x]: [f64; 1]) -> Self {
        Self::Scalar(x)
    }
}

impl From<[f64; 2]> for Location {
    fn from(pair: [f64; 2]) -> Self {
        Self::Pair(pair)
    }
}

/// What kind of point a solve call found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Classification {
    Root,
    Minimum,
    Maximum,
    /// Coordinate descent's two line searches disagreed.
    Indeterminate,
}

/// Sign of the second derivative at a Newton root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Curvature {
    Minimum,
    Maximum,
    Inconclusive,
}

/// Best-effort side information. Never load-bearing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde-derive",
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Advisory {
    /// The worse of the two final golden-section probes: a rough hint at the
    /// opposite extremum's value, not a searched result.
    OppositeEstimate { value: f64 },

    /// The curvature at a Newton root. When the formula is a derivative `f'`,
    /// this tells whether the root is a minimum or maximum of `f`.
    Curvature { curvature: Curvature },
}

/// A point visited during the solve, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Probe {
    pub location: Location,
    /// `None` where the formula could not be evaluated.
    pub value: Option<f64>,
}

/// The result of a successful solve call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub location: Location,

    /// The formula's value at `location`.
    pub value: f64,

    pub classification: Classification,

    pub iterations: usize,

    #[cfg_attr(
        feature = "serde-derive",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub advisory: Option<Advisory>,

    /// The points the solver probed, in order, up to the configured limit.
    #[cfg_attr(feature = "serde-derive", serde(default))]
    pub path: Vec<Probe>,
}

impl Outcome {
    /// Returns the scalar location, or `None` for a pair.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        match self.location {
            Location::Scalar(x) => Some(x),
            Location::Pair(_) => None,
        }
    }

    /// Returns the pair location, or `None` for a scalar.
    #[must_use]
    pub fn pair(&self) -> Option<[f64; 2]> {
        match self.location {
            Location::Scalar(_) => None,
            Location::Pair(pair) => Some(pair),
        }
    }
}

/// A definite integral estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Integral {
    pub value: f64,
    /// Subintervals used, after Simpson's rounding to an even count.
    pub subintervals: usize,
    pub evaluations: usize,
}
