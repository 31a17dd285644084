use optima_core::{Function, Interval};

/// One point of a plot sample.
///
/// `y` is `None` where the function could not be evaluated, which leaves a
/// gap in the plotted curve (for example across a pole of `1/x`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

/// One point of a surface sample over a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

/// Evaluates `f` at `count` evenly spaced points spanning `interval`.
///
/// Both endpoints are included when `count >= 2`; a single sample lands on
/// the midpoint. Evaluation failures become gaps rather than errors, since
/// the samples are only used for display.
pub fn sample<F: Function<1>>(f: &F, interval: Interval, count: usize) -> Vec<Sample> {
    positions(interval, count)
        .map(|x| Sample {
            x,
            y: f.call(&[x]).ok().filter(|y| y.is_finite()),
        })
        .collect()
}

/// Evaluates `f` on a `counts[0]` × `counts[1]` grid, row by row in `y`.
pub fn sample_grid<F: Function<2>>(
    f: &F,
    intervals: [Interval; 2],
    counts: [usize; 2],
) -> Vec<GridSample> {
    let xs: Vec<f64> = positions(intervals[0], counts[0]).collect();

    positions(intervals[1], counts[1])
        .flat_map(|y| {
            xs.iter().map(move |&x| GridSample {
                x,
                y,
                z: f.call(&[x, y]).ok().filter(|z| z.is_finite()),
            })
        })
        .collect()
}

// Blends the bounds rather than stepping by the width, which can overflow.
fn positions(interval: Interval, count: usize) -> impl Iterator<Item = f64> {
    let [low, high] = interval.bounds();
    let last = count.saturating_sub(1);

    (0..count).map(move |i| match i {
        _ if count == 1 => interval.midpoint(),
        0 => low,
        i if i == last => high,
        i => {
            let t = i as f64 / last as f64;
            low * (1.0 - t) + high * t
        }
    })
}
