/// Discrete color class assigned per render cycle, relative to the
/// currently displayed batch. Exactly these five buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    Cyan,
    Red,
    Orange,
    Yellow,
    Green,
}

const MIN_RADIUS: f64 = 2.0;
const TIE_RADIUS: f64 = 3.0;

/// Maps a metric value into a radius, scaled to the batch min/max and the
/// available canvas. When every displayed value is identical (including a
/// single bubble) all ties collapse to a fixed visible radius.
pub fn radius(value: f64, min_value: f64, max_value: f64, width: u16, height: u16) -> f64 {
    if max_value == min_value {
        return TIE_RADIUS;
    }

    let normalized = (value - min_value) / (max_value - min_value);
    let max_radius = (width as f64 / 8.0).min(height as f64 / 6.0);

    // sqrt compresses the upper range so the largest bubble does not
    // drown out the rest.
    MIN_RADIUS + normalized.sqrt() * (max_radius - MIN_RADIUS)
}

/// Percentile-within-batch coloring: thresholds on the normalized value,
/// not on absolute magnitudes.
pub fn color_bucket(value: f64, min_value: f64, max_value: f64) -> ColorBucket {
    if max_value == min_value {
        return ColorBucket::Cyan;
    }

    let normalized = (value - min_value) / (max_value - min_value);
    if normalized > 0.75 {
        ColorBucket::Red
    } else if normalized > 0.5 {
        ColorBucket::Orange
    } else if normalized > 0.25 {
        ColorBucket::Yellow
    } else {
        ColorBucket::Green
    }
}
