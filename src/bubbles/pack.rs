use crate::system::process::{ProcessSample, SortMode, metric_value};

use super::bubble::Bubble;
use super::scale::{color_bucket, radius};

/// Spiral search tuning. Coarser steps place faster but pack looser.
const DISTANCE_STEP: f64 = 2.0;
const ANGLE_STEP: f64 = 0.3;
/// Minimum clearance between two bubble edges, in cells. Also absorbs the
/// sub-cell error introduced by rounding candidate centers.
const EDGE_GAP: f64 = 1.0;
/// Rows reserved at the canvas top and bottom for header/footer chrome.
const TOP_INSET: f64 = 3.0;
const BOTTOM_INSET: f64 = 2.0;

/// Lays out the top `min(max_bubbles, len)` of an already rank-sorted
/// batch as non-overlapping circles on a `width` x `height` canvas.
///
/// The first bubble sits at the canvas center; each following bubble takes
/// the first collision-free, in-bounds position found on an expanding
/// spiral around it. If some bubble cannot be placed before the spiral is
/// exhausted, it and everything ranked after it are dropped: fewer
/// well-placed bubbles beat overlapping ones.
///
/// Radii and color buckets scale against the min/max of the truncated
/// subset only, so the visuals are relative to what is on screen.
pub fn pack(
    samples: &[ProcessSample],
    mode: SortMode,
    max_bubbles: usize,
    width: u16,
    height: u16,
) -> Vec<Bubble<'_>> {
    let count = max_bubbles.min(samples.len());
    if count == 0 {
        return Vec::new();
    }
    let top = &samples[..count];

    let values: Vec<f64> = top.iter().map(|s| metric_value(s, mode)).collect();
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let center_x = (width / 2) as i32;
    let center_y = (height / 2) as i32;

    let mut bubbles: Vec<Bubble<'_>> = Vec::with_capacity(count);
    for (sample, &value) in top.iter().zip(&values) {
        let r = radius(value, min_value, max_value, width, height);
        let bucket = color_bucket(value, min_value, max_value);

        if bubbles.is_empty() {
            bubbles.push(Bubble {
                sample,
                value,
                radius: r,
                x: center_x,
                y: center_y,
                bucket,
            });
            continue;
        }

        match find_position(&bubbles, r, center_x, center_y, width, height) {
            Some((x, y)) => bubbles.push(Bubble {
                sample,
                value,
                radius: r,
                x,
                y,
                bucket,
            }),
            // Fail-soft: drop this bubble and everything ranked below it.
            None => break,
        }
    }

    bubbles
}

/// Expanding concentric spiral around the canvas center. Returns the first
/// candidate cell that clears every placed bubble and the canvas insets.
fn find_position(
    placed: &[Bubble<'_>],
    r: f64,
    center_x: i32,
    center_y: i32,
    width: u16,
    height: u16,
) -> Option<(i32, i32)> {
    let mut distance = r + placed[0].radius;
    while distance < width as f64 * 2.0 {
        let mut angle = 0.0;
        while angle < std::f64::consts::TAU {
            let x = (center_x as f64 + distance * angle.cos()).round() as i32;
            let y = (center_y as f64 + distance * angle.sin()).round() as i32;

            if fits(placed, r, x, y, width, height) {
                return Some((x, y));
            }
            angle += ANGLE_STEP;
        }
        distance += DISTANCE_STEP;
    }
    None
}

fn fits(placed: &[Bubble<'_>], r: f64, x: i32, y: i32, width: u16, height: u16) -> bool {
    let (xf, yf) = (x as f64, y as f64);
    if xf - r < 0.0 || xf + r >= width as f64 {
        return false;
    }
    if yf - r < TOP_INSET || yf + r >= height as f64 - BOTTOM_INSET {
        return false;
    }

    placed.iter().all(|other| {
        let dx = xf - other.x as f64;
        let dy = yf - other.y as f64;
        dx.hypot(dy) >= r + other.radius + EDGE_GAP
    })
}
