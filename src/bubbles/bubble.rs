use crate::system::process::ProcessSample;

use super::scale::ColorBucket;

/// One positioned circle, derived from a sample for a single render pass.
/// Layout is stateless across frames: bubbles are rebuilt from scratch on
/// every render.
#[derive(Debug, Clone)]
pub struct Bubble<'a> {
    pub sample: &'a ProcessSample,
    pub value: f64,
    pub radius: f64,
    pub x: i32,
    pub y: i32,
    pub bucket: ColorBucket,
}

impl Bubble<'_> {
    pub fn center_distance(&self, other: &Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }
}
