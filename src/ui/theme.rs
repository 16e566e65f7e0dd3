use ratatui::style::Color;

use crate::bubbles::scale::ColorBucket;

/// Named colors for the chrome and the five bubble buckets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub footer_fg: Color,
    pub error_fg: Color,
    pub bucket_cyan: Color,
    pub bucket_red: Color,
    pub bucket_orange: Color,
    pub bucket_yellow: Color,
    pub bucket_green: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header_fg: Color::Indexed(205),
            header_bg: Color::Indexed(235),
            footer_fg: Color::Indexed(241),
            error_fg: Color::Red,
            bucket_cyan: Color::Cyan,
            bucket_red: Color::Red,
            // No named ANSI orange; 208 is the conventional 256-color one.
            bucket_orange: Color::Indexed(208),
            bucket_yellow: Color::Yellow,
            bucket_green: Color::Green,
        }
    }
}

impl Theme {
    pub fn bucket_color(&self, bucket: ColorBucket) -> Color {
        match bucket {
            ColorBucket::Cyan => self.bucket_cyan,
            ColorBucket::Red => self.bucket_red,
            ColorBucket::Orange => self.bucket_orange,
            ColorBucket::Yellow => self.bucket_yellow,
            ColorBucket::Green => self.bucket_green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bucket_has_a_distinct_color() {
        let theme = Theme::default();
        let buckets = [
            ColorBucket::Cyan,
            ColorBucket::Red,
            ColorBucket::Orange,
            ColorBucket::Yellow,
            ColorBucket::Green,
        ];
        for (i, a) in buckets.iter().enumerate() {
            for b in &buckets[i + 1..] {
                assert_ne!(theme.bucket_color(*a), theme.bucket_color(*b));
            }
        }
    }
}
