use crate::color::palette::{Palette, Rgb, NEUTRAL};
use crate::prelude::*;
use anyhow::anyhow;
use itertools::Itertools;

/// Five-point summary of one quiz's value distribution, for the legend.
/// Statistics are the sorted values indexed at `floor(n * p)`; adjacent
/// ranks are never interpolated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarizes a non-empty value distribution. The empty case is a caller
/// precondition violation, not a recoverable state.
pub fn summarize(values: &[f64]) -> Result<DistributionSummary> {
    if values.is_empty() {
        return Err(anyhow!("cannot summarize an empty distribution"));
    }

    let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
    let at = |p: f64| {
        let index = ((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1);
        sorted[index]
    };

    Ok(DistributionSummary {
        min: at(0.0),
        q1: at(0.25),
        median: at(0.5),
        q3: at(0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Maps a rank ratio in [0, 1] onto a palette color. Total: out-of-range
/// and non-finite ratios clamp, malformed stops fall back to neutral.
///
/// Two-stop palettes ease the ratio first, exaggerating differences at the
/// extremes and compressing them near the middle. Multi-stop palettes
/// interpolate linearly inside the containing segment with no easing; the
/// two paths are intentionally asymmetric.
pub fn color_for(ratio: f64, palette: &Palette) -> Rgb {
    let ratio = match ratio.is_finite() {
        true => ratio.clamp(0.0, 1.0),
        false => 0.0,
    };

    match palette {
        Palette::TwoStop { min, max } => {
            let eased = match ratio < 0.5 {
                true => (ratio * 2.0).sqrt() * 0.5,
                false => 0.5 + ((ratio - 0.5) * 2.0).powf(1.5) * 0.5,
            };

            lerp(Rgb::from_hex(min), Rgb::from_hex(max), eased)
        }
        Palette::MultiStop(stops) => {
            let stops: Vec<Rgb> = stops.iter().map(|stop| Rgb::from_hex(stop)).collect();
            match stops.len() {
                0 => NEUTRAL,
                1 => stops[0],
                n => {
                    // Clamp so ratio 1.0 lands inside the last segment.
                    let segments = n - 1;
                    let scaled = ratio * segments as f64;
                    let index = (scaled.floor() as usize).min(segments - 1);
                    lerp(stops[index], stops[index + 1], scaled - index as f64)
                }
            }
        }
    }
}

fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_floor_index_quartiles() {
        let summary = summarize(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert_eq!(
            summary,
            DistributionSummary {
                min: 1.0,
                q1: 2.0,
                median: 3.0,
                q3: 4.0,
                max: 5.0,
            }
        );
    }

    #[test]
    fn summary_of_a_single_value_repeats_it() {
        let summary = summarize(&[42.0]).unwrap();
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.max, 42.0);
    }

    #[test]
    fn summary_rejects_empty_input() {
        assert!(summarize(&[]).is_err());
    }

    #[test]
    fn two_stop_endpoints_are_exact() {
        let palette = Palette::two_stop("#112233", "#aabbcc");
        assert_eq!(color_for(0.0, &palette), Rgb::from_hex("#112233"));
        assert_eq!(color_for(1.0, &palette), Rgb::from_hex("#aabbcc"));
    }

    #[test]
    fn two_stop_eases_away_from_linear() {
        let palette = Palette::two_stop("#000000", "#ffffff");
        // sqrt easing: 0.25 -> sqrt(0.5) * 0.5 ~ 0.354, so 255 * 0.354 = 90
        // where linear interpolation would give 64.
        assert_eq!(color_for(0.25, &palette).r, 90);
    }

    #[test]
    fn multi_stop_midpoint_is_the_middle_stop() {
        let palette = Palette::multi_stop(["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(color_for(0.5, &palette), Rgb::from_hex("#00ff00"));
        assert_eq!(color_for(0.0, &palette), Rgb::from_hex("#ff0000"));
        assert_eq!(color_for(1.0, &palette), Rgb::from_hex("#0000ff"));
    }

    #[test]
    fn multi_stop_does_not_ease() {
        // Same endpoints as the easing test, but through the segmented
        // path: 0.25 scales into the first segment at a local ratio of 0.5.
        let palette = Palette::multi_stop(["#000000", "#808080", "#ffffff"]);
        assert_eq!(color_for(0.25, &palette).r, 64);
    }

    #[test]
    fn malformed_stops_fall_back_to_neutral() {
        let palette = Palette::two_stop("red", "#gggggg");
        assert_eq!(color_for(0.0, &palette), NEUTRAL);
        assert_eq!(color_for(1.0, &palette), NEUTRAL);
        assert_eq!(color_for(0.3, &Palette::MultiStop(Vec::new())), NEUTRAL);
    }

    #[test]
    fn out_of_range_ratios_clamp() {
        let palette = Palette::two_stop("#000000", "#ffffff");
        assert_eq!(color_for(-3.0, &palette), Rgb::from_hex("#000000"));
        assert_eq!(color_for(7.0, &palette), Rgb::from_hex("#ffffff"));
        assert_eq!(color_for(f64::NAN, &palette), Rgb::from_hex("#000000"));
    }
}
