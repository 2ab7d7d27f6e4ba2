use once_cell::sync::Lazy;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fallback for malformed palette stops.
pub const NEUTRAL: Rgb = Rgb {
    r: 150,
    g: 150,
    b: 150,
};

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Rgb {
    /// Parses a `#rrggbb` stop. Palette data comes from loosely-validated
    /// configuration, so anything malformed clamps to [`NEUTRAL`] instead
    /// of erroring.
    pub fn from_hex(hex: &str) -> Rgb {
        let digits = match hex.strip_prefix('#') {
            Some(digits) if digits.len() == 6 => digits,
            _ => {
                tracing::debug!("Malformed color stop {:?}", hex);
                return NEUTRAL;
            }
        };

        match (
            u8::from_str_radix(&digits[0..2], 16),
            u8::from_str_radix(&digits[2..4], 16),
            u8::from_str_radix(&digits[4..6], 16),
        ) {
            (Ok(r), Ok(g), Ok(b)) => Rgb { r, g, b },
            _ => {
                tracing::debug!("Malformed color stop {:?}", hex);
                NEUTRAL
            }
        }
    }
}

/// Gradient description carried by a quiz for coloring and legend redraws.
/// The two shapes interpolate differently and must stay distinct: two-stop
/// palettes ease the ratio, multi-stop palettes do not.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    TwoStop { min: String, max: String },
    MultiStop(Vec<String>),
}

impl Palette {
    pub fn two_stop(min: &str, max: &str) -> Self {
        Palette::TwoStop {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn multi_stop<I, S>(stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Palette::MultiStop(stops.into_iter().map(|s| s.as_ref().to_string()).collect())
    }

    pub fn stop_count(&self) -> usize {
        match self {
            Palette::TwoStop { .. } => 2,
            Palette::MultiStop(stops) => stops.len(),
        }
    }
}

/// How a quiz's palette is chosen. `Random` exists so repeat players cannot
/// memorize a fixed statistic-to-color association; `CategoryKeyed` trades
/// that away for a stable look per subject area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteStrategy {
    Random,
    CategoryKeyed,
}

/// High-contrast pool drawn from by the `Random` strategy.
pub static PALETTE_POOL: Lazy<Vec<Palette>> = Lazy::new(|| {
    vec![
        Palette::two_stop("#fff7ec", "#7f0000"),
        Palette::two_stop("#f7fbff", "#08306b"),
        Palette::two_stop("#ffffe5", "#004529"),
        Palette::two_stop("#fcfbfd", "#3f007d"),
        Palette::two_stop("#fff5f0", "#67000d"),
        Palette::multi_stop(["#2166ac", "#f7f7f7", "#b2182b"]),
        Palette::multi_stop(["#1a9850", "#ffffbf", "#d73027"]),
        Palette::multi_stop(["#440154", "#21918c", "#fde725"]),
        Palette::multi_stop(["#0c2c84", "#41b6c4", "#ffffcc"]),
        Palette::multi_stop(["#00441b", "#74c476", "#f7fcf5"]),
    ]
});

/// Subject tag -> palette, used by the `CategoryKeyed` strategy. Ordered
/// pairs for a stable, greppable declaration.
pub static CATEGORY_PALETTE_TABLE: Lazy<Vec<(&'static str, Palette)>> = Lazy::new(|| {
    vec![
        ("economics", Palette::two_stop("#ffffe5", "#004529")),
        ("demographics", Palette::two_stop("#f7fbff", "#08306b")),
        ("health", Palette::two_stop("#fff5f0", "#67000d")),
        ("environment", Palette::multi_stop(["#1a9850", "#ffffbf", "#d73027"])),
        ("geography", Palette::multi_stop(["#0c2c84", "#41b6c4", "#ffffcc"])),
        ("society", Palette::two_stop("#fcfbfd", "#3f007d")),
        ("technology", Palette::multi_stop(["#440154", "#21918c", "#fde725"])),
    ]
});

/// Neutral ramp for categories the table does not know.
fn default_palette() -> Palette {
    Palette::two_stop("#f0f0f0", "#252525")
}

/// Selects a palette for one quiz. `cardinality` is the number of distinct
/// colored entities; `Random` avoids palettes with more stops than there
/// are entities to spread across them.
pub fn pick_palette<R: Rng>(
    strategy: PaletteStrategy,
    category: &str,
    cardinality: usize,
    rng: &mut R,
) -> Palette {
    match strategy {
        PaletteStrategy::Random => {
            let candidates: Vec<&Palette> = PALETTE_POOL
                .iter()
                .filter(|palette| palette.stop_count() <= cardinality.max(2))
                .collect();
            let candidates = match candidates.is_empty() {
                true => PALETTE_POOL.iter().collect(),
                false => candidates,
            };

            candidates[rng.gen_range(0..candidates.len())].clone()
        }
        PaletteStrategy::CategoryKeyed => {
            let folded = category.trim().to_lowercase();
            for (tag, palette) in CATEGORY_PALETTE_TABLE.iter() {
                if *tag == folded {
                    return palette.clone();
                }
            }

            tracing::debug!("No palette mapped for category {:?}", category);
            default_palette()
        }
    }
}
