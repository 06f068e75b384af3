//! The fixed target color palette

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A spawn/goal color from the fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorId {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

/// Every spawnable color
pub const PALETTE: [ColorId; 5] = [
    ColorId::Red,
    ColorId::Blue,
    ColorId::Green,
    ColorId::Yellow,
    ColorId::Purple,
];

/// Neutral fallback for identifiers outside the palette
const NEUTRAL_RGB: [u8; 3] = [255, 255, 255];

impl ColorId {
    /// Draw a uniformly random palette color
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        PALETTE[rng.random_range(0..PALETTE.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorId::Red => "red",
            ColorId::Blue => "blue",
            ColorId::Green => "green",
            ColorId::Yellow => "yellow",
            ColorId::Purple => "purple",
        }
    }

    /// Parse a color identifier as used at the display boundary
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(ColorId::Red),
            "blue" => Some(ColorId::Blue),
            "green" => Some(ColorId::Green),
            "yellow" => Some(ColorId::Yellow),
            "purple" => Some(ColorId::Purple),
            _ => None,
        }
    }

    /// RGB used for rendering hints
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorId::Red => [255, 0, 0],
            ColorId::Blue => [0, 0, 255],
            ColorId::Green => [0, 255, 0],
            ColorId::Yellow => [255, 255, 0],
            ColorId::Purple => [128, 0, 128],
        }
    }
}

/// RGB for an arbitrary color identifier
///
/// Unrecognized identifiers are not fatal: they display as neutral white
/// while keeping their name for equality against the goal color.
pub fn display_rgb(name: &str) -> [u8; 3] {
    ColorId::from_name(name)
        .map(ColorId::rgb)
        .unwrap_or(NEUTRAL_RGB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_name_round_trip() {
        for color in PALETTE {
            assert_eq!(ColorId::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_unknown_name_is_neutral() {
        assert_eq!(ColorId::from_name("magenta"), None);
        assert_eq!(display_rgb("magenta"), [255, 255, 255]);
        assert_eq!(display_rgb("purple"), [128, 0, 128]);
    }

    #[test]
    fn test_random_covers_palette() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut seen = [false; PALETTE.len()];
        for _ in 0..200 {
            let color = ColorId::random(&mut rng);
            seen[PALETTE.iter().position(|c| *c == color).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
