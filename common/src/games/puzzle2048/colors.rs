use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TileColors {
    pub background: Rgb,
    pub text: Rgb,
}

pub const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
pub const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);
pub const DEFAULT_TILE: Rgb = Rgb::new(60, 58, 50);

/// Classic palette; any value outside it uses `DEFAULT_TILE`.
pub fn tile_colors(value: u32) -> TileColors {
    let background = match value {
        0 => Rgb::new(205, 193, 180),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => DEFAULT_TILE,
    };
    let text = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    TileColors { background, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_backgrounds() {
        let expected = [
            (0, "#cdc1b4"),
            (2, "#eee4da"),
            (4, "#ede0c8"),
            (8, "#f2b179"),
            (16, "#f59563"),
            (32, "#f67c5f"),
            (64, "#f65e3b"),
            (128, "#edcf72"),
            (256, "#edcc61"),
            (512, "#edc850"),
            (1024, "#edc53f"),
            (2048, "#edc22e"),
        ];
        for (value, hex) in expected {
            assert_eq!(tile_colors(value).background.to_string(), hex, "tile {}", value);
        }
    }

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(tile_colors(4096).background.to_string(), "#3c3a32");
        assert_eq!(tile_colors(9999).background, DEFAULT_TILE);
    }

    #[test]
    fn test_text_colors() {
        assert_eq!(tile_colors(2).text.to_string(), "#776e65");
        assert_eq!(tile_colors(4).text, DARK_TEXT);
        assert_eq!(tile_colors(8).text.to_string(), "#f9f6f2");
        assert_eq!(tile_colors(65536).text, LIGHT_TEXT);
    }
}
