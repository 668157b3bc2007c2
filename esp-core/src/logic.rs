//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Anzahl der wählbaren Farben
pub const N_COLORS: usize = 4;

/// Feste Farbpalette, Index = `color_index`
pub const PALETTE: [RGB8; N_COLORS] = [
    RGB8 { r: 255, g: 0, b: 0 },   // Rot
    RGB8 { r: 0, g: 128, b: 255 }, // Blau
    RGB8 { r: 255, g: 0, b: 255 }, // Lila
    RGB8 { r: 255, g: 32, b: 0 },  // Orange
];

/// Namen der Palette-Farben (für Logs)
pub const PALETTE_NAMES: [&str; N_COLORS] = ["Rot", "Blau", "Lila", "Orange"];

/// Schaltet zyklisch zur nächsten Palette-Farbe: 0 → 1 → 2 → 3 → 0
///
/// # Beispiele
///
/// ```
/// # use esp_core::{N_COLORS, next_color_index};
/// assert_eq!(next_color_index(0), 1);
/// assert_eq!(next_color_index(N_COLORS - 1), 0);
/// ```
pub fn next_color_index(index: usize) -> usize {
    if index + 1 < N_COLORS { index + 1 } else { 0 }
}

/// Liefert die Palette-Farbe zu einem Index
///
/// Ungültige Indizes können durch `next_color_index` und die Settings-Validierung
/// nicht entstehen; falls doch, wird auf die erste Farbe zurückgefallen.
pub fn palette_color(index: usize) -> RGB8 {
    PALETTE.get(index).copied().unwrap_or(PALETTE[0])
}

/// Name der Palette-Farbe zu einem Index
pub fn palette_name(index: usize) -> &'static str {
    PALETTE_NAMES.get(index).copied().unwrap_or("Unbekannt")
}

/// Skaliert jeden Farbkanal mit `factor / scale` (ganzzahlig abgeschnitten)
///
/// `factor` darf maximal `scale` sein, sonst wird auf 255 begrenzt.
pub fn scale_color(color: RGB8, factor: u16, scale: u16) -> RGB8 {
    let channel = |value: u8| -> u8 {
        if scale == 0 {
            return 0;
        }
        let scaled = u32::from(value) * u32::from(factor) / u32::from(scale);
        scaled.min(255) as u8
    };
    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_color_index_advances() {
        assert_eq!(next_color_index(0), 1);
        assert_eq!(next_color_index(1), 2);
        assert_eq!(next_color_index(2), 3);
    }

    #[test]
    fn test_next_color_index_wraps_at_last_color() {
        assert_eq!(next_color_index(N_COLORS - 1), 0);
    }

    #[test]
    fn test_next_color_index_full_cycle() {
        for start in 0..N_COLORS {
            let mut index = start;
            for _ in 0..N_COLORS {
                index = next_color_index(index);
            }
            assert_eq!(index, start);
        }
    }

    #[test]
    fn test_palette_color_out_of_range_falls_back() {
        assert_eq!(palette_color(2), RGB8 { r: 255, g: 0, b: 255 });
        assert_eq!(palette_color(99), PALETTE[0]);
        assert_eq!(palette_name(99), "Unbekannt");
    }

    #[test]
    fn test_scale_color_truncates() {
        let blue = RGB8 { r: 0, g: 128, b: 255 };
        assert_eq!(scale_color(blue, 256, 256), blue);
        assert_eq!(scale_color(blue, 0, 256), RGB8 { r: 0, g: 0, b: 0 });
        // 255 * 100 / 256 = 99.6 → 99
        assert_eq!(scale_color(blue, 100, 256), RGB8 { r: 0, g: 50, b: 99 });
    }
}
