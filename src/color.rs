use std::fmt;

use palette::Srgb;
use serde::{Serialize, Serializer};

use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// CSS colour
// ---------------------------------------------------------------------------

/// An sRGB colour with opacity, written out as `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub rgb: Srgb<u8>,
    pub alpha: f32,
}

impl CssColor {
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        CssColor {
            rgb: Srgb::new(red, green, blue),
            alpha,
        }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.red, self.rgb.green, self.rgb.blue, self.alpha
        )
    }
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Fill and border colour for one series slot. The two are configured
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub fill: CssColor,
    pub stroke: CssColor,
}

impl PaletteEntry {
    /// Half-transparent fill with an opaque border of the same hue.
    pub const fn translucent(red: u8, green: u8, blue: u8) -> Self {
        PaletteEntry {
            fill: CssColor::rgba(red, green, blue, 0.5),
            stroke: CssColor::rgba(red, green, blue, 1.0),
        }
    }
}

pub const TEAL: PaletteEntry = PaletteEntry::translucent(75, 192, 192);
pub const BLUE: PaletteEntry = PaletteEntry::translucent(54, 162, 235);
pub const YELLOW: PaletteEntry = PaletteEntry::translucent(255, 206, 86);
pub const RED: PaletteEntry = PaletteEntry::translucent(255, 99, 132);

/// Base colours in assignment order.
pub const BASE_COLORS: [PaletteEntry; 4] = [TEAL, BLUE, YELLOW, RED];

/// An ordered, non-empty list of colours assigned to values by position.
///
/// Position `i` gets entry `i % len`, so a short palette repeats rather than
/// inventing colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(DashboardError::EmptyPalette);
        }
        Ok(Palette { entries })
    }

    /// The first `size` base colours (1..=4, clamped).
    pub fn standard(size: usize) -> Self {
        let size = size.clamp(1, BASE_COLORS.len());
        Palette {
            entries: BASE_COLORS[..size].to_vec(),
        }
    }

    /// Four entries, for status-style data.
    pub fn status() -> Self {
        Self::standard(4)
    }

    /// Two entries, for binary-type data.
    pub fn binary() -> Self {
        Self::standard(2)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> PaletteEntry {
        self.entries[index % self.entries.len()]
    }

    /// Fill and stroke lists for `n` values.
    pub fn assign(&self, n: usize) -> (Vec<CssColor>, Vec<CssColor>) {
        (0..n).map(|i| self.entry(i)).map(|e| (e.fill, e.stroke)).unzip()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::status()
    }
}
