use std::{fmt, str::FromStr};
use rand::Rng;
use thiserror::Error;
use super::{
    color::Color,
    types::Cell,
};

/// The two base colors every mode chooses or blends between
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// The first color, used at even parity and at the start of gradients
    first: Color,
    /// The second color, used at odd parity and at the end of gradients
    second: Color,
}

impl Palette {
    /// Creates a new palette
    ///
    /// # Parameters
    ///
    /// first: The first color
    ///
    /// second: The second color
    pub const fn new(first: Color, second: Color) -> Self {
        Self {
            first,
            second,
        }
    }

    /// Retrieves the first color
    pub fn get_first(&self) -> Color {
        self.first
    }

    /// Retrieves the second color
    pub fn get_second(&self) -> Color {
        self.second
    }
}

/// Chooses the fill color of a single hexagon
pub trait ColoringStrategy {
    /// Retrieves the fill color of a hexagon
    ///
    /// # Parameters
    ///
    /// cell: The position of the hexagon in the grid
    ///
    /// n: The number of hexagons along one side of the grid
    ///
    /// palette: The base colors
    ///
    /// rng: The random source, only used by strategies that need one
    fn fill<R: Rng>(&self, cell: &Cell, n: usize, palette: &Palette, rng: &mut R) -> Color;
}

/// A checkerboard on the grid indices
#[derive(Clone, Copy, Debug, Default)]
pub struct Classic;

impl ColoringStrategy for Classic {
    fn fill<R: Rng>(&self, cell: &Cell, _n: usize, palette: &Palette, _rng: &mut R) -> Color {
        if (cell.get_row() + cell.get_col()) % 2 == 0 {
            palette.first
        } else {
            palette.second
        }
    }
}

/// A gradient from the first color in the bottom row to the second color in the top row
#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalGradient;

impl ColoringStrategy for VerticalGradient {
    fn fill<R: Rng>(&self, cell: &Cell, n: usize, palette: &Palette, _rng: &mut R) -> Color {
        palette.first.lerp(&palette.second, progress(cell.get_row(), n))
    }
}

/// A gradient from the first color in the left column to the second color in the right column
#[derive(Clone, Copy, Debug, Default)]
pub struct HorizontalGradient;

impl ColoringStrategy for HorizontalGradient {
    fn fill<R: Rng>(&self, cell: &Cell, n: usize, palette: &Palette, _rng: &mut R) -> Color {
        palette.first.lerp(&palette.second, progress(cell.get_col(), n))
    }
}

/// An independent coin flip between the two colors for every hexagon
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomChoice;

impl ColoringStrategy for RandomChoice {
    fn fill<R: Rng>(&self, _cell: &Cell, _n: usize, palette: &Palette, rng: &mut R) -> Color {
        if rng.gen_bool(0.5) {
            palette.first
        } else {
            palette.second
        }
    }
}

/// How far along a gradient an index is, a single row or column stays at the start
fn progress(index: usize, n: usize) -> f64 {
    if n > 1 {
        index as f64 / (n - 1) as f64
    } else {
        0.0
    }
}

/// The available coloring modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColoringMode {
    Classic,
    VerticalGradient,
    HorizontalGradient,
    Random,
}

impl ColoringMode {
    /// All modes in menu order
    pub const ALL: [ColoringMode; 4] = [
        ColoringMode::Classic,
        ColoringMode::VerticalGradient,
        ColoringMode::HorizontalGradient,
        ColoringMode::Random,
    ];

    /// Finds a mode from its number in the menu, starting at 1
    ///
    /// # Parameters
    ///
    /// number: The menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    /// The number of the mode in the menu
    pub fn menu_number(&self) -> usize {
        match self {
            Self::Classic => 1,
            Self::VerticalGradient => 2,
            Self::HorizontalGradient => 3,
            Self::Random => 4,
        }
    }

    /// A human readable name of the mode
    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::VerticalGradient => "Vertical gradient",
            Self::HorizontalGradient => "Horizontal gradient",
            Self::Random => "Random",
        }
    }

    /// Retrieves the fill color of a hexagon with the strategy of this mode
    ///
    /// # Parameters
    ///
    /// cell: The position of the hexagon
    ///
    /// n: The number of hexagons along one side of the grid
    ///
    /// palette: The base colors
    ///
    /// rng: The random source for the random mode
    pub fn fill<R: Rng>(&self, cell: &Cell, n: usize, palette: &Palette, rng: &mut R) -> Color {
        match self {
            Self::Classic => Classic.fill(cell, n, palette, rng),
            Self::VerticalGradient => VerticalGradient.fill(cell, n, palette, rng),
            Self::HorizontalGradient => HorizontalGradient.fill(cell, n, palette, rng),
            Self::Random => RandomChoice.fill(cell, n, palette, rng),
        }
    }
}

impl fmt::Display for ColoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColoringMode {
    type Err = ParseModeError;

    /// Accepts the menu number or the name of the mode
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return Self::from_menu_number(number).ok_or_else(|| ParseModeError(s.to_string()));
        }

        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "classic" => Ok(Self::Classic),
            "vertical" | "verticalgradient" => Ok(Self::VerticalGradient),
            "horizontal" | "horizontalgradient" => Ok(Self::HorizontalGradient),
            "random" => Ok(Self::Random),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// The error for when a coloring mode could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown coloring mode: {:?}", .0)]
pub struct ParseModeError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const RED: Color = Color::new(0xFF, 0x00, 0x00);
    const BLUE: Color = Color::new(0x00, 0x00, 0xFF);
    const PALETTE: Palette = Palette::new(RED, BLUE);

    fn fill(mode: ColoringMode, row: usize, col: usize, n: usize) -> Color {
        let mut rng = StdRng::seed_from_u64(7);
        mode.fill(&Cell::new(row, col), n, &PALETTE, &mut rng)
    }

    #[test]
    fn classic_is_a_checkerboard() {
        assert_eq!(fill(ColoringMode::Classic, 0, 0, 4), RED);
        assert_eq!(fill(ColoringMode::Classic, 1, 1, 4), RED);
        assert_eq!(fill(ColoringMode::Classic, 0, 1, 4), BLUE);
        assert_eq!(fill(ColoringMode::Classic, 1, 0, 4), BLUE);
    }

    #[test]
    fn vertical_gradient_follows_rows() {
        let n = 5;
        assert_eq!(fill(ColoringMode::VerticalGradient, 0, 3, n), RED);
        assert_eq!(fill(ColoringMode::VerticalGradient, 4, 0, n), BLUE);
        assert_eq!(fill(ColoringMode::VerticalGradient, 2, 1, n), RED.lerp(&BLUE, 0.5));
        for col in 0..n {
            assert_eq!(fill(ColoringMode::VerticalGradient, 3, col, n), fill(ColoringMode::VerticalGradient, 3, 0, n));
        }
    }

    #[test]
    fn horizontal_gradient_follows_columns() {
        let n = 5;
        assert_eq!(fill(ColoringMode::HorizontalGradient, 4, 0, n), RED);
        assert_eq!(fill(ColoringMode::HorizontalGradient, 0, 4, n), BLUE);
        assert_eq!(fill(ColoringMode::HorizontalGradient, 3, 2, n), Color::new(0x80, 0x00, 0x80));
    }

    #[test]
    fn single_row_gradient_stays_at_start() {
        assert_eq!(progress(0, 1), 0.0);
        assert_eq!(fill(ColoringMode::VerticalGradient, 0, 0, 1), RED);
    }

    #[test]
    fn random_only_uses_palette_colors() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors: Vec<Color> = (0..200)
            .map(|index| ColoringMode::Random.fill(&Cell::from_index(index, 10), 10, &PALETTE, &mut rng))
            .collect();
        assert!(colors.iter().all(|color| *color == RED || *color == BLUE));
        assert!(colors.contains(&RED));
        assert!(colors.contains(&BLUE));
    }

    #[test]
    fn modes_parse_from_menu_numbers_and_names() {
        assert_eq!("1".parse::<ColoringMode>(), Ok(ColoringMode::Classic));
        assert_eq!(" 4 ".parse::<ColoringMode>(), Ok(ColoringMode::Random));
        assert_eq!("vertical-gradient".parse::<ColoringMode>(), Ok(ColoringMode::VerticalGradient));
        assert_eq!("Horizontal".parse::<ColoringMode>(), Ok(ColoringMode::HorizontalGradient));
        assert!("0".parse::<ColoringMode>().is_err());
        assert!("5".parse::<ColoringMode>().is_err());
        assert!("spiral".parse::<ColoringMode>().is_err());
    }

    #[test]
    fn menu_numbers_round_trip() {
        for mode in ColoringMode::ALL {
            assert_eq!(ColoringMode::from_menu_number(mode.menu_number()), Some(mode));
        }
    }
}
