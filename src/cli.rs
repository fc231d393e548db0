use clap::Parser;
use hexagon_art::{
    CANVAS_SIZE,
    coloring::ColoringMode,
    shell::Preset,
};

/// Draws an N x N grid of hexagons colored from two base colors.
/// Settings that are not given on the command line are asked for on the console.
#[derive(Debug, Parser)]
#[command(name = "hexagon_art", version)]
pub struct Args {
    /// Number of hexagons along each side of the grid (4-20).
    #[arg(short = 'n', long = "size")]
    pub size: Option<usize>,

    /// First color, a CSS color name or a hex code like #FF8800.
    #[arg(long = "first")]
    pub first: Option<String>,

    /// Second color, a CSS color name or a hex code like #FF8800.
    #[arg(long = "second")]
    pub second: Option<String>,

    /// Coloring mode: 1/classic, 2/vertical, 3/horizontal or 4/random.
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<ColoringMode>,

    /// Width and height of the canvas in pixels.
    #[arg(long = "canvas-size", default_value_t = CANVAS_SIZE)]
    pub canvas_size: u32,

    /// Seed for the random mode, without it every run differs.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Print the hexagon centers before drawing.
    #[arg(long = "print-centers")]
    pub print_centers: bool,

    /// Print the draw instructions instead of opening a window.
    #[arg(long = "no-window")]
    pub no_window: bool,
}

impl Args {
    /// The answers that skip their prompts
    pub fn preset(&self) -> Preset {
        Preset {
            n: self.size,
            first: self.first.clone(),
            second: self.second.clone(),
            mode: self.mode,
        }
    }
}
