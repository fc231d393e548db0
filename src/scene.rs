use rand::Rng;
use super::{
    color::Color,
    coloring::{ColoringMode, Palette},
    layout::Layout,
    types::Point,
};

/// Everything needed to draw one hexagon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstruction {
    /// The center of the hexagon in canvas coordinates
    pub center: Point,
    /// The fill color
    pub fill: Color,
    /// The side length
    pub side: f64,
}

/// Computes the draw instruction of every hexagon in row-major order.
/// All coloring happens here, before anything is drawn.
///
/// # Parameters
///
/// layout: The geometry of the grid
///
/// palette: The two base colors
///
/// mode: The coloring mode
///
/// rng: The random source for the random mode
pub fn compose<R: Rng>(layout: &Layout, palette: &Palette, mode: ColoringMode, rng: &mut R) -> Vec<DrawInstruction> {
    let n = layout.get_spec().get_n();
    let side = layout.get_side();

    let instructions: Vec<DrawInstruction> = layout
        .cells()
        .map(|(cell, center)| DrawInstruction {
            center,
            fill: mode.fill(&cell, n, palette, rng),
            side,
        })
        .collect();

    log::debug!("Composed {} hexagons with side {:.3} in {} mode", instructions.len(), side, mode);

    instructions
}
