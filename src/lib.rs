pub mod types;
pub mod names;
pub mod color;
pub mod layout;
pub mod coloring;
pub mod scene;
pub mod mesh;
pub mod render;
pub mod gpu_canvas;
pub mod application;
pub mod translate;
pub mod messages;
pub mod shell;

const SQRT_3: f64 = 1.7320508075688772935274463415058723669428052538103806280558069794;

/// The side of the square canvas in pixels
pub const CANVAS_SIZE: u32 = 500;
/// The smallest grid the shell accepts
pub const MIN_GRID_SIZE: usize = 4;
/// The largest grid the shell accepts
pub const MAX_GRID_SIZE: usize = 20;
/// The factor used to derive the shadow accent from a fill color
pub const SHADOW_FACTOR: f64 = 0.7;
/// The pen width of the shadow accent
pub const SHADOW_WIDTH: f64 = 2.0;
/// The pen width of the border
pub const BORDER_WIDTH: f64 = 1.0;
/// The color behind the hexagons
pub const BACKGROUND_COLOR: color::Color = color::Color::new(0xFF, 0xFF, 0xFF);
/// The color of every border
pub const BORDER_COLOR: color::Color = color::Color::new(0x00, 0x00, 0x00);
