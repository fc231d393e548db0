use super::{
    BORDER_COLOR, BORDER_WIDTH, SHADOW_WIDTH,
    color::Color,
    scene::DrawInstruction,
    types::Point,
};

/// The number of edges of a hexagon
const EDGES: usize = 6;
/// The number of edges covered by the shadow accent, starting at the bottom vertex
const SHADOW_EDGES: usize = 3;
/// The heading of the first edge, measured from the positive x-axis
const FIRST_HEADING: f64 = 30.0;
/// The turn between two edges
const TURN: f64 = 60.0;

/// Draws hexagons onto some surface
pub trait Canvas {
    /// Draws a single hexagon: the fill, a darkened accent along the first three edges and a border
    ///
    /// # Parameters
    ///
    /// instruction: The center, fill color and side length of the hexagon
    fn draw_hexagon(&mut self, instruction: &DrawInstruction);

    /// Draws all hexagons in order, later hexagons are drawn on top of earlier ones
    ///
    /// # Parameters
    ///
    /// scene: The hexagons to draw
    fn draw_scene(&mut self, scene: &[DrawInstruction]) {
        for instruction in scene {
            self.draw_hexagon(instruction);
        }
    }
}

/// The pen settings used for the accents of every hexagon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexagonStyle {
    /// The pen width of the shadow accent
    pub shadow_width: f64,
    /// The pen width of the border
    pub border_width: f64,
    /// The color of the border
    pub border_color: Color,
}

impl Default for HexagonStyle {
    fn default() -> Self {
        Self {
            shadow_width: SHADOW_WIDTH,
            border_width: BORDER_WIDTH,
            border_color: BORDER_COLOR,
        }
    }
}

/// Describes a vertex of the tessellated scene
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// The position in canvas coordinates
    pub position: [f32; 2],
    /// The linear rgba color
    pub color: [f32; 4],
}

impl Vertex {
    /// Creates a new vertex
    ///
    /// # Parameters
    ///
    /// position: The position in canvas coordinates
    ///
    /// color: The color of the vertex
    fn new(position: &Point, color: &Color) -> Self {
        Self {
            position: position.get_data(),
            color: color.to_linear_rgba(),
        }
    }

    /// Gets the memory description of a vertex
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ]
        }
    }
}

/// A triangle list holding every hexagon drawn so far, nothing reaches the screen until it is uploaded
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// The pen settings
    style: HexagonStyle,
    /// The vertices, every 3 form a triangle
    vertices: Vec<Vertex>,
}

impl Mesh {
    /// Creates an empty mesh
    ///
    /// # Parameters
    ///
    /// style: The pen settings for the accents
    pub fn new(style: HexagonStyle) -> Self {
        Self {
            style,
            vertices: Vec::new(),
        }
    }

    /// Retrieves the vertices
    pub fn get_vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if nothing has been drawn
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a single triangle
    fn triangle(&mut self, corners: [Point; 3], color: &Color) {
        self.vertices.extend(corners.iter().map(|corner| Vertex::new(corner, color)));
    }

    /// Fills a convex polygon using a fan around a point inside it
    fn fill_convex(&mut self, pivot: Point, outline: &[Point], color: &Color) {
        for edge in outline.windows(2) {
            self.triangle([pivot, edge[0], edge[1]], color);
        }
    }

    /// Strokes a path of line segments with a pen of the given width, each segment is a separate quad
    fn stroke(&mut self, path: &[Point], width: f64, color: &Color) {
        for segment in path.windows(2) {
            let (start, end) = (segment[0], segment[1]);
            let direction = end - start;
            let length = direction.length();
            if length <= f64::EPSILON {
                continue;
            }

            let normal = direction.perpendicular() * (0.5 * width / length);
            self.triangle([start + normal, end + normal, end - normal], color);
            self.triangle([start + normal, end - normal, start - normal], color);
        }
    }
}

impl Canvas for Mesh {
    fn draw_hexagon(&mut self, instruction: &DrawInstruction) {
        let path = hexagon_path(&instruction.center, instruction.side);
        let style = self.style;

        self.fill_convex(instruction.center, &path, &instruction.fill);
        self.stroke(&path[..=SHADOW_EDGES], style.shadow_width, &instruction.fill.shadow());
        self.stroke(&path, style.border_width, &style.border_color);
    }
}

/// Walks around a hexagon like a pen: starting at the bottom vertex heading 30 degrees
/// and turning 60 degrees after every edge. The returned path is closed.
///
/// # Parameters
///
/// center: The center of the hexagon
///
/// side: The side length
pub fn hexagon_path(center: &Point, side: f64) -> [Point; EDGES + 1] {
    let mut path = [*center + Point::new(0.0, -side); EDGES + 1];
    for edge in 0..EDGES {
        let heading = FIRST_HEADING + TURN * edge as f64;
        path[edge + 1] = path[edge] + Point::from_heading(heading) * side;
    }
    path
}
