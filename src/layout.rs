use thiserror::Error;
use super::{
    SQRT_3,
    types::{Cell, Point},
};

/// The size of the grid and of the square canvas it must fit in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// The number of hexagons along one side of the grid
    n: usize,
    /// The width and height of the canvas
    canvas_size: f64,
}

impl GridSpec {
    /// Creates a new grid spec
    ///
    /// # Parameters
    ///
    /// n: The number of hexagons along one side of the grid
    ///
    /// canvas_size: The width and height of the canvas
    ///
    /// # Errors
    ///
    /// LayoutError::DegenerateGridSize if n <= 1, the gradients need at least two rows and columns
    ///
    /// LayoutError::InvalidCanvasSize if the canvas size is not a positive finite number
    pub fn new(n: usize, canvas_size: f64) -> Result<Self, LayoutError> {
        if n <= 1 {
            return Err(LayoutError::DegenerateGridSize(n));
        }

        if !canvas_size.is_finite() || canvas_size <= 0.0 {
            return Err(LayoutError::InvalidCanvasSize(canvas_size));
        }

        Ok(Self {
            n,
            canvas_size,
        })
    }

    /// Retrieves the number of hexagons along one side
    pub fn get_n(&self) -> usize {
        self.n
    }

    /// Retrieves the size of the canvas
    pub fn get_canvas_size(&self) -> f64 {
        self.canvas_size
    }
}

/// The computed geometry of a grid
#[derive(Clone, Debug)]
pub struct Layout {
    /// The spec the layout was computed from
    spec: GridSpec,
    /// The side length of every hexagon
    side: f64,
    /// The centers in row-major order
    centers: Vec<Point>,
}

impl Layout {
    /// Computes the side length and all centers for a grid
    ///
    /// # Parameters
    ///
    /// spec: The grid to lay out
    pub fn new(spec: &GridSpec) -> Self {
        Self {
            spec: *spec,
            side: side_length(spec.n, spec.canvas_size),
            centers: hexagon_centers(spec.n, spec.canvas_size),
        }
    }

    /// Retrieves the spec
    pub fn get_spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Retrieves the side length of the hexagons
    pub fn get_side(&self) -> f64 {
        self.side
    }

    /// Retrieves all centers in row-major order
    pub fn get_centers(&self) -> &[Point] {
        &self.centers
    }

    /// Iterates over every cell together with its center in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Point)> + '_ {
        let n = self.spec.n;
        self.centers
            .iter()
            .enumerate()
            .map(move |(index, center)| (Cell::from_index(index, n), *center))
    }
}

/// The largest side length such that n x n hexagons in an offset grid fit within the canvas.
///
/// A row is sqrt(3) * side * (n + 0.5) wide because odd rows are shifted by half a hexagon,
/// and n rows are side * (1.5 * n + 0.5) tall. The smaller of the two limits is used.
///
/// # Parameters
///
/// n: The number of hexagons along one side, must be at least 1 (not checked)
///
/// canvas_size: The width and height of the canvas, must be positive (not checked)
pub fn side_length(n: usize, canvas_size: f64) -> f64 {
    let n = n as f64;
    let max_side_by_width = canvas_size / (SQRT_3 * (n + 0.5));
    let max_side_by_height = canvas_size / (1.5 * n + 0.5);

    f64::min(max_side_by_width, max_side_by_height)
}

/// Calculates the centers of n x n hexagons centered on the origin of the canvas, in row-major order.
/// Odd rows are shifted right by half a hexagon and every coordinate is rounded to the nearest 0.5.
///
/// # Parameters
///
/// n: The number of hexagons along one side, must be at least 1 (not checked)
///
/// canvas_size: The width and height of the canvas, must be positive (not checked)
pub fn hexagon_centers(n: usize, canvas_size: f64) -> Vec<Point> {
    let side = side_length(n, canvas_size);

    // Spacing between neighbouring centers
    let w = SQRT_3 * side;
    let v = 1.5 * side;

    // Offset to put the middle of the grid on the origin
    let offset = Point::new(w * (n as f64 - 0.5) / 2.0, v * (n as f64 - 1.0) / 2.0);

    (0..n)
        .flat_map(|row| {
            let row_offset = (row % 2) as f64 * (w / 2.0);
            (0..n).map(move |col| {
                let raw = Point::new(col as f64 * w + row_offset, row as f64 * v);
                quantize(raw - offset)
            })
        })
        .collect()
}

/// Rounds both coordinates to the nearest 0.5, ties go to the even multiple
fn quantize(point: Point) -> Point {
    let round_half = |value: f64| (value * 2.0).round_ties_even() / 2.0;
    Point::new(round_half(point.get_x()), round_half(point.get_y()))
}

/// The errors for when creating a grid spec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The grid needs at least 2 hexagons along a side
    #[error("The grid must have at least 2 hexagons along a side but received {:?}", .0)]
    DegenerateGridSize(usize),
    /// The canvas must have a positive size
    #[error("The canvas size must be a positive number but received {:?}", .0)]
    InvalidCanvasSize(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The extent of the hexagons (not just the centers) along x and y
    fn bounding_box(n: usize, canvas_size: f64) -> (f64, f64, f64, f64) {
        let side = side_length(n, canvas_size);
        let half_width = SQRT_3 * side / 2.0;
        hexagon_centers(n, canvas_size).iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(min_x, max_x, min_y, max_y), center| {
                (
                    min_x.min(center.get_x() - half_width),
                    max_x.max(center.get_x() + half_width),
                    min_y.min(center.get_y() - side),
                    max_y.max(center.get_y() + side),
                )
            },
        )
    }

    #[test]
    fn spec_rejects_degenerate_input() {
        assert_eq!(GridSpec::new(0, 500.0), Err(LayoutError::DegenerateGridSize(0)));
        assert_eq!(GridSpec::new(1, 500.0), Err(LayoutError::DegenerateGridSize(1)));
        assert_eq!(GridSpec::new(4, 0.0), Err(LayoutError::InvalidCanvasSize(0.0)));
        assert_eq!(GridSpec::new(4, -10.0), Err(LayoutError::InvalidCanvasSize(-10.0)));
        assert!(GridSpec::new(4, f64::NAN).is_err());
        assert!(GridSpec::new(2, 1.0).is_ok());
    }

    #[test]
    fn width_binds_for_square_canvas() {
        // sqrt(3) * (n + 0.5) > 1.5 * n + 0.5 for every n >= 1
        let side = side_length(4, 500.0);
        assert!((side - 500.0 / (SQRT_3 * 4.5)).abs() < 1e-12);
        assert!((side - 64.150029909958).abs() < 1e-9);
    }

    #[test]
    fn four_by_four_centers() {
        let centers = hexagon_centers(4, 500.0);
        assert_eq!(centers.len(), 16);

        // side = 64.150..., w = 111.111..., v = 96.225...
        assert_eq!(centers[0], Point::new(-194.5, -144.5));
        assert_eq!(centers[1], Point::new(-83.5, -144.5));
        assert_eq!(centers[4], Point::new(-139.0, -48.0));
        assert_eq!(centers[15], Point::new(194.5, 144.5));
    }

    #[test]
    fn centers_are_row_major() {
        let n = 6;
        let centers = hexagon_centers(n, 500.0);
        for row in 0..n {
            let row_centers = &centers[row * n..(row + 1) * n];
            assert!(row_centers.iter().all(|center| center.get_y() == row_centers[0].get_y()));
            assert!(row_centers.windows(2).all(|pair| pair[0].get_x() < pair[1].get_x()));
        }
        assert!(centers.windows(n + 1).all(|pair| pair[0].get_y() < pair[n].get_y()));
    }

    #[test]
    fn odd_rows_are_shifted_right() {
        let n = 5;
        let layout = Layout::new(&GridSpec::new(n, 500.0).unwrap());
        let w = SQRT_3 * layout.get_side();
        let centers = layout.get_centers();
        assert!((centers[n].get_x() - centers[0].get_x() - w / 2.0).abs() <= 0.5);
        assert!((centers[2 * n].get_x() - centers[0].get_x()).abs() <= 0.5);
    }

    #[test]
    fn layout_cells_pair_positions() {
        let layout = Layout::new(&GridSpec::new(4, 500.0).unwrap());
        let cells: Vec<(Cell, Point)> = layout.cells().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[6].0, Cell::new(1, 2));
        assert_eq!(cells[6].1, layout.get_centers()[6]);
    }

    #[test]
    fn quantize_rounds_ties_to_even() {
        assert_eq!(quantize(Point::new(0.25, -0.25)), Point::new(0.0, 0.0));
        assert_eq!(quantize(Point::new(0.75, 1.3)), Point::new(1.0, 1.5));
    }

    proptest! {
        #[test]
        fn grid_fits_canvas(n in 4usize..=20, canvas_size in 1.0f64..5000.0) {
            prop_assert!(side_length(n, canvas_size) > 0.0);

            let (min_x, max_x, min_y, max_y) = bounding_box(n, canvas_size);
            let half = canvas_size / 2.0 + 0.25 + 1e-9;
            prop_assert!(min_x >= -half && max_x <= half);
            prop_assert!(min_y >= -half && max_y <= half);
        }

        #[test]
        fn grid_is_centered(n in 4usize..=20, canvas_size in 1.0f64..5000.0) {
            let centers = hexagon_centers(n, canvas_size);
            prop_assert_eq!(centers.len(), n * n);

            let (min_x, max_x, min_y, max_y) = bounding_box(n, canvas_size);
            prop_assert!((min_x + max_x).abs() <= 0.5 + 1e-9);
            prop_assert!((min_y + max_y).abs() <= 0.5 + 1e-9);

            // Rows mirror each other across the x-axis
            for row in 0..n {
                let mirrored = n - 1 - row;
                let y = centers[row * n].get_y();
                let y_mirrored = centers[mirrored * n].get_y();
                prop_assert!((y + y_mirrored).abs() <= 0.5 + 1e-9);
            }
        }

        #[test]
        fn even_grids_are_point_symmetric(half_n in 2usize..=10, canvas_size in 1.0f64..5000.0) {
            let n = half_n * 2;
            let centers = hexagon_centers(n, canvas_size);
            for center in &centers {
                let partner = centers.iter().any(|other| {
                    (other.get_x() + center.get_x()).abs() <= 0.5 + 1e-9
                        && (other.get_y() + center.get_y()).abs() <= 0.5 + 1e-9
                });
                prop_assert!(partner, "no partner for {:?}", center);
            }
        }
    }
}
