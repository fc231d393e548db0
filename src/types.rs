use std::ops::{Mul, Add, Sub, Neg};

/// A 2D point in canvas coordinates, the origin is the center of the canvas and y points up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// The x-coordinate
    x: f64,
    /// The y-coordinate
    y: f64,
}

impl Point {
    /// Creates a new point
    ///
    /// # Parameters
    ///
    /// x: The x-coordinate
    ///
    /// y: The y-coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
        }
    }

    /// Creates a unit vector pointing in the given direction
    ///
    /// # Parameters
    ///
    /// degrees: The heading measured counter-clockwise from the positive x-axis
    pub fn from_heading(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), radians.sin())
    }

    /// Retrieves the x-coordinate
    pub fn get_x(&self) -> f64 {
        self.x
    }

    /// Retrieves the y-coordinate
    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// The euclidean length of the vector from the origin to this point
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The vector rotated 90 degrees counter-clockwise
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Retrieves the data for the gpu
    pub fn get_data(&self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// The position of a hexagon in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The row, 0 is the bottom row
    row: usize,
    /// The column, 0 is the leftmost column
    col: usize,
}

impl Cell {
    /// Creates a new cell
    ///
    /// # Parameters
    ///
    /// row: The row index
    ///
    /// col: The column index
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
        }
    }

    /// Recovers the cell from its position in a row-major list
    ///
    /// # Parameters
    ///
    /// index: The flat index
    ///
    /// n: The number of columns, must be at least 1
    pub const fn from_index(index: usize, n: usize) -> Self {
        Self::new(index / n, index % n)
    }

    /// Retrieves the row index
    pub fn get_row(&self) -> usize {
        self.row
    }

    /// Retrieves the column index
    pub fn get_col(&self) -> usize {
        self.col
    }
}
