use clap::ValueEnum;
use percolation::PercolationGrid;
use rand::Rng;

/// Opening patterns the driver can replay on a fresh grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Open each site independently with the given probability.
    Random,
    /// Open the middle column.
    Column,
    /// Open every site with an even `row + col`, plus the middle column.
    Checkerboard,
    /// Open sites where `row + col` is a multiple of 3 or 4.
    Diagonals,
    /// Open sites where `row + col` is a multiple of 7.
    SparseDiagonals,
    /// Open even columns, and alternately the bottom or top site of odd ones.
    Comb,
    /// Inside the central window spanning the middle three fifths, open sites
    /// whose coordinates are both even or either is a multiple of 3.
    Lattice,
    /// Trace a closed loop touching the top and bottom rows, drawn on a 10x10
    /// layout and stretched to the grid size.
    WindingPath,
}

/// Corners of the winding loop on a 10x10 layout, in drawing order.
const WINDING_PATH: &[(usize, usize)] = &[
    (1, 6),
    (0, 6),
    (0, 3),
    (1, 3),
    (1, 2),
    (2, 2),
    (2, 1),
    (7, 1),
    (7, 2),
    (8, 2),
    (8, 3),
    (9, 3),
    (9, 6),
    (8, 6),
    (8, 7),
    (7, 7),
    (7, 8),
    (2, 8),
    (2, 7),
    (1, 7),
    (1, 6),
];

impl Scenario {
    pub fn build<R: Rng + ?Sized>(
        self,
        size: usize,
        probability: f64,
        rng: &mut R,
    ) -> percolation::Result<PercolationGrid> {
        let mut grid = PercolationGrid::new(size)?;
        let middle = size / 2;

        match self {
            Scenario::Random => {
                grid.open_random(probability, rng)?;
            }
            Scenario::Column => {
                for row in 0..size {
                    grid.open(row, middle)?;
                }
            }
            Scenario::Checkerboard => {
                for row in 0..size {
                    grid.open(row, middle)?;
                }
                open_where(&mut grid, |row, col| (row + col) % 2 == 0)?;
            }
            Scenario::Diagonals => {
                open_where(&mut grid, |row, col| {
                    (row + col) % 4 == 0 || (row + col) % 3 == 0
                })?;
            }
            Scenario::SparseDiagonals => {
                open_where(&mut grid, |row, col| (row + col) % 7 == 0)?;
            }
            Scenario::Comb => {
                let bottom = size - 1;
                open_where(&mut grid, |row, col| match col % 4 {
                    0 | 2 => true,
                    1 => row == bottom,
                    _ => row == 0,
                })?;
            }
            Scenario::Lattice => {
                let window = size / 5..size * 4 / 5;
                open_where(&mut grid, |row, col| {
                    window.contains(&row)
                        && window.contains(&col)
                        && ((row % 2 == 0 && col % 2 == 0) || row % 3 == 0 || col % 3 == 0)
                })?;
            }
            Scenario::WindingPath => {
                let scale = |v: usize| v * (size - 1) / 9;
                for pair in WINDING_PATH.windows(2) {
                    let (from, to) = (pair[0], pair[1]);
                    open_segment(
                        &mut grid,
                        (scale(from.0), scale(from.1)),
                        (scale(to.0), scale(to.1)),
                    )?;
                }
            }
        }

        Ok(grid)
    }
}

fn open_where(
    grid: &mut PercolationGrid,
    pred: impl Fn(usize, usize) -> bool,
) -> percolation::Result<()> {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if pred(row, col) {
                grid.open(row, col)?;
            }
        }
    }
    Ok(())
}

// Opens every site in the rectangle spanned by `from` and `to`, which is a
// straight line when the two share a row or column.
fn open_segment(
    grid: &mut PercolationGrid,
    from: (usize, usize),
    to: (usize, usize),
) -> percolation::Result<()> {
    for row in from.0.min(to.0)..=from.0.max(to.0) {
        for col in from.1.min(to.1)..=from.1.max(to.1) {
            grid.open(row, col)?;
        }
    }
    Ok(())
}
