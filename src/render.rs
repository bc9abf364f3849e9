use percolation::PercolationGrid;

use crate::consts::*;

/// Draws the grid one row per line, marking sites reachable from the top,
/// followed by the percolation status.
pub fn render(grid: &PercolationGrid) -> percolation::Result<String> {
    let n = grid.size();
    let mut out = String::with_capacity((n + 1) * n + 20);

    for row in 0..n {
        for col in 0..n {
            let cell = if !grid.is_open(row, col)? {
                CLOSED_CELL
            } else if grid.is_connected_to_top(row, col)? {
                FULL_CELL
            } else {
                OPEN_CELL
            };
            out.push(cell);
        }
        out.push('\n');
    }

    out.push_str(&format!("Percolates: {}", grid.percolates()));
    Ok(out)
}
