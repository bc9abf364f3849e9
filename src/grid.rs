//! The percolation grid.
//!
//! Sites are stored row-major with row 0 at the top. Two union-find
//! structures track connectivity: `full_check` holds both virtual sentinels
//! and answers [`PercolationGrid::percolates`], while `top_check` only holds
//! the virtual top. Keeping the virtual bottom out of `top_check` stops a
//! bottom-row site from looking connected to the top merely because the grid
//! percolates somewhere else.

use rand::Rng;
use tracing::{debug, enabled, trace, Level};

use crate::{
    disjoint_set::DisjointSet,
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent site in direction `dir`, if it lies on a `size`x`size` grid.
    pub fn step(self, dir: Dir, size: usize) -> Option<Site> {
        let (row, col) = match dir {
            Dir::North => (self.row.checked_sub(1)?, self.col),
            Dir::South => (self.row.checked_add(1)?, self.col),
            Dir::West => (self.row, self.col.checked_sub(1)?),
            Dir::East => (self.row, self.col.checked_add(1)?),
        };
        (row < size && col < size).then_some(Site { row, col })
    }
}

impl From<(usize, usize)> for Site {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    /// Order in which `open` visits neighbours: left, right, up, down.
    pub const ALL: [Dir; 4] = [Dir::West, Dir::East, Dir::North, Dir::South];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercolationGrid {
    size: usize,
    open: Vec<bool>,
    num_open: usize,
    full_check: DisjointSet,
    top_check: DisjointSet,
}

impl PercolationGrid {
    const VIRTUAL_TOP: usize = 0;

    /// Creates an `n`x`n` grid with every site closed.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid("n", "grid size must be at least 1"));
        }
        let num_sites = n
            .checked_mul(n)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or_else(|| Error::invalid("n", format!("a {n}x{n} grid is too large")))?;

        Ok(Self {
            size: n,
            open: vec![false; num_sites],
            num_open: 0,
            full_check: DisjointSet::new(num_sites + 2),
            top_check: DisjointSet::new(num_sites + 1),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.num_open
    }

    fn virtual_bottom(&self) -> usize {
        self.size * self.size + 1
    }

    fn check(&self, row: usize, col: usize) -> Result<Site> {
        if row < self.size && col < self.size {
            Ok(Site { row, col })
        } else {
            Err(Error::SiteOutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    // Union-find index of a site; 0 is reserved for the virtual top.
    fn index(&self, site: Site) -> usize {
        1 + site.col + self.size * site.row
    }

    fn is_site_open(&self, site: Site) -> bool {
        self.open[site.row * self.size + site.col]
    }

    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Site { row, col }))
    }

    /// In-bounds neighbours of `site`, open or not.
    pub fn neighbours(&self, site: Site) -> impl Iterator<Item = Site> {
        let size = self.size;
        Dir::ALL
            .into_iter()
            .filter_map(move |dir| site.step(dir, size))
    }

    /// Opens the site at `(row, col)` and joins it with its open neighbours.
    /// Opening an already open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.check(row, col)?;
        if self.is_site_open(site) {
            return Ok(());
        }

        let log_transition = enabled!(Level::DEBUG) && !self.percolates();
        let index = self.index(site);
        self.open[site.row * self.size + site.col] = true;
        self.num_open += 1;

        if site.row == 0 {
            self.full_check.union(Self::VIRTUAL_TOP, index)?;
            self.top_check.union(Self::VIRTUAL_TOP, index)?;
        }
        if site.row == self.size - 1 {
            let bottom = self.virtual_bottom();
            self.full_check.union(bottom, index)?;
        }

        for other in self.neighbours(site) {
            if !self.is_site_open(other) {
                continue;
            }
            let other = self.index(other);
            self.full_check.union(index, other)?;
            self.top_check.union(index, other)?;
        }

        trace!(row, col, "opened site");
        if log_transition && self.percolates() {
            debug!(
                size = self.size,
                open_sites = self.num_open,
                "grid percolates"
            );
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.check(row, col)?;
        Ok(self.is_site_open(site))
    }

    /// Whether an open path joins the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        let top = self.full_check.root_of(Self::VIRTUAL_TOP);
        top == self.full_check.root_of(self.virtual_bottom())
    }

    /// Whether the site at `(row, col)` is reachable from the top row through
    /// open sites. A closed site never is.
    pub fn is_connected_to_top(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.check(row, col)?;
        let top = self.top_check.root_of(Self::VIRTUAL_TOP);
        Ok(self.top_check.root_of(self.index(site)) == top)
    }

    /// Same as [`PercolationGrid::percolates`].
    pub fn is_full(&self) -> bool {
        self.percolates()
    }

    /// Visits every site in row-major order, drawing one uniform value in
    /// `[0, 1)` from `rng` per site and opening the site when the value is
    /// below `p`. Returns how many sites were newly opened.
    pub fn open_random<R: Rng + ?Sized>(&mut self, p: f64, rng: &mut R) -> Result<usize> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid(
                "p",
                format!("probability {p} does not lie in [0, 1]"),
            ));
        }

        let before = self.num_open;
        for row in 0..self.size {
            for col in 0..self.size {
                let value: f64 = rng.gen();
                if value < p {
                    self.open(row, col)?;
                }
            }
        }

        let opened = self.num_open - before;
        debug!(p, opened, percolates = self.percolates(), "opened random sites");
        Ok(opened)
    }
}
