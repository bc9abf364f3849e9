//! Weighted quick-union over the fixed universe `[0, len)`.
//!
//! Roots carry the size of their tree and every other element links to its
//! parent. `find` follows links without compressing them; because `union`
//! always hangs the smaller tree below the larger one, tree height stays
//! within `log2(len)`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Root { size: usize },
    Link { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    entries: Vec<Entry>,
    num_sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets. An empty universe is allowed.
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![Entry::Root { size: 1 }; len],
            num_sets: len,
        }
    }

    /// Size of the universe, fixed at construction.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    // Callers validate `index` first.
    pub(crate) fn root_of(&self, index: usize) -> usize {
        let mut i = index;
        loop {
            match self.entries[i] {
                Entry::Root { size: _ } => break i,
                Entry::Link { index: j } => i = j,
            }
        }
    }

    fn size_of_root(&self, root: usize) -> usize {
        match self.entries[root] {
            Entry::Root { size } => size,
            Entry::Link { index: _ } => unreachable!("{root} should be a root"),
        }
    }

    /// Returns the root of the set containing `index`.
    pub fn find(&self, index: usize) -> Result<usize> {
        self.check(index)?;
        Ok(self.root_of(index))
    }

    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    pub fn num_members(&self, index: usize) -> Result<usize> {
        let root = self.find(index)?;
        Ok(self.size_of_root(root))
    }

    /// Merges the sets containing `p` and `q`.
    ///
    /// The root of the smaller set becomes a child of the other root. On equal
    /// sizes the root of `q` goes under the root of `p`.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(());
        }

        let p_size = self.size_of_root(p_root);
        let q_size = self.size_of_root(q_root);
        let (parent, child) = if p_size >= q_size {
            (p_root, q_root)
        } else {
            (q_root, p_root)
        };

        self.entries[child] = Entry::Link { index: parent };
        self.entries[parent] = Entry::Root {
            size: p_size + q_size,
        };
        self.num_sets -= 1;

        Ok(())
    }

    pub fn is_singleton(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(matches!(self.entries[index], Entry::Root { size: 1 }))
    }

    /// Number of links between `index` and its root.
    pub fn depth(&self, index: usize) -> Result<usize> {
        self.check(index)?;
        let mut i = index;
        let mut depth = 0;
        loop {
            match self.entries[i] {
                Entry::Root { size: _ } => break Ok(depth),
                Entry::Link { index: j } => {
                    i = j;
                    depth += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let ds = DisjointSet::new(2);
        assert_eq!(ds.count(), 2);
        assert_eq!(ds.num_sets(), 2);
        assert_eq!(ds.find(0), Ok(0));
        assert_eq!(ds.find(1), Ok(1));
        assert!(ds.is_singleton(0).unwrap());
        assert!(ds.is_singleton(1).unwrap());
    }

    #[test]
    fn test_empty() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
        assert_eq!(ds.count(), 0);
        assert_eq!(
            ds.find(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_root_of() {
        let ds = DisjointSet {
            entries: vec![
                Entry::Root { size: 4 },
                Entry::Link { index: 0 },
                Entry::Link { index: 1 },
                Entry::Link { index: 0 },
                Entry::Root { size: 1 },
            ],
            num_sets: 2,
        };

        assert_eq!(ds.find(0), Ok(0));
        assert_eq!(ds.find(1), Ok(0));
        assert_eq!(ds.find(2), Ok(0));
        assert_eq!(ds.find(3), Ok(0));
        assert_eq!(ds.find(4), Ok(4));
        assert_eq!(ds.depth(2), Ok(2));
        assert_eq!(ds.num_members(2), Ok(4));
    }

    #[test]
    fn test_union() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1).unwrap();
        ds.union(2, 3).unwrap();

        assert!(ds.connected(0, 1).unwrap());
        assert!(ds.connected(2, 3).unwrap());
        assert!(!ds.connected(1, 2).unwrap());
        assert!(!ds.connected(3, 0).unwrap());
        assert_eq!(ds.num_sets(), 2);
        for i in 0..4 {
            assert_eq!(ds.num_members(i), Ok(2));
        }

        ds.union(3, 1).unwrap();
        for i in 0..4 {
            assert_eq!(ds.find(i), ds.find(0));
            assert_eq!(ds.num_members(i), Ok(4));
        }
        assert_eq!(ds.num_sets(), 1);
    }

    #[test]
    fn test_equal_sizes_keep_first_root() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1).unwrap();
        ds.union(2, 3).unwrap();
        ds.union(0, 2).unwrap();

        for i in 0..4 {
            assert_eq!(ds.find(i), Ok(0));
        }
    }

    #[test]
    fn test_smaller_tree_goes_below_larger() {
        let mut ds = DisjointSet::new(5);
        ds.union(1, 2).unwrap();
        ds.union(1, 3).unwrap();
        // {1, 2, 3} outweighs {0}, even though 0 is passed first.
        ds.union(0, 1).unwrap();

        assert_eq!(ds.find(0), Ok(1));
        assert_eq!(ds.num_members(0), Ok(4));
        assert!(ds.is_singleton(4).unwrap());
    }

    #[test]
    fn test_repeated_union_is_noop() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1).unwrap();
        let snapshot = ds.clone();
        ds.union(0, 1).unwrap();
        ds.union(1, 0).unwrap();
        assert_eq!(ds, snapshot);
    }

    #[test]
    fn test_union_order_symmetry() {
        let mut pq = DisjointSet::new(6);
        let mut qp = DisjointSet::new(6);
        let pairs = [(0, 1), (2, 3), (3, 4), (1, 4), (5, 0)];
        for &(p, q) in &pairs {
            pq.union(p, q).unwrap();
            qp.union(q, p).unwrap();
        }

        for &(p, q) in &pairs {
            assert!(pq.connected(p, q).unwrap());
            assert!(qp.connected(p, q).unwrap());
        }
        for i in 0..6 {
            assert_eq!(pq.num_members(i), qp.num_members(i));
        }
        assert_eq!(pq.num_sets(), qp.num_sets());
    }

    #[test]
    fn test_depth_is_logarithmic() {
        let mut ds = DisjointSet::new(1024);
        let mut width = 1;
        while width < 1024 {
            for i in (0..1024).step_by(2 * width) {
                ds.union(i, i + width).unwrap();
            }
            width *= 2;
        }

        assert_eq!(ds.num_sets(), 1);
        for i in 0..ds.len() {
            assert!(ds.depth(i).unwrap() <= 10);
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut ds = DisjointSet::new(3);
        let err = Error::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(ds.find(3), Err(err.clone()));
        assert_eq!(ds.union(0, 3), Err(err.clone()));
        assert_eq!(ds.union(3, 0), Err(err.clone()));
        assert_eq!(ds.depth(3), Err(err));
        assert_eq!(ds.num_sets(), 3);
    }
}
