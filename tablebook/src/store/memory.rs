//! In-process table store.

use crate::error::Result;

use super::{overlay, trim_grid, CellRef, Grid, TableStore};

/// A table held entirely in memory.
///
/// Useful for tests and for running the service without touching disk.
///
/// # Examples
///
/// ```
/// use tablebook::store::{CellRef, MemoryStore, TableStore};
///
/// let mut store = MemoryStore::new();
/// store.write_from(CellRef::ORIGIN, &vec![vec!["Name".to_string()]]).unwrap();
/// assert_eq!(store.read_all().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    grid: Grid,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `grid`.
    #[must_use]
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid }
    }
}

impl TableStore for MemoryStore {
    fn read_all(&self) -> Result<Grid> {
        Ok(trim_grid(self.grid.clone()))
    }

    fn clear(&mut self) -> Result<()> {
        self.grid.clear();
        Ok(())
    }

    fn write_from(&mut self, origin: CellRef, grid: &Grid) -> Result<()> {
        overlay(&mut self.grid, origin, grid);
        Ok(())
    }
}
