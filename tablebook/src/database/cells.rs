//! Cell-level worksheet operations.
//!
//! Worksheets are stored sparsely: only non-empty cells have a row in the
//! `cells` table. Reads rebuild a dense grid; writes upsert non-empty values
//! and delete the cells that a write blanks.

// Row and column offsets are stored as SQLite INTEGERs
#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::store::Grid;

use super::connection::Database;
use super::schema::{DELETE_CELL, DELETE_WORKSHEET, SELECT_WORKSHEET_CELLS, UPSERT_CELL};

impl Database {
    /// Reads a worksheet as a dense grid.
    ///
    /// Rows are padded to the width of the widest row; gaps read as empty
    /// strings. A worksheet that was never written reads as an empty grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn read_worksheet(&self, worksheet: &str) -> Result<Grid> {
        let mut stmt = self.conn.prepare(SELECT_WORKSHEET_CELLS)?;
        let cells = stmt
            .query_map(params![worksheet], |row| {
                let r: i64 = row.get(0)?;
                let c: i64 = row.get(1)?;
                let value: String = row.get(2)?;
                Ok((r as usize, c as usize, value))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let Some(height) = cells.iter().map(|(r, _, _)| r + 1).max() else {
            return Ok(Vec::new());
        };
        let width = cells.iter().map(|(_, c, _)| c + 1).max().unwrap_or(0);

        let mut grid = vec![vec![String::new(); width]; height];
        for (r, c, value) in cells {
            grid[r][c] = value;
        }
        Ok(grid)
    }

    /// Removes every cell of a worksheet, returning the number removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_worksheet(&mut self, worksheet: &str) -> Result<usize> {
        let removed = self.conn.execute(DELETE_WORKSHEET, params![worksheet])?;
        Ok(removed)
    }

    /// Writes a rectangular grid with its top-left cell at (`row`, `col`).
    ///
    /// Every cell in the written range is overwritten; empty strings blank
    /// the cell. The write happens in a single IMMEDIATE transaction so a
    /// failed write leaves the worksheet as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any statement
    /// fails, or the commit fails.
    pub fn write_cells(&mut self, worksheet: &str, row: usize, col: usize, grid: &Grid) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut upsert = tx.prepare(UPSERT_CELL)?;
            let mut delete = tx.prepare(DELETE_CELL)?;
            for (dr, cells) in grid.iter().enumerate() {
                for (dc, value) in cells.iter().enumerate() {
                    let r = (row + dr) as i64;
                    let c = (col + dc) as i64;
                    if value.is_empty() {
                        delete.execute(params![worksheet, r, c])?;
                    } else {
                        upsert.execute(params![worksheet, r, c, value])?;
                    }
                }
            }
        }

        tx.commit()?;
        Ok(())
    }
}
