//! Double-buffered utility field.
//!
//! [`UtilityField`] keeps two per-cell buffers. A sweep reads only the
//! published buffer and writes only the staging buffer, then the two swap
//! roles. Every cell in a sweep therefore sees the same snapshot of the
//! previous sweep, independent of iteration order.

use gridmdp_core::CellId;

/// Per-cell utility estimates with ping-pong sweep buffers.
#[derive(Clone, Debug)]
pub struct UtilityField {
    published: Vec<f64>,
    staging: Vec<f64>,
    seeded: bool,
}

impl UtilityField {
    /// An unseeded field for `cell_count` cells.
    pub fn new(cell_count: usize) -> Self {
        Self {
            published: vec![0.0; cell_count],
            staging: vec![0.0; cell_count],
            seeded: false,
        }
    }

    /// Whether [`seed`](Self::seed) has run.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Overwrite every utility with `init(cell)`.
    pub fn seed(&mut self, init: impl Fn(CellId) -> f64) {
        for (i, u) in self.published.iter_mut().enumerate() {
            *u = init(CellId(i as u32));
        }
        self.seeded = true;
    }

    /// Run one synchronous sweep and publish the result.
    ///
    /// `backup(previous, cell)` computes the new utility of `cell` from the
    /// previous sweep's values. Returns the largest absolute change.
    pub fn sweep(&mut self, backup: impl Fn(&[f64], CellId) -> f64) -> f64 {
        let mut residual = 0.0f64;
        for (i, next) in self.staging.iter_mut().enumerate() {
            let value = backup(&self.published, CellId(i as u32));
            residual = residual.max((value - self.published[i]).abs());
            *next = value;
        }
        std::mem::swap(&mut self.published, &mut self.staging);
        residual
    }

    /// Utility of `cell`.
    pub fn get(&self, cell: CellId) -> f64 {
        self.published[cell.index()]
    }

    /// All published utilities, indexed by `CellId`.
    pub fn as_slice(&self) -> &[f64] {
        &self.published
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.published.len()
    }

    /// Whether the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }
}
