//! # Cost Matrix
//!
//! This module defines the location set and the pairwise cost matrix the
//! optimizer searches over. Locations are identified by distinct string labels;
//! the matrix maps each ordered `(origin, destination)` pair either to a
//! non-negative cost or to "unreachable" (`None`). The matrix need not be
//! symmetric, and the diagonal is never traversed.
//!
//! A matrix can be built from explicit rows or incrementally through
//! [`CostMatrixBuilder`], which supports both directed and symmetric edge
//! entry.
//!
//! ## Example
//!
//! ```rust
//! use routega::graph::CostMatrix;
//!
//! let matrix = CostMatrix::builder(["A", "B", "C"])
//!     .symmetric_edge("A", "B", 5.0)
//!     .edge("B", "C", 7.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(matrix.cost(0, 1), Some(5.0));
//! assert_eq!(matrix.cost(2, 1), None); // only B -> C was added
//! ```

use crate::error::{GeneticError, Result};

/// An N x N cost matrix over a fixed, ordered set of labelled locations.
///
/// Each cell holds either a finite, non-negative cost or `None` for an
/// unreachable pair. Feasibility is kept distinct from cost values: there is
/// no sentinel number stored in the matrix itself. The numeric penalty used
/// when summing population scores is derived on demand and is provably larger
/// than any achievable path cost (see [`CostMatrix::infeasibility_penalty`]).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    labels: Vec<String>,
    cells: Vec<Option<f64>>,
}

impl CostMatrix {
    /// Creates a cost matrix from explicit rows.
    ///
    /// `rows` must be square and aligned with `labels`: `rows[i][j]` is the
    /// cost of travelling from location `i` to location `j`, or `None` if the
    /// pair is unreachable.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the labels are not distinct,
    /// the row count does not match the label count, any row has the wrong
    /// length, or any cost is negative or non-finite.
    pub fn from_rows<L, S>(labels: L, rows: Vec<Vec<Option<f64>>>) -> Result<Self>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let n = labels.len();

        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(GeneticError::Configuration(format!(
                    "duplicate location label '{}'",
                    label
                )));
            }
        }

        if rows.len() != n {
            return Err(GeneticError::Configuration(format!(
                "cost matrix has {} rows but {} locations",
                rows.len(),
                n
            )));
        }

        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GeneticError::Configuration(format!(
                    "cost matrix row {} has length {} but {} locations",
                    i,
                    row.len(),
                    n
                )));
            }
            for cost in &row {
                if let Some(value) = cost {
                    if !value.is_finite() || *value < 0.0 {
                        return Err(GeneticError::Configuration(format!(
                            "cost matrix row {} contains invalid cost {}",
                            i, value
                        )));
                    }
                }
            }
            cells.extend(row);
        }

        Ok(Self { labels, cells })
    }

    /// Returns a builder for assembling a matrix edge by edge.
    pub fn builder<L, S>(labels: L) -> CostMatrixBuilder
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CostMatrixBuilder::new(labels)
    }

    /// Returns the number of locations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of the location at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Returns the ordered location labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the index of the location with the given label, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Returns the cost of travelling from `from` to `to`, or `None` if the
    /// pair is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn cost(&self, from: usize, to: usize) -> Option<f64> {
        assert!(from < self.len() && to < self.len());
        self.cells[from * self.len() + to]
    }

    /// Returns the largest edge cost in the matrix, or `0.0` if the matrix has
    /// no reachable pairs.
    pub fn max_edge_cost(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .fold(0.0, |acc, &cost| acc.max(cost))
    }

    /// Returns the numeric penalty assigned to infeasible genomes when summing
    /// population scores.
    ///
    /// A path visits every location once, so its cost is bounded by
    /// `N * max_edge_cost`. The penalty is one more than that bound, so any
    /// feasible genome always outranks any infeasible one, across graph sizes.
    pub fn infeasibility_penalty(&self) -> f64 {
        self.len() as f64 * self.max_edge_cost() + 1.0
    }
}

/// Incremental builder for [`CostMatrix`].
///
/// Starts from an all-unreachable matrix and records edges one at a time. An
/// edge entered twice keeps the last cost.
#[derive(Debug, Clone)]
pub struct CostMatrixBuilder {
    labels: Vec<String>,
    edges: Vec<(String, String, f64)>,
}

impl CostMatrixBuilder {
    fn new<L, S>(labels: L) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            edges: Vec::new(),
        }
    }

    /// Records a directed edge from `from` to `to`.
    pub fn edge(mut self, from: &str, to: &str, cost: f64) -> Self {
        self.edges.push((from.to_string(), to.to_string(), cost));
        self
    }

    /// Records an edge in both directions with the same cost.
    pub fn symmetric_edge(self, a: &str, b: &str, cost: f64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// Builds the matrix.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the labels are not distinct,
    /// an edge references an unknown label, or a cost is negative or
    /// non-finite.
    pub fn build(self) -> Result<CostMatrix> {
        let n = self.labels.len();
        let mut rows = vec![vec![None; n]; n];

        for (from, to, cost) in &self.edges {
            let from_idx = index_of(&self.labels, from)?;
            let to_idx = index_of(&self.labels, to)?;
            rows[from_idx][to_idx] = Some(*cost);
        }

        CostMatrix::from_rows(self.labels, rows)
    }
}

fn index_of(labels: &[String], label: &str) -> Result<usize> {
    labels
        .iter()
        .position(|l| l == label)
        .ok_or_else(|| GeneticError::Configuration(format!("unknown location label '{}'", label)))
}
