//! Division allocator
//!
//! Splits a cone's height into contiguous percentage-based sections and
//! keeps each section's interpolated dimensions in sync with the parent
//! cone. Divisions are ephemeral working state: they are recomputed whenever
//! the parent parameters or the section list change and are never persisted.

use conekit_core::ConeParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DivisionError, DivisionResult};

/// How a future cut visualization groups sections.
///
/// Carries no geometric effect in the pattern engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionOrientation {
    Vertical,
    Horizontal,
    Both,
}

impl Default for DivisionOrientation {
    fn default() -> Self {
        Self::Vertical
    }
}

impl fmt::Display for DivisionOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// One percentage slice of the parent cone's height.
///
/// The derived fields are always `parent_dimension * percentage / 100`,
/// recomputed on every mutation rather than adjusted incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Division {
    /// Stable identity for UI bookkeeping.
    pub id: Uuid,
    /// Share of the parent cone's height, in (0, 100].
    pub percentage: f64,
    /// Interpolated section height.
    pub height: f64,
    /// Interpolated top radius.
    pub top_radius: f64,
    /// Interpolated bottom radius.
    pub bottom_radius: f64,
    /// Grouping tag for cut visualization.
    pub orientation: DivisionOrientation,
}

/// Ordered collection of divisions over one parent cone.
///
/// Maintains two invariants across every operation: the percentages sum to
/// at most 100, and every derived dimension equals the parent value scaled
/// by the section's percentage. Operations that would break the first
/// invariant fail with [`DivisionError::CapacityExceeded`] and leave the set
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionSet {
    parent: ConeParams,
    orientation: DivisionOrientation,
    divisions: Vec<Division>,
}

impl DivisionSet {
    /// Create an empty set over the given parent cone.
    pub fn new(parent: ConeParams) -> Self {
        Self {
            parent,
            orientation: DivisionOrientation::default(),
            divisions: Vec::new(),
        }
    }

    /// Current sections, in insertion order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Parent cone the sections are derived from.
    pub fn parent(&self) -> &ConeParams {
        &self.parent
    }

    /// Sum of all allocated percentages.
    pub fn total_percentage(&self) -> f64 {
        self.divisions.iter().map(|d| d.percentage).sum()
    }

    /// Unallocated percentage still available.
    pub fn remaining_percentage(&self) -> f64 {
        100.0 - self.total_percentage()
    }

    /// Append a section claiming all remaining percentage.
    ///
    /// Fails with `CapacityExceeded` when nothing remains.
    pub fn add(&mut self, orientation: DivisionOrientation) -> DivisionResult<Division> {
        let remaining = self.remaining_percentage();
        if remaining <= 0.0 {
            return Err(DivisionError::CapacityExceeded {
                available: remaining.max(0.0),
            });
        }

        let division = self.derive(Uuid::new_v4(), remaining, orientation);
        debug!(id = %division.id, percentage = remaining, "added division");
        self.divisions.push(division);
        Ok(division)
    }

    /// Remove a section and redistribute its percentage equally across the
    /// survivors. With no survivors there is nothing to redistribute.
    pub fn remove(&mut self, id: Uuid) -> DivisionResult<()> {
        let index = self.index_of(id)?;
        let freed = self.divisions.remove(index).percentage;

        let count = self.divisions.len();
        if count > 0 {
            let add_per_division = freed / count as f64;
            for i in 0..count {
                let pct = self.divisions[i].percentage + add_per_division;
                let (id, orientation) = (self.divisions[i].id, self.divisions[i].orientation);
                self.divisions[i] = self.derive(id, pct, orientation);
            }
        }
        debug!(%id, freed, survivors = count, "removed division");
        Ok(())
    }

    /// Change one section's percentage, keeping the capacity invariant.
    pub fn set_percentage(&mut self, id: Uuid, percentage: f64) -> DivisionResult<Division> {
        if !(percentage > 0.0 && percentage <= 100.0) {
            return Err(DivisionError::InvalidPercentage(percentage));
        }
        let index = self.index_of(id)?;

        let others: f64 = self
            .divisions
            .iter()
            .filter(|d| d.id != id)
            .map(|d| d.percentage)
            .sum();
        if others + percentage > 100.0 {
            return Err(DivisionError::CapacityExceeded {
                available: 100.0 - others,
            });
        }

        let orientation = self.divisions[index].orientation;
        let division = self.derive(id, percentage, orientation);
        self.divisions[index] = division;
        Ok(division)
    }

    /// Apply a shared orientation tag to all current sections.
    pub fn set_orientation(&mut self, orientation: DivisionOrientation) {
        self.orientation = orientation;
        for division in &mut self.divisions {
            division.orientation = orientation;
        }
    }

    /// Replace the parent cone and recompute every derived dimension.
    pub fn set_parent(&mut self, parent: ConeParams) {
        self.parent = parent;
        for i in 0..self.divisions.len() {
            let d = self.divisions[i];
            self.divisions[i] = self.derive(d.id, d.percentage, d.orientation);
        }
    }

    fn derive(&self, id: Uuid, percentage: f64, orientation: DivisionOrientation) -> Division {
        let scale = percentage / 100.0;
        Division {
            id,
            percentage,
            height: self.parent.height * scale,
            top_radius: self.parent.top_radius * scale,
            bottom_radius: self.parent.bottom_radius * scale,
            orientation,
        }
    }

    fn index_of(&self, id: Uuid) -> DivisionResult<usize> {
        self.divisions
            .iter()
            .position(|d| d.id == id)
            .ok_or(DivisionError::UnknownDivision(id))
    }
}
