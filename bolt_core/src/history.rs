//! # Calculation History
//!
//! An ordered, append-only list of saved calculations. A snapshot is taken
//! only when the user explicitly opts to keep a result: it copies the input
//! and result as they stood, decoupled from any future recomputation.
//!
//! This is the only mutable state in the system. In a single-threaded host
//! it needs no guarding; a multi-threaded host should wrap the whole
//! [`History`] in a mutex.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{BoltGroupInput, BoltGroupResult};

/// A snapshot of one evaluated bolt group, kept at the user's request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    /// Stable identifier for this snapshot
    pub id: Uuid,

    /// User label at the time of saving
    pub label: String,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// Input as evaluated
    pub input: BoltGroupInput,

    /// Result as evaluated
    pub result: BoltGroupResult,
}

/// Ordered, append-only collection of saved calculations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<SavedCalculation>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of an evaluated calculation.
    ///
    /// Returns the id assigned to the snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bolt_core::calculations::bolt_group::{calculate, BoltGroupInput};
    /// use bolt_core::geometry::Arrangement;
    /// use bolt_core::history::History;
    /// use bolt_core::loads::LoadSet;
    ///
    /// let input = BoltGroupInput {
    ///     label: "BG-1".to_string(),
    ///     arrangement: Arrangement::Circular { diameter_mm: 300.0, num_bolts: 6 },
    ///     loads: LoadSet::new().with_axial(45.0),
    ///     grade: "Grade 4.6".to_string(),
    ///     size: "M16".to_string(),
    ///     prying_allowance: 1.0,
    /// };
    /// let result = calculate(&input).unwrap();
    ///
    /// let mut history = History::new();
    /// let id = history.save("BG-1", input, result);
    /// assert_eq!(history.len(), 1);
    /// assert!(history.get(&id).is_some());
    /// ```
    pub fn save(
        &mut self,
        label: impl Into<String>,
        input: BoltGroupInput,
        result: BoltGroupResult,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(SavedCalculation {
            id,
            label: label.into(),
            saved_at: Utc::now(),
            input,
            result,
        });
        id
    }

    /// All snapshots in the order they were saved.
    pub fn entries(&self) -> &[SavedCalculation] {
        &self.entries
    }

    /// Find a snapshot by id.
    pub fn get(&self, id: &Uuid) -> Option<&SavedCalculation> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Number of saved snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
