//! Domain models for corpus drills and coach-authored drills.
//!
//! A [`DrillRecord`] lives in the embedded corpus and never changes at
//! runtime. A [`CoachCustomDrill`] is owned by a coach and managed by the
//! surrounding application; the assembler only ever reads a snapshot of it.
//! Drill titles are the join key across scoring, selection, and per-session
//! de-duplication, so the corpus must not contain duplicate titles.

use serde::{Deserialize, Serialize};

/// Whether an activity is a structured drill or a competitive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillType {
    Drill,
    Game,
}

impl DrillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrillType::Drill => "drill",
            DrillType::Game => "game",
        }
    }
}

/// A single drill from the embedded corpus.
///
/// All matching fields use loose, case-insensitive semantics (see
/// [`crate::services::scoring`]); empty sets mean "applies to anything".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillRecord {
    /// Unique human-readable name. Used for de-duplication within a session.
    pub title: String,
    /// Free-text description of the drill setup and execution.
    pub content: String,
    /// Single coarse skill tag, e.g. "Skating" or "Shooting".
    pub category: String,
    pub drill_type: DrillType,
    /// Free-text keywords; order irrelevant.
    pub tags: Vec<String>,
    /// Methodology keys the drill applies to. Empty matches any methodology;
    /// the "all" sentinel matches any methodology with a reduced bonus.
    pub methodologies: Vec<String>,
    /// Applicable age tokens such as "U12". Empty matches any age.
    pub age_groups: Vec<String>,
    /// Applicable ice configurations. Empty or the "any" sentinel matches
    /// any configuration.
    pub ice_configs: Vec<String>,
}

/// A drill authored by a coach through the knowledge-base collaborator.
///
/// Created and deleted outside this crate; the assembler reads a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachCustomDrill {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A corpus drill paired with its relevance score.
///
/// Negative scores mark excluded drills; the assembler additionally keeps
/// only strictly positive scores for selection. Never persisted.
#[derive(Debug, Clone)]
pub struct ScoredDrill<'a> {
    pub drill: &'a DrillRecord,
    pub score: i32,
}
