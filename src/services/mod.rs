//! Pure computation services.
//!
//! Scoring, zone layout, and session assembly are synchronous total
//! functions over read-only inputs; they perform no I/O and hold no state
//! between calls, so concurrent invocations need no locking.

pub mod assembler;
pub mod scoring;
pub mod zones;

pub use assembler::{assemble_session, assemble_with_corpus};
pub use scoring::{age_tokens, score_corpus, score_drill, ScoreContext};
pub use zones::{computed_zones, infer_rink_view, LayoutTemplate};
