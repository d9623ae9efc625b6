//! # HTI Rust Core
//!
//! Hockey Training Intelligence — local drill assembly engine.
//!
//! This crate is the deterministic core of a training-session planner for
//! ice-hockey coaches. Given a session request, a coach profile, the coach's
//! feedback history, and the coach's custom drill library, it tries to build
//! a complete training session (warm-up, main stations, finish) out of an
//! embedded drill corpus. When the local corpus cannot fill every slot, the
//! assembler reports infeasibility and the hosting application falls back to
//! its LLM generation service.
//!
//! ## Features
//!
//! - **Relevance Scoring**: multi-criteria ranking of corpus drills against
//!   methodology, focus areas, ice configuration, and age category
//! - **Zone Layout**: deterministic partitioning of the rink surface into
//!   station zones, with a camera-view hint per zone
//! - **Session Assembly**: slot filling with per-session uniqueness, coach
//!   preference boosts, and custom drill integration
//! - **Knowledge Base**: embedded drill corpus and coaching methodology texts
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain structures (drills, requests, assembled sessions)
//! - [`knowledge`]: Static knowledge base (drill corpus, methodology texts)
//! - [`services`]: Pure computation services (scoring, zones, assembler)
//!
//! Everything here is synchronous and free of I/O: the corpus is read-only
//! process-wide data, every assembly call builds its own local state, and
//! concurrent calls need no locking. HTTP transport, persistence, and the
//! generation service are owned by the surrounding application.

pub mod knowledge;
pub mod models;
pub mod services;
