//! Static knowledge base: the embedded drill corpus and the coaching
//! methodology texts. Pure read-only data, loaded once per process.

pub mod corpus;
pub mod methodology;

pub use corpus::drill_corpus;
pub use methodology::{find_methodology, Methodology, METHODOLOGIES};
