// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod text;
pub mod triage;

pub use matcher::{Matcher, MatchOutcome, DEFAULT_LIMIT};
pub use scoring::score_facility;
pub use text::{normalize, tokenize};
pub use triage::{fallback_assessment, triage_symptoms};
