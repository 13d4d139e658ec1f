//! # Engine Crate
//!
//! The rule-evaluation core of the Terminal hardware advisor: a pure,
//! total, deterministic mapping from a [`selection::SelectionInput`] to a
//! [`selection::Recommendation`].
//!
//! ## Architecture
//! The logic is an ordered pipeline of small rules:
//! 1. Reader rules pick a hardware model (a later rule overwrites an
//!    earlier one; last-match-wins)
//! 2. The integration-shape rule picks an SDK path from the offline
//!    requirement and platform
//! 3. The connectivity rule picks a connection medium from the business
//!    type
//! 4. Tap to Pay overrides run last and replace both reader and
//!    connectivity for software-only readers
//!
//! There is no failure path: a combination no rule matches leaves the
//! corresponding output field as an empty string.
//!
//! ## Example Usage
//! ```ignore
//! use engine::evaluate;
//! use selection::SelectionInput;
//!
//! let rec = evaluate(&SelectionInput::default());
//! println!("{}", rec.reader);
//! ```

pub mod rule_pipeline;
pub mod rules;
pub mod traits;

// Re-export main types
pub use rule_pipeline::{evaluate, EvaluationTrace, RulePipeline};
pub use traits::Rule;
