//! Core trait for the rule pipeline.
//!
//! This module defines the Rule trait that allows the recommendation logic
//! to be expressed as an ordered sequence of small, testable rules.

use selection::{Recommendation, SelectionInput};

/// One rule in the recommendation pipeline.
///
/// All rules must implement this trait to be used in the RulePipeline.
///
/// ## Design Note
/// - Rules mutate the `Recommendation` in place: the pipeline's semantics
///   are last-match-wins, so a later rule overwrites fields an earlier rule
///   set. A functional fold would hide that overwrite order.
/// - `apply` returns whether the rule matched (wrote anything). The pipeline
///   uses this for logging and for the evaluation trace; it never changes
///   the outcome.
/// - Rules are infallible. Unmatched inputs leave the output fields at their
///   defaults rather than producing an error.
/// - `Send + Sync` allows a pipeline to be shared across threads.
pub trait Rule: Send + Sync {
    /// Returns the name of this rule (for logging/tracing)
    fn name(&self) -> &str;

    /// Apply this rule to the recommendation under construction.
    ///
    /// # Arguments
    /// * `input` - The complete questionnaire selection
    /// * `rec` - The recommendation accumulated by earlier rules
    ///
    /// # Returns
    /// `true` if this rule matched and wrote at least one field.
    fn apply(&self, input: &SelectionInput, rec: &mut Recommendation) -> bool;
}
