//! The RulePipeline orchestrates the recommendation rules.
//!
//! This module provides the RulePipeline struct that applies rules in a
//! fixed order, plus the [`evaluate`] front door most callers use.

use crate::rules::{
    ConnectivityRule, IntegrationShapeRule, MobileReaderRule, RegionalReaderRule,
    TapToPayOverrideRule,
};
use crate::traits::Rule;
use selection::{Recommendation, SelectionInput};
use serde::Serialize;
use tracing;

/// Applies rules in sequence to build a [`Recommendation`].
///
/// The pipeline is order-sensitive by design: each rule that matches
/// overwrites the fields it owns, so a later rule wins over an earlier one
/// (last-match-wins). Collapsing the rules into a single `if/else` chain
/// would change which reader survives for inputs where several rules match.
///
/// ## Usage
/// ```ignore
/// let pipeline = RulePipeline::standard();
/// let rec = pipeline.apply(&input);
/// ```
pub struct RulePipeline {
    rules: Vec<Box<dyn Rule>>,
}

/// Result of [`RulePipeline::apply_traced`]: the recommendation plus the
/// names of the rules that matched, in application order.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationTrace {
    pub recommendation: Recommendation,
    pub fired_rules: Vec<String>,
}

impl RulePipeline {
    /// Create a new empty RulePipeline.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The normative pipeline: the five rules in their required order.
    ///
    /// 1. Mobile reader (US + mPOS)
    /// 2. Regional reader (may overwrite 1)
    /// 3. Integration shape (independent field)
    /// 4. Connectivity (independent field)
    /// 5. Tap to Pay overrides (may overwrite reader and connectivity)
    pub fn standard() -> Self {
        Self::new()
            .add_rule(MobileReaderRule)
            .add_rule(RegionalReaderRule)
            .add_rule(IntegrationShapeRule)
            .add_rule(ConnectivityRule)
            .add_rule(TapToPayOverrideRule)
    }

    /// Add a rule to the pipeline (builder pattern).
    pub fn add_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Apply all rules in sequence and return the final recommendation.
    ///
    /// Total: every input yields a recommendation. Fields no rule matched
    /// stay at their empty-string defaults.
    pub fn apply(&self, input: &SelectionInput) -> Recommendation {
        let mut rec = Recommendation::default();
        for rule in &self.rules {
            let matched = rule.apply(input, &mut rec);
            tracing::debug!("Applied rule: {} (matched: {})", rule.name(), matched);
        }
        rec
    }

    /// Like [`apply`](RulePipeline::apply), but also report which rules
    /// matched. The recommendation is identical to what `apply` returns.
    pub fn apply_traced(&self, input: &SelectionInput) -> EvaluationTrace {
        let mut rec = Recommendation::default();
        let mut fired_rules = Vec::new();
        for rule in &self.rules {
            if rule.apply(input, &mut rec) {
                fired_rules.push(rule.name().to_string());
            }
        }
        EvaluationTrace {
            recommendation: rec,
            fired_rules,
        }
    }
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate one selection against the standard rule table.
///
/// Pure and deterministic; this is the function the CLI calls per input.
pub fn evaluate(input: &SelectionInput) -> Recommendation {
    RulePipeline::standard().apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection::{BusinessType, Country, PosPlatform, ReaderType};

    #[test]
    fn test_empty_pipeline_returns_defaults() {
        let pipeline = RulePipeline::new();
        let rec = pipeline.apply(&SelectionInput::default());

        assert_eq!(rec.reader, "");
        assert_eq!(rec.integration_shape, "");
        assert_eq!(rec.connectivity, "");
    }

    #[test]
    fn test_regional_rule_overwrites_mobile_rule() {
        // US + mPOS picks M2 first, then the countertop catch-all
        // overwrites it with S700.
        let input = SelectionInput {
            country: Country::Us,
            reader_type: ReaderType::Mpos,
            business_type: BusinessType::Countertop,
            ..SelectionInput::default()
        };

        let rec = RulePipeline::standard().apply(&input);
        assert_eq!(rec.reader, "S700");
    }

    #[test]
    fn test_mobile_rule_survives_when_regional_rule_misses() {
        let input = SelectionInput {
            country: Country::Us,
            reader_type: ReaderType::Mpos,
            business_type: BusinessType::Services,
            ..SelectionInput::default()
        };

        let rec = RulePipeline::standard().apply(&input);
        assert_eq!(rec.reader, "M2");
    }

    #[test]
    fn test_trace_reports_fired_rules_in_order() {
        let input = SelectionInput {
            country: Country::Us,
            reader_type: ReaderType::Mpos,
            business_type: BusinessType::Countertop,
            ..SelectionInput::default()
        };

        let trace = RulePipeline::standard().apply_traced(&input);
        assert_eq!(
            trace.fired_rules,
            vec![
                "MobileReaderRule",
                "RegionalReaderRule",
                "IntegrationShapeRule",
                "ConnectivityRule",
            ]
        );
    }

    #[test]
    fn test_trace_recommendation_matches_apply() {
        let input = SelectionInput {
            country: Country::Us,
            pos_platform: PosPlatform::Iphone,
            ..SelectionInput::default()
        };

        let pipeline = RulePipeline::standard();
        assert_eq!(pipeline.apply(&input), pipeline.apply_traced(&input).recommendation);
    }

    #[test]
    fn test_evaluate_uses_standard_pipeline() {
        let input = SelectionInput::default();
        assert_eq!(evaluate(&input), RulePipeline::standard().apply(&input));
    }
}
