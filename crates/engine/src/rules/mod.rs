//! Rule implementations for the recommendation pipeline.
//!
//! This module contains all the concrete rule implementations
//! that are composed into a RulePipeline. Their order in
//! [`RulePipeline::standard`](crate::RulePipeline::standard) is normative.

pub mod connectivity;
pub mod integration_shape;
pub mod mobile_reader;
pub mod regional_reader;
pub mod tap_to_pay;

// Re-export for convenience
pub use connectivity::ConnectivityRule;
pub use integration_shape::IntegrationShapeRule;
pub use mobile_reader::MobileReaderRule;
pub use regional_reader::RegionalReaderRule;
pub use tap_to_pay::TapToPayOverrideRule;
