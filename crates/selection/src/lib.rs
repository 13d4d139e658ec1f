//! # Selection Crate
//!
//! Domain types for the Terminal hardware questionnaire: the closed input
//! enumerations, the [`SelectionInput`] record the user assembles, the
//! [`Recommendation`] record the engine produces, and the static reader
//! catalog.
//!
//! This crate is pure data. It performs no I/O and holds no state; the one
//! fallible surface is parsing strings into the enumerations, which yields
//! a [`SelectionError`].

// Public modules
pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SelectionError};
pub use types::{
    BusinessType, Country, PosPlatform, PosSetup, ReaderType, Recommendation, SelectionInput,
};
