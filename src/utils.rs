//! Utility functions shared across modules.

pub mod safe_cast;
