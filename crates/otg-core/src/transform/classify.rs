//! Marker classification of operation descriptions.
//!
//! Markers are fixed substrings matched case-sensitively anywhere in the
//! text, with no word-boundary requirement. The testability gate is a
//! separate function from the classifiers and deliberately narrower: only
//! the load-test and integration-test markers qualify an operation for
//! mapping, while classification also recognizes the security and
//! SQL-injection markers.

use crate::model::{AuthenticationType, TestType};

/// The ordered subset of test types whose marker occurs in the text.
pub fn test_types(description: &str) -> Vec<TestType> {
    TestType::ALL
        .iter()
        .copied()
        .filter(|t| description.contains(t.marker()))
        .collect()
}

/// The ordered subset of authentication types whose marker occurs in the text.
pub fn auth_types(description: &str) -> Vec<AuthenticationType> {
    AuthenticationType::ALL
        .iter()
        .copied()
        .filter(|a| description.contains(a.marker()))
        .collect()
}

/// Whether an operation qualifies for mapping at all.
pub fn is_testable(description: &str) -> bool {
    description.contains(TestType::LoadTest.marker())
        || description.contains(TestType::IntegrationTest.marker())
}
