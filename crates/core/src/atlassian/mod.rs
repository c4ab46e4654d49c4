/// Atlassian-related transformations (Jira)
///
/// This module contains pure transformation functions for Atlassian products.
/// All functions are free of I/O operations and testable with fixture data.
pub mod adf;
pub mod jira;
