//! Known-answer suites and shared fixtures for the vau workspace
pub mod fixtures;
pub mod suites;
