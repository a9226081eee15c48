//! Environment-driven profiles shared by CI jobs and local runs.

pub mod property_test_profile;
