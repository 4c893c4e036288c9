//! Property-based tests for resource set rendering.
