//! Physics module for collision detection
//!
//! Provides narrow-phase overlap tests for the circular hit areas used by
//! arcade entities.

pub mod collision;

pub use collision::BoundingCircle;
