//! Labeling tests
