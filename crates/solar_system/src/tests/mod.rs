//! Cross-module tests
