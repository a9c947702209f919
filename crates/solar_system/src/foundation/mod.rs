//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types, the Earth ratio projection and angle wrapping
//! - Frame time management
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
