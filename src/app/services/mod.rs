//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - File reading/decoding and atomic writing
//! - The file picker capability
//! - Text helpers for titles and names

pub mod file_io;
pub mod file_picker;
pub mod text_ops;
