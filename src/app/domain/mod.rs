//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and its change events
//! - Display font
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod font;
pub mod messages;
pub mod settings;

pub use document::{Document, DocumentEvent, Observer};
pub use font::{DisplayFont, FontFamily};
pub use messages::Message;
pub use settings::{AppSettings, DecodePolicy};
