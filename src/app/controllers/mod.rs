//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Editor (file picker + document I/O)
//! - View sync (keeps rendered text from echoing back as edits)

pub mod editor;
pub mod view_sync;
