/// State management module
///
/// This module holds everything the screen knows, with no UI types:
/// - Shared data structures (data.rs)
/// - The bundled dataset loader (dataset.rs)
/// - Name search (filter.rs)
/// - Accordion and edit-mode state machine (selection.rs)
/// - The screen state that ties them together (screen.rs)

pub mod data;
pub mod dataset;
pub mod filter;
pub mod selection;
pub mod screen;
