/// State management module
///
/// This module handles all editor state that is not pixels on screen:
/// - The open document and its lifecycle (session.rs)
/// - Shared data structures: export formats, document status, JSON printing (document.rs)
/// - Font zoom settings for the text buffer (zoom.rs)
///
/// Nothing in here touches the GUI toolkit, so every user action can be
/// exercised headless.

pub mod session;
pub mod document;
pub mod zoom;
