/// Application state module
///
/// This module handles all headless gallery state, including:
/// - Project records and the cards derived from them (project.rs)
/// - The active filter and filter planning (filter.rs)
/// - The per-card reveal state machine (reveal.rs)
/// - The lightbox session with zoom and pan (modal.rs)
/// - Pointer gesture interpretation (gesture.rs)
/// - The polite status announcer (announce.rs)
/// - Color-contrast audit math (contrast.rs)

pub mod announce;
pub mod contrast;
pub mod filter;
pub mod gesture;
pub mod modal;
pub mod project;
pub mod reveal;
