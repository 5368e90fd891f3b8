//! User interface rendering layer.
//!
//! ```text
//! Session → compute_viewmodel → UIViewModel → render_frame → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Canvas, highlighting and formatting utilities
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, FooterInfo, HeaderInfo, PageButton, PaginationInfo, SearchBarInfo, StatusKind,
    StatusPanel, UIViewModel,
};
