//! Trustable score widget.
//!
//! Discovers marker elements on a host page, resolves a score per marker
//! and renders either the full card or the compact badge into it.
//!
//! The host page is abstracted behind [`HostPage`] / [`MarkerElement`];
//! [`Document`] is an in-memory implementation used for static previews
//! and tests.

pub mod config;
pub mod controller;
pub mod document;
pub mod embed;
pub mod host;
pub mod render;
pub mod style;

pub use config::{Variant, WidgetConfig, WidgetConfigError};
pub use controller::{Outcome, Widget};
pub use document::{Document, Element};
pub use embed::embed_snippet;
pub use host::{is_marker, HostPage, MarkerElement, MARKER_CLASS, MARKER_ID};
pub use render::Renderer;
pub use style::{ensure_styles, STYLESHEET, STYLE_ELEMENT_ID};
