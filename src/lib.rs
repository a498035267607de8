//! Storecraft Core - Storefront Section Composer
//!
//! # Guarantees
//! 1. Snapshots Are Immutable: every edit yields a new state
//! 2. Stale References Are No-Ops: the editor never fails on a removed id
//! 3. Navbar First, Footer Last: in every render
//! 4. Deterministic Output: equal inputs give byte-identical documents
//! 5. Escaped Always: no prop value can alter document structure
//! 6. One Registry: catalog, defaults, schema and markup live together

pub mod catalog;
pub mod config;
pub mod error;
pub mod hashing;
pub mod history;
pub mod mapper;
pub mod render;
mod sections;
pub mod session;
pub mod store;
pub mod theme;

pub use catalog::{merge_props, Catalog, PropField, PropKind, Props, SectionKind, SectionTypeDefinition};
pub use config::PreviewConfig;
pub use error::{StudioError, StudioResult};
pub use hashing::{canonical_json, content_hash, sha256_hex};
pub use history::History;
pub use mapper::{map_state, map_with, RenderConfig};
pub use render::{escape_html, render, render_with, RenderContext, RenderedDocument};
pub use session::{Command, EditorSession, SavedSection};
pub use store::{EditorState, SectionInstance};
pub use theme::{build as build_theme, ThemeRecord};
