//! Editor Session - Single Entry Point
//!
//! Every editing command goes through [`EditorSession`]: it applies the pure
//! store operation, commits the result to history, and keeps the preview
//! document in step with the state and theme.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::{merge_props, Catalog, Props, SectionId, SectionKind, TypeId};
use crate::config::PreviewConfig;
use crate::error::{StudioError, StudioResult};
use crate::hashing::content_hash;
use crate::history::History;
use crate::mapper::{map_with, RenderConfig};
use crate::render::{render_with, RenderedDocument};
use crate::store::{self, EditorState, SectionInstance};
use crate::theme::{self, ThemeRecord};

/// Types seeded by [`EditorSession::with_defaults`].
pub const DEFAULT_LAYOUT: &[&str] = &["hero", "categories", "featured_products", "features"];

/// Persisted shape of one section. Carries no renderer-internal fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSection {
    pub id: SectionId,
    pub type_id: TypeId,
    pub enabled: bool,
    #[serde(default)]
    pub props: Props,
}

impl From<&SectionInstance> for SavedSection {
    fn from(section: &SectionInstance) -> Self {
        Self {
            id: section.id.clone(),
            type_id: section.type_id.clone(),
            enabled: section.enabled,
            props: section.props.clone(),
        }
    }
}

/// One editing command, as read from a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    Add { type_id: TypeId },
    Remove { id: SectionId },
    Toggle { id: SectionId },
    #[serde(rename_all = "camelCase")]
    Reorder { id: SectionId, target_index: usize },
    UpdateProps { id: SectionId, props: Props },
    SetProp { id: SectionId, key: String, value: Value },
    SetActive {
        #[serde(default)]
        id: Option<SectionId>,
    },
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DragPreview {
    id: SectionId,
    origin: usize,
    target: usize,
}

/// Serialized form of everything the preview depends on; hashed for memoization.
#[derive(Serialize)]
struct PreviewInputs<'a> {
    store_name: &'a str,
    store_kind: &'a str,
    theme: &'a ThemeRecord,
    configs: &'a [RenderConfig],
}

pub struct EditorSession {
    catalog: &'static Catalog,
    history: History<EditorState>,
    store_name: String,
    store_kind: String,
    theme: ThemeRecord,
    drag: Option<DragPreview>,
    memo: Option<(String, RenderedDocument)>,
}

impl EditorSession {
    /// Empty composition, default preview settings.
    pub fn new() -> Self {
        Self::from_state(EditorState::default())
    }

    pub fn from_state(state: EditorState) -> Self {
        let config = PreviewConfig::default();
        Self {
            catalog: Catalog::builtin(),
            history: History::new(state),
            theme: theme::build(&config.primary_color),
            store_name: config.store_name,
            store_kind: config.store_kind,
            drag: None,
            memo: None,
        }
    }

    /// The starter composition a new store opens with.
    pub fn with_defaults() -> StudioResult<Self> {
        let catalog = Catalog::builtin();
        let mut state = EditorState::default();
        for type_id in DEFAULT_LAYOUT {
            let section = catalog.create(type_id)?;
            state = store::push(&state, section);
        }
        Ok(Self::from_state(state))
    }

    /// Seed a fresh session from a saved layout: one snapshot, cursor 0.
    ///
    /// Type ids the catalog no longer knows are kept (the mapper drops them);
    /// a repeated or empty id rejects the whole layout.
    pub fn load(layout: Vec<SavedSection>) -> StudioResult<Self> {
        Self::load_with(Catalog::builtin(), layout)
    }

    pub fn load_with(catalog: &'static Catalog, layout: Vec<SavedSection>) -> StudioResult<Self> {
        let mut seen = HashSet::new();
        let mut sections = Vec::with_capacity(layout.len());

        for saved in layout {
            if saved.id.trim().is_empty() {
                return Err(StudioError::InvalidLayout("section with empty id".into()));
            }
            if !seen.insert(saved.id.clone()) {
                return Err(StudioError::InvalidLayout(format!(
                    "duplicate section id: {}",
                    saved.id
                )));
            }
            let (label, icon) = match catalog.get(&saved.type_id) {
                Some(kind) => (kind.label().to_string(), kind.icon().to_string()),
                None => {
                    debug!(type_id = %saved.type_id, "layout references unknown section type");
                    (saved.type_id.clone(), "❔".to_string())
                }
            };
            sections.push(SectionInstance {
                id: saved.id,
                type_id: saved.type_id,
                label,
                icon,
                enabled: saved.enabled,
                props: saved.props,
            });
        }

        let mut session = Self::from_state(EditorState::new(sections));
        session.catalog = catalog;
        Ok(session)
    }

    pub fn load_json(json: &str) -> StudioResult<Self> {
        let layout: Vec<SavedSection> = serde_json::from_str(json)?;
        Self::load(layout)
    }

    /// Use `catalog` for creation, mapping and rendering.
    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = catalog;
        self.memo = None;
        self
    }

    /// Apply store name, kind and primary color from `config`.
    pub fn with_config(mut self, config: &PreviewConfig) -> Self {
        self.store_name = config.store_name.clone();
        self.store_kind = config.store_kind.clone();
        self.theme = theme::build(&config.primary_color);
        self
    }

    // --- queries ---

    pub fn state(&self) -> &EditorState {
        self.history.current()
    }

    pub fn sections(&self) -> &[SectionInstance] {
        self.state().sections()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state().active_id()
    }

    pub fn active_section(&self) -> Option<&SectionInstance> {
        self.state().active_section()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn theme(&self) -> &ThemeRecord {
        &self.theme
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn store_kind(&self) -> &str {
        &self.store_kind
    }

    pub fn save(&self) -> Vec<SavedSection> {
        self.sections().iter().map(SavedSection::from).collect()
    }

    pub fn save_json(&self) -> StudioResult<String> {
        Ok(serde_json::to_string_pretty(&self.save())?)
    }

    // --- commands ---

    /// Record `next` as the new visible snapshot and end any drag gesture.
    fn commit(&mut self, op: &'static str, next: EditorState) -> &EditorState {
        self.drag = None;
        debug!(op, sections = next.len(), "command committed");
        self.history.record(next)
    }

    /// A command naming a missing id leaves state and history untouched.
    fn stale(&self, op: &'static str, id: &str) -> &EditorState {
        debug!(op, id, "stale id, command not recorded");
        self.state()
    }

    /// Append a new section of `type_id`. A single-instance type that is
    /// already present is rejected without an undo step.
    pub fn add(&mut self, type_id: &str) -> StudioResult<&EditorState> {
        let next = store::add(self.state(), self.catalog, type_id)?;
        if next == *self.state() {
            debug!(type_id, "add rejected, command not recorded");
            return Ok(self.state());
        }
        Ok(self.commit("add", next))
    }

    pub fn remove(&mut self, id: &str) -> &EditorState {
        if !self.state().contains(id) {
            return self.stale("remove", id);
        }
        let next = store::remove(self.state(), id);
        self.commit("remove", next)
    }

    pub fn toggle(&mut self, id: &str) -> &EditorState {
        if !self.state().contains(id) {
            return self.stale("toggle", id);
        }
        let next = store::toggle(self.state(), id);
        self.commit("toggle", next)
    }

    /// Moving a section onto its own index still records an undo step.
    pub fn reorder(&mut self, id: &str, target_index: usize) -> &EditorState {
        if !self.state().contains(id) {
            return self.stale("reorder", id);
        }
        let next = store::reorder(self.state(), id, target_index);
        self.commit("reorder", next)
    }

    /// Replace the whole prop map of `id`.
    pub fn update_props(&mut self, id: &str, props: Props) -> &EditorState {
        if !self.state().contains(id) {
            return self.stale("update_props", id);
        }
        let next = store::update_props(self.state(), id, props);
        self.commit("update_props", next)
    }

    /// Merge `patch` over the current props of `id`, then replace.
    pub fn patch_props(&mut self, id: &str, patch: &Props) -> &EditorState {
        let Some(section) = self.state().get(id) else {
            return self.stale("patch_props", id);
        };
        let merged = merge_props(&section.props, patch);
        self.update_props(id, merged)
    }

    pub fn set_prop(&mut self, id: &str, key: &str, value: Value) -> &EditorState {
        let mut patch = Props::new();
        patch.insert(key.to_string(), value);
        self.patch_props(id, &patch)
    }

    /// Change the selection. Not an undo step: the visible snapshot is replaced.
    pub fn set_active(&mut self, id: Option<&str>) -> &EditorState {
        let next = store::set_active(self.state(), id);
        self.history.replace_current(next)
    }

    pub fn undo(&mut self) -> &EditorState {
        self.drag = None;
        self.history.undo()
    }

    pub fn redo(&mut self) -> &EditorState {
        self.drag = None;
        self.history.redo()
    }

    pub fn apply(&mut self, command: Command) -> StudioResult<&EditorState> {
        let state = match command {
            Command::Add { type_id } => return self.add(&type_id),
            Command::Remove { id } => self.remove(&id),
            Command::Toggle { id } => self.toggle(&id),
            Command::Reorder { id, target_index } => self.reorder(&id, target_index),
            Command::UpdateProps { id, props } => self.update_props(&id, props),
            Command::SetProp { id, key, value } => self.set_prop(&id, &key, value),
            Command::SetActive { id } => self.set_active(id.as_deref()),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        };
        Ok(state)
    }

    // --- drag preview ---

    /// Start dragging `id`. Returns `false` for a stale id.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        match self.state().position(id) {
            Some(origin) => {
                self.drag = Some(DragPreview {
                    id: id.to_string(),
                    origin,
                    target: origin,
                });
                true
            }
            None => {
                debug!(id, "begin_drag on stale id");
                false
            }
        }
    }

    /// Move the dragged section over `target_index` and return the preview order.
    /// Nothing is recorded.
    pub fn drag_over(&mut self, target_index: usize) -> Option<EditorState> {
        let drag = self.drag.as_mut()?;
        drag.target = target_index;
        Some(store::reorder(self.history.current(), &drag.id, target_index))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Finish the gesture: at most one `reorder` is committed.
    pub fn drop_drag(&mut self) -> &EditorState {
        match self.drag.take() {
            Some(drag) if drag.target != drag.origin => self.reorder(&drag.id, drag.target),
            _ => self.state(),
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    // --- preview ---

    pub fn set_primary_color(&mut self, color: &str) {
        self.theme = theme::build(color);
    }

    pub fn set_store_name(&mut self, name: &str) {
        self.store_name = name.to_string();
    }

    pub fn set_store_kind(&mut self, kind: &str) {
        self.store_kind = kind.to_string();
    }

    pub fn render_configs(&self) -> Vec<RenderConfig> {
        map_with(self.catalog, self.sections())
    }

    /// Current preview document. Rebuilt whenever the state, theme or store
    /// labels differ from the last call.
    pub fn preview(&mut self) -> StudioResult<&RenderedDocument> {
        let configs = self.render_configs();
        let key = content_hash(&PreviewInputs {
            store_name: &self.store_name,
            store_kind: &self.store_kind,
            theme: &self.theme,
            configs: &configs,
        })?;

        let memo = match self.memo.take() {
            Some((cached, doc)) if cached == key => {
                debug!("preview cache hit");
                (cached, doc)
            }
            _ => {
                let doc = render_with(
                    self.catalog,
                    &self.store_name,
                    &self.store_kind,
                    &self.theme,
                    &configs,
                );
                (key, doc)
            }
        };
        let (_, doc) = self.memo.insert(memo);
        Ok(&*doc)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
