//! Section Store - Immutable Editor Snapshots
//!
//! Every operation takes the current state by reference and returns a new
//! one. A reference to an id that no longer exists leaves the state unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Props, SectionId, SectionKind, TypeId};
use crate::error::StudioResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
    pub id: SectionId,
    pub type_id: TypeId,
    pub label: String,
    pub icon: String,
    pub enabled: bool,
    pub props: Props,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    sections: Vec<SectionInstance>,
    #[serde(default)]
    active_id: Option<SectionId>,
}

impl EditorState {
    pub fn new(sections: Vec<SectionInstance>) -> Self {
        Self { sections, active_id: None }
    }

    pub fn sections(&self) -> &[SectionInstance] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SectionInstance> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn contains_type(&self, type_id: &str) -> bool {
        self.sections.iter().any(|s| s.type_id == type_id)
    }

    /// The selected id, only while it still names a section.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id
            .as_deref()
            .filter(|id| self.contains(id))
    }

    pub fn active_section(&self) -> Option<&SectionInstance> {
        self.active_id().and_then(|id| self.get(id))
    }

    fn with_sections(&self, sections: Vec<SectionInstance>) -> Self {
        Self {
            sections,
            active_id: self.active_id.clone(),
        }
    }

    /// Replace the section at `id` with `f(section)`, or return `None` for a stale id.
    fn replace_section<F>(&self, id: &str, f: F) -> Option<Self>
    where
        F: FnOnce(&SectionInstance) -> SectionInstance,
    {
        let index = self.position(id)?;
        let mut sections = self.sections.clone();
        sections[index] = f(&self.sections[index]);
        Some(self.with_sections(sections))
    }
}

/// Append a catalog-created section and select it.
///
/// A single-instance type that is already present leaves the state unchanged.
pub fn add(state: &EditorState, catalog: &Catalog, type_id: &str) -> StudioResult<EditorState> {
    let section = catalog.create(type_id)?;

    let single = catalog.get(type_id).is_some_and(|k| k.single_instance());
    if single && state.contains_type(type_id) {
        debug!(type_id, "single-instance section already present");
        return Ok(state.clone());
    }

    let active_id = Some(section.id.clone());
    let mut sections = state.sections.clone();
    sections.push(section);
    Ok(EditorState { sections, active_id })
}

/// Insert an already-built section (layout import, tests) at the end.
pub fn push(state: &EditorState, section: SectionInstance) -> EditorState {
    if state.contains(&section.id) {
        debug!(id = %section.id, "duplicate section id ignored");
        return state.clone();
    }
    let mut sections = state.sections.clone();
    sections.push(section);
    state.with_sections(sections)
}

pub fn remove(state: &EditorState, id: &str) -> EditorState {
    if !state.contains(id) {
        debug!(id, "remove on stale id");
        return state.clone();
    }
    let sections = state.sections.iter().filter(|s| s.id != id).cloned().collect();
    let active_id = state.active_id.clone().filter(|active| active != id);
    EditorState { sections, active_id }
}

pub fn toggle(state: &EditorState, id: &str) -> EditorState {
    state
        .replace_section(id, |s| SectionInstance {
            enabled: !s.enabled,
            ..s.clone()
        })
        .unwrap_or_else(|| {
            debug!(id, "toggle on stale id");
            state.clone()
        })
}

/// Move `id` to `target_index`, computed against the sequence without it.
/// Indices past the end clamp to the last position.
pub fn reorder(state: &EditorState, id: &str, target_index: usize) -> EditorState {
    let Some(from) = state.position(id) else {
        debug!(id, "reorder on stale id");
        return state.clone();
    };
    let mut sections = state.sections.clone();
    let moved = sections.remove(from);
    let to = target_index.min(sections.len());
    sections.insert(to, moved);
    state.with_sections(sections)
}

/// Replace the whole prop map of `id`. No merging happens here.
pub fn update_props(state: &EditorState, id: &str, props: Props) -> EditorState {
    state
        .replace_section(id, |s| SectionInstance {
            props,
            ..s.clone()
        })
        .unwrap_or_else(|| {
            debug!(id, "update_props on stale id");
            state.clone()
        })
}

/// Select `id`, or clear the selection with `None`. A stale id is ignored.
pub fn set_active(state: &EditorState, id: Option<&str>) -> EditorState {
    match id {
        Some(id) if !state.contains(id) => {
            debug!(id, "set_active on stale id");
            state.clone()
        }
        _ => EditorState {
            sections: state.sections.clone(),
            active_id: id.map(str::to_string),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ids(state: &EditorState) -> Vec<&str> {
        state.sections().iter().map(|s| s.id.as_str()).collect()
    }

    fn sample() -> EditorState {
        let catalog = Catalog::builtin();
        let mut state = EditorState::default();
        for type_id in ["hero", "categories", "banner", "faq"] {
            state = add(&state, catalog, type_id).unwrap();
        }
        state
    }

    #[test]
    fn test_add_appends_and_selects() {
        let state = sample();
        assert_eq!(state.len(), 4);
        let last = &state.sections()[3];
        assert_eq!(last.type_id, "faq");
        assert_eq!(state.active_id(), Some(last.id.as_str()));
    }

    #[test]
    fn test_add_unknown_type_fails() {
        let state = sample();
        assert!(add(&state, Catalog::builtin(), "nope").is_err());
    }

    #[test]
    fn test_add_single_instance_twice_is_noop() {
        let state = sample();
        let again = add(&state, Catalog::builtin(), "hero").unwrap();
        assert_eq!(again, state);
    }

    #[test]
    fn test_remove_preserves_order_and_clears_active() {
        let state = sample();
        let faq = state.sections()[3].id.clone();
        let banner = state.sections()[2].id.clone();
        let next = remove(&state, &faq);
        assert_eq!(next.len(), 3);
        assert_eq!(next.active_id(), None);
        assert_eq!(next.sections()[2].id, banner);
        // the input snapshot is untouched
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_stale_ids_are_noops() {
        let state = sample();
        assert_eq!(remove(&state, "ghost"), state);
        assert_eq!(toggle(&state, "ghost"), state);
        assert_eq!(reorder(&state, "ghost", 0), state);
        assert_eq!(update_props(&state, "ghost", Props::new()), state);
        assert_eq!(set_active(&state, Some("ghost")), state);
    }

    #[test]
    fn test_toggle_flips_in_place() {
        let state = sample();
        let id = state.sections()[1].id.clone();
        let next = toggle(&state, &id);
        assert!(!next.sections()[1].enabled);
        assert_eq!(ids(&next), ids(&state));
        assert!(toggle(&next, &id).sections()[1].enabled);
    }

    #[test]
    fn test_reorder_is_stable_move() {
        let state = sample();
        let before = ids(&state).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let next = reorder(&state, &before[0], 2);
        assert_eq!(
            ids(&next),
            vec![before[1].as_str(), before[2].as_str(), before[0].as_str(), before[3].as_str()]
        );
    }

    #[test]
    fn test_reorder_clamps() {
        let state = sample();
        let first = state.sections()[0].id.clone();
        let next = reorder(&state, &first, 99);
        assert_eq!(next.sections()[3].id, first);
    }

    #[test]
    fn test_update_props_replaces_whole_map() {
        let state = sample();
        let id = state.sections()[0].id.clone();
        let props = json!({"title": "Only"}).as_object().unwrap().clone();
        let next = update_props(&state, &id, props.clone());
        assert_eq!(next.get(&id).unwrap().props, props);
    }

    #[test]
    fn test_active_resolves_by_lookup() {
        let state = sample();
        let id = state.sections()[0].id.clone();
        let selected = set_active(&state, Some(&id));
        assert_eq!(selected.active_section().unwrap().id, id);
        assert_eq!(set_active(&selected, None).active_id(), None);
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let state = sample();
        let dup = state.sections()[0].clone();
        assert_eq!(push(&state, dup), state);
    }
}
