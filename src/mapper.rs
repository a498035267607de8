//! Mapper - Editor State to Render Configs
//!
//! Output is always `navbar`, then one config per enabled, renderable
//! section in order, then `footer`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, Props, SectionKind};
use crate::store::{EditorState, SectionInstance};

pub const NAVBAR: &str = "navbar";
pub const FOOTER: &str = "footer";

/// One fully defaulted fragment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub resolved_props: Props,
}

pub fn map_state(state: &EditorState) -> Vec<RenderConfig> {
    map_with(Catalog::builtin(), state.sections())
}

pub fn map_with(catalog: &Catalog, sections: &[SectionInstance]) -> Vec<RenderConfig> {
    let mut configs = Vec::with_capacity(sections.len() + 2);
    configs.push(synthetic(catalog, NAVBAR));

    for section in sections.iter().filter(|s| s.enabled) {
        match catalog.get(&section.type_id).filter(|k| k.user_addable()) {
            Some(kind) => configs.push(RenderConfig {
                id: section.id.clone(),
                type_id: section.type_id.clone(),
                resolved_props: resolve_props(kind, &section.props),
            }),
            None => warn!(
                id = %section.id,
                type_id = %section.type_id,
                "unrecognized section type dropped from render"
            ),
        }
    }

    configs.push(synthetic(catalog, FOOTER));
    configs
}

fn synthetic(catalog: &Catalog, type_id: &str) -> RenderConfig {
    RenderConfig {
        id: type_id.to_string(),
        type_id: type_id.to_string(),
        resolved_props: catalog
            .get(type_id)
            .map(|k| resolve_props(k, &Props::new()))
            .unwrap_or_default(),
    }
}

/// Keep every prop the schema accepts, then fill absent or rejected keys from the fallbacks.
pub fn resolve_props(kind: &dyn SectionKind, props: &Props) -> Props {
    let schema = kind.schema();
    let mut resolved = Props::new();

    for (key, value) in props {
        match schema.iter().find(|f| f.key == key.as_str()) {
            Some(field) if !field.kind.accepts(value) => {
                debug!(type_id = kind.type_id(), key = %key, "invalid prop replaced by fallback");
            }
            _ => {
                resolved.insert(key.clone(), value.clone());
            }
        }
    }

    for (key, value) in kind.fallback_props() {
        if !resolved.contains_key(&key) {
            resolved.insert(key, value);
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn types(configs: &[RenderConfig]) -> Vec<&str> {
        configs.iter().map(|c| c.type_id.as_str()).collect()
    }

    #[test]
    fn test_empty_composition_has_navbar_and_footer() {
        let configs = map_state(&EditorState::default());
        assert_eq!(types(&configs), vec!["navbar", "footer"]);
    }

    #[test]
    fn test_disabled_sections_skipped() {
        let catalog = Catalog::builtin();
        let mut state = EditorState::default();
        for t in ["hero", "banner", "faq"] {
            state = store::add(&state, catalog, t).unwrap();
        }
        let banner = state.sections()[1].id.clone();
        let state = store::toggle(&state, &banner);
        let configs = map_state(&state);
        assert_eq!(types(&configs), vec!["navbar", "hero", "faq", "footer"]);
        assert_eq!(configs.len(), 2 + 2);
    }

    #[test]
    fn test_absent_props_use_fallbacks() {
        let kind = Catalog::builtin().get("hero").unwrap();
        let resolved = resolve_props(kind, &Props::new());
        assert_eq!(resolved.get("title"), kind.fallback_props().get("title"));
        assert!(resolved.get("height").is_some());
    }

    #[test]
    fn test_invalid_props_use_fallbacks() {
        let kind = Catalog::builtin().get("categories").unwrap();
        let props = json!({"columns": "lots", "showImages": false});
        let resolved = resolve_props(kind, props.as_object().unwrap());
        assert_eq!(resolved.get("columns"), kind.fallback_props().get("columns"));
        assert_eq!(resolved.get("showImages"), Some(&json!(false)));
    }

    #[test]
    fn test_unknown_and_synthetic_types_dropped() {
        let hero = Catalog::builtin().create("hero").unwrap();
        let stale = SectionInstance {
            id: "old-1".into(),
            type_id: "parallax".into(),
            label: "parallax".into(),
            icon: "?".into(),
            enabled: true,
            props: Props::new(),
        };
        let fake_footer = SectionInstance {
            id: "f-1".into(),
            type_id: FOOTER.into(),
            ..stale.clone()
        };
        let state = EditorState::new(vec![stale, hero, fake_footer]);
        let configs = map_state(&state);
        assert_eq!(types(&configs), vec!["navbar", "hero", "footer"]);
        assert_eq!(configs[2].id, FOOTER);
    }
}
