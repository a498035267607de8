//! Section Catalog - Registry of Section Types
//!
//! Every section type is one registered [`SectionKind`]: its catalog entry,
//! property schema, render fallbacks and fragment generator travel together,
//! so adding a type means registering one entry.

use std::sync::OnceLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{StudioError, StudioResult};
use crate::render::{is_safe_href, RenderContext};
use crate::sections;
use crate::store::{EditorState, SectionInstance};
use crate::theme::is_color_literal;

pub type SectionId = String;
pub type TypeId = String;

/// Property bag carried by a section instance.
pub type Props = serde_json::Map<String, Value>;

/// Catalog entry as consumed by the "add section" affordance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTypeDefinition {
    pub type_id: TypeId,
    pub label: String,
    pub icon: String,
    pub description: String,
    pub default_props: Props,
}

/// One editable property of a section type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: PropKind,
}

impl PropField {
    pub const fn new(key: &'static str, label: &'static str, kind: PropKind) -> Self {
        Self { key, label, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropKind {
    Text,
    LongText,
    Color,
    Link,
    Number { min: i64, max: i64 },
    Toggle,
    Select { options: &'static [&'static str] },
    /// List of plain strings (links, brand names).
    Tags,
    /// List of objects, each carrying the given string fields.
    Items { fields: &'static [&'static str] },
}

impl PropKind {
    /// Whether `value` can be embedded as-is for a field of this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            PropKind::Text | PropKind::LongText => {
                value.as_str().is_some_and(|s| !s.trim().is_empty())
            }
            PropKind::Color => value.as_str().is_some_and(is_color_literal),
            PropKind::Link => value.as_str().is_some_and(is_safe_href),
            PropKind::Number { min, max } => value
                .as_i64()
                .is_some_and(|n| (*min..=*max).contains(&n)),
            PropKind::Toggle => value.is_boolean(),
            PropKind::Select { options } => value
                .as_str()
                .is_some_and(|s| options.contains(&s)),
            PropKind::Tags => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            PropKind::Items { fields } => value.as_array().is_some_and(|items| {
                items.iter().all(|item| {
                    item.as_object().is_some_and(|obj| {
                        fields.iter().all(|f| obj.get(*f).is_some_and(Value::is_string))
                    })
                })
            }),
        }
    }
}

/// A registered section type.
pub trait SectionKind: Send + Sync {
    fn type_id(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn icon(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Props a freshly created instance starts with.
    fn default_props(&self) -> Props;

    /// Values embedded in markup when a prop is absent or invalid.
    fn fallback_props(&self) -> Props;

    fn schema(&self) -> Vec<PropField>;

    fn render(&self, props: &Props, ctx: &RenderContext<'_>) -> String;

    /// Synthetic kinds (navbar, footer) are never created by the user.
    fn user_addable(&self) -> bool {
        true
    }

    /// At most one instance per composition.
    fn single_instance(&self) -> bool {
        false
    }

    fn definition(&self) -> SectionTypeDefinition {
        SectionTypeDefinition {
            type_id: self.type_id().to_string(),
            label: self.label().to_string(),
            icon: self.icon().to_string(),
            description: self.description().to_string(),
            default_props: self.default_props(),
        }
    }
}

/// Registry of section kinds, in registration order.
pub struct Catalog {
    kinds: Vec<Box<dyn SectionKind>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// The process-wide catalog of built-in section types.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut catalog = Catalog::new();
            for kind in sections::builtin_kinds() {
                catalog.register(kind);
            }
            catalog
        })
    }

    /// Register a kind. A later registration replaces an earlier one with the same id.
    pub fn register(&mut self, kind: Box<dyn SectionKind>) {
        if let Some(slot) = self.kinds.iter_mut().find(|k| k.type_id() == kind.type_id()) {
            *slot = kind;
        } else {
            self.kinds.push(kind);
        }
    }

    pub fn get(&self, type_id: &str) -> Option<&dyn SectionKind> {
        self.kinds
            .iter()
            .find(|k| k.type_id() == type_id)
            .map(|k| k.as_ref())
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.get(type_id).is_some()
    }

    /// Catalog entries the user can add, in registration order.
    pub fn definitions(&self) -> Vec<SectionTypeDefinition> {
        self.kinds
            .iter()
            .filter(|k| k.user_addable())
            .map(|k| k.definition())
            .collect()
    }

    pub fn definition(&self, type_id: &str) -> Option<SectionTypeDefinition> {
        self.get(type_id)
            .filter(|k| k.user_addable())
            .map(|k| k.definition())
    }

    /// Entries still offered for `state`: single-instance types already present are hidden.
    pub fn addable(&self, state: &EditorState) -> Vec<SectionTypeDefinition> {
        self.kinds
            .iter()
            .filter(|k| k.user_addable())
            .filter(|k| !(k.single_instance() && state.contains_type(k.type_id())))
            .map(|k| k.definition())
            .collect()
    }

    /// Create a new instance of `type_id` with a fresh id and a copy of the default props.
    ///
    /// Ids combine the type, a millisecond timestamp and 48 random bits. Collisions are
    /// improbable, not impossible; callers that need a hard guarantee must check
    /// against the composition (see [`EditorState::contains`]).
    pub fn create(&self, type_id: &str) -> StudioResult<SectionInstance> {
        let kind = self
            .get(type_id)
            .filter(|k| k.user_addable())
            .ok_or_else(|| StudioError::UnknownSectionType(type_id.to_string()))?;

        Ok(SectionInstance {
            id: generate_id(type_id),
            type_id: type_id.to_string(),
            label: kind.label().to_string(),
            icon: kind.icon().to_string(),
            enabled: true,
            props: kind.default_props(),
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_id(type_id: &str) -> SectionId {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", type_id, Utc::now().timestamp_millis(), &token[..12])
}

/// Shallow merge of `patch` over `old`, the step callers perform before `update_props`.
pub fn merge_props(old: &Props, patch: &Props) -> Props {
    let mut merged = old.clone();
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_create_copies_default_props() {
        let catalog = Catalog::builtin();
        for def in catalog.definitions() {
            let section = catalog.create(&def.type_id).unwrap();
            assert_eq!(section.props, def.default_props);
            assert_eq!(section.type_id, def.type_id);
            assert!(section.enabled);
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = Catalog::builtin().create("carousel-3d").unwrap_err();
        assert!(matches!(err, StudioError::UnknownSectionType(ref t) if t == "carousel-3d"));
    }

    #[test]
    fn test_synthetic_types_not_creatable() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains("navbar"));
        assert!(catalog.create("navbar").is_err());
        assert!(catalog.create("footer").is_err());
        assert!(catalog.definitions().iter().all(|d| d.type_id != "footer"));
    }

    #[test]
    fn test_ids_distinct() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = (0..500)
            .map(|_| catalog.create("banner").unwrap().id)
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut catalog = Catalog::new();
        for kind in sections::builtin_kinds() {
            catalog.register(kind);
        }
        let before = catalog.definitions().len();
        for kind in sections::builtin_kinds() {
            catalog.register(kind);
        }
        assert_eq!(catalog.definitions().len(), before);
    }

    #[test]
    fn test_prop_kind_accepts() {
        assert!(PropKind::Text.accepts(&json!("hello")));
        assert!(!PropKind::Text.accepts(&json!("  ")));
        assert!(!PropKind::Text.accepts(&json!(3)));
        assert!(PropKind::Color.accepts(&json!("#00cec9")));
        assert!(!PropKind::Color.accepts(&json!("red;background:url(x)")));
        assert!(PropKind::Link.accepts(&json!("/products")));
        assert!(!PropKind::Link.accepts(&json!("javascript:alert(1)")));
        assert!(PropKind::Number { min: 2, max: 6 }.accepts(&json!(4)));
        assert!(!PropKind::Number { min: 2, max: 6 }.accepts(&json!(9)));
        assert!(PropKind::Select { options: &["small", "large"] }.accepts(&json!("small")));
        assert!(PropKind::Items { fields: &["q", "a"] }.accepts(&json!([{"q": "x", "a": "y"}])));
        assert!(!PropKind::Items { fields: &["q", "a"] }.accepts(&json!([{"q": "x"}])));
    }

    #[test]
    fn test_merge_props_overrides() {
        let old = json!({"title": "a", "subtitle": "b"});
        let patch = json!({"title": "c"});
        let merged = merge_props(old.as_object().unwrap(), patch.as_object().unwrap());
        assert_eq!(Value::Object(merged), json!({"title": "c", "subtitle": "b"}));
    }
}
