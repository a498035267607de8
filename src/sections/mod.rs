//! Built-in section types.
//!
//! Each type is a [`BuiltinSection`] record: catalog metadata, defaults,
//! fallbacks, schema and a fragment generator. Generators read props only
//! through the helpers below, which escape every string they return.

mod chrome;
mod content;
mod promo;
mod showcase;

use serde_json::Value;

use crate::catalog::{PropField, Props, SectionKind};
use crate::render::{escape_html, safe_href, RenderContext};
use crate::theme::is_color_literal;

pub(crate) struct BuiltinSection {
    pub type_id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub defaults: fn() -> Value,
    pub fallbacks: fn() -> Value,
    pub schema: fn() -> Vec<PropField>,
    pub render: fn(&Props, &RenderContext<'_>) -> String,
    pub addable: bool,
    pub single: bool,
}

impl SectionKind for BuiltinSection {
    fn type_id(&self) -> &'static str {
        self.type_id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn icon(&self) -> &'static str {
        self.icon
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn default_props(&self) -> Props {
        into_props((self.defaults)())
    }

    fn fallback_props(&self) -> Props {
        into_props((self.fallbacks)())
    }

    fn schema(&self) -> Vec<PropField> {
        (self.schema)()
    }

    fn render(&self, props: &Props, ctx: &RenderContext<'_>) -> String {
        (self.render)(props, ctx)
    }

    fn user_addable(&self) -> bool {
        self.addable
    }

    fn single_instance(&self) -> bool {
        self.single
    }
}

/// All built-in kinds in catalog order; navbar and footer are synthetic.
pub(crate) fn builtin_kinds() -> Vec<Box<dyn SectionKind>> {
    [
        chrome::NAVBAR,
        promo::HERO,
        showcase::CATEGORIES,
        showcase::FEATURED_PRODUCTS,
        promo::BANNER,
        content::TESTIMONIALS,
        content::FEATURES,
        promo::NEWSLETTER,
        showcase::BRANDS,
        showcase::GALLERY,
        content::FAQ,
        showcase::STATS,
        promo::CTA,
        content::CONTACT,
        content::SPACER,
        chrome::FOOTER,
    ]
    .into_iter()
    .map(|kind| Box::new(kind) as Box<dyn SectionKind>)
    .collect()
}

fn into_props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}

fn no_props() -> Value {
    Value::Object(Props::new())
}

// --- prop readers ---

/// Escaped string prop, empty when absent or not a string.
fn text(props: &Props, key: &str) -> String {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(escape_html)
        .unwrap_or_default()
}

fn int(props: &Props, key: &str, default: i64, min: i64, max: i64) -> i64 {
    props
        .get(key)
        .and_then(Value::as_i64)
        .unwrap_or(default)
        .clamp(min, max)
}

fn flag(props: &Props, key: &str) -> bool {
    props.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn color(props: &Props, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(Value::as_str)
        .filter(|c| is_color_literal(c))
        .map(|c| c.trim().to_string())
}

fn link(props: &Props, key: &str) -> String {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(safe_href)
        .unwrap_or_else(|| "#".to_string())
}

fn tags(props: &Props, key: &str) -> Vec<String> {
    props
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(escape_html)
                .collect()
        })
        .unwrap_or_default()
}

/// Escaped fields of every list entry that carries all of `fields`.
fn items(props: &Props, key: &str, fields: &[&str]) -> Vec<Vec<String>> {
    let Some(entries) = props.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            fields
                .iter()
                .map(|f| entry.get(*f).and_then(Value::as_str).map(escape_html))
                .collect::<Option<Vec<_>>>()
        })
        .collect()
}

fn section_header(title: &str, subtitle: &str) -> String {
    let subtitle = if subtitle.is_empty() {
        String::new()
    } else {
        format!("<p>{subtitle}</p>")
    };
    format!(r#"<div class="section-header"><h2>{title}</h2>{subtitle}<div class="line"></div></div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::mapper::resolve_props;
    use crate::theme;
    use serde_json::json;

    fn obj(value: Value) -> Props {
        into_props(value)
    }

    #[test]
    fn test_defaults_and_fallbacks_satisfy_schema() {
        for kind in builtin_kinds() {
            let schema = kind.schema();
            for (key, value) in kind.fallback_props().iter().chain(kind.default_props().iter()) {
                let field = schema
                    .iter()
                    .find(|f| f.key == key.as_str())
                    .unwrap_or_else(|| panic!("{}.{} has no schema field", kind.type_id(), key));
                assert!(
                    field.kind.accepts(value),
                    "{}.{} rejected by its own schema",
                    kind.type_id(),
                    key
                );
            }
        }
    }

    #[test]
    fn test_every_generator_tags_its_fragment() {
        let theme = theme::build("#6c5ce7");
        let ctx = RenderContext {
            store_name: "Shop",
            store_kind: "general",
            theme: &theme,
        };
        for kind in builtin_kinds() {
            let props = resolve_props(kind.as_ref(), &Props::new());
            let html = kind.render(&props, &ctx);
            let marker = format!(r#"data-section-type="{}""#, kind.type_id());
            assert!(html.contains(&marker), "{} fragment lacks its marker", kind.type_id());
        }
    }

    #[test]
    fn test_generators_survive_hostile_props() {
        let theme = theme::build("#6c5ce7");
        let ctx = RenderContext {
            store_name: "Shop",
            store_kind: "general",
            theme: &theme,
        };
        let payload = "<img src=x onerror=alert(1)>";
        for kind in builtin_kinds() {
            let mut props = Props::new();
            for field in kind.schema() {
                props.insert(field.key.to_string(), json!(payload));
            }
            let html = kind.render(&props, &ctx);
            assert!(!html.contains("<img"), "{} leaked markup", kind.type_id());
        }
    }

    #[test]
    fn test_readers() {
        let props = obj(json!({
            "title": "a<b",
            "n": 99,
            "on": true,
            "bg": "#fff",
            "bad": "red;x",
            "href": "javascript:alert(1)",
            "tags": ["x", 1, "<y>"],
            "items": [{"q": "1", "a": "2"}, {"q": "only"}]
        }));
        assert_eq!(text(&props, "title"), "a&lt;b");
        assert_eq!(text(&props, "missing"), "");
        assert_eq!(int(&props, "n", 3, 1, 6), 6);
        assert_eq!(int(&props, "missing", 3, 1, 6), 3);
        assert!(flag(&props, "on"));
        assert_eq!(color(&props, "bg").as_deref(), Some("#fff"));
        assert_eq!(color(&props, "bad"), None);
        assert_eq!(link(&props, "href"), "#");
        assert_eq!(tags(&props, "tags"), vec!["x", "&lt;y&gt;"]);
        assert_eq!(items(&props, "items", &["q", "a"]), vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_catalog_lists_core_types() {
        let ids: Vec<_> = Catalog::builtin()
            .definitions()
            .into_iter()
            .map(|d| d.type_id)
            .collect();
        for expected in [
            "hero",
            "categories",
            "featured_products",
            "banner",
            "testimonials",
            "features",
            "newsletter",
            "brands",
            "gallery",
            "faq",
        ] {
            assert!(ids.iter().any(|id| id == expected), "missing {expected}");
        }
    }
}
