//! Document Renderer
//!
//! Turns render configs plus a theme into one self-contained HTML document.
//! The document is rebuilt from scratch on every call, carries no script and
//! references no external resource. Every user-authored string passes
//! through [`escape_html`] before it reaches markup.

mod escape;
mod style;

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{Catalog, SectionKind};
use crate::hashing::sha256_hex;
use crate::mapper::RenderConfig;
use crate::theme::ThemeRecord;

pub use escape::{css_value, escape_html, is_safe_href, safe_href};
pub use style::base_css;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static RENDER_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_render_call_count() -> u32 {
    RENDER_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_render_call_count() {
    RENDER_CALL_COUNT.store(0, Ordering::SeqCst);
}

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'none'; style-src 'unsafe-inline'; img-src data:; form-action 'none'";

/// What a fragment generator may read besides its own props.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store_name: &'a str,
    pub store_kind: &'a str,
    pub theme: &'a ThemeRecord,
}

impl RenderContext<'_> {
    /// Escaped store name for markup.
    pub fn name_html(&self) -> String {
        escape_html(self.store_name)
    }

    /// Domain-ish slug used in sample contact addresses.
    pub fn name_slug(&self) -> String {
        let slug: String = self
            .store_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if slug.is_empty() {
            "store".to_string()
        } else {
            escape_html(&slug)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub html: String,
    /// SHA-256 of `html`, hex encoded.
    pub fingerprint: String,
}

impl RenderedDocument {
    pub fn new(html: String) -> Self {
        let fingerprint = sha256_hex(html.as_bytes());
        Self { html, fingerprint }
    }

    /// `data:` URL suitable for an isolated preview frame.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:text/html;charset=utf-8;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(self.html.as_bytes())
        )
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }
}

/// Render with the built-in catalog.
pub fn render(
    store_name: &str,
    store_kind: &str,
    theme: &ThemeRecord,
    configs: &[RenderConfig],
) -> RenderedDocument {
    render_with(Catalog::builtin(), store_name, store_kind, theme, configs)
}

/// Render `configs` in order. A config whose type has no registered generator is skipped.
pub fn render_with(
    catalog: &Catalog,
    store_name: &str,
    store_kind: &str,
    theme: &ThemeRecord,
    configs: &[RenderConfig],
) -> RenderedDocument {
    #[cfg(feature = "test-hooks")]
    RENDER_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

    let ctx = RenderContext {
        store_name,
        store_kind,
        theme,
    };

    let mut body = String::new();
    for config in configs {
        match catalog.get(&config.type_id) {
            Some(kind) => {
                body.push_str(&kind.render(&config.resolved_props, &ctx));
                body.push('\n');
            }
            None => {
                warn!(id = %config.id, type_id = %config.type_id, "no generator for section type, skipped");
            }
        }
    }

    let name = ctx.name_html();
    let kind = escape_html(store_kind);
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="Content-Security-Policy" content="{csp}">
<meta name="store-kind" content="{kind}">
<title>{name}</title>
<style>{css}</style>
</head>
<body data-store-kind="{kind}">
{body}</body>
</html>
"#,
        csp = CONTENT_SECURITY_POLICY,
        css = base_css(theme),
    );

    RenderedDocument::new(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Props;
    use crate::theme;
    use serde_json::json;

    fn config(id: &str, type_id: &str, props: serde_json::Value) -> RenderConfig {
        RenderConfig {
            id: id.to_string(),
            type_id: type_id.to_string(),
            resolved_props: props.as_object().cloned().unwrap_or_else(Props::new),
        }
    }

    #[test]
    fn test_document_shell() {
        let doc = render("متجري", "general", &theme::build("#6c5ce7"), &[]);
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("<title>متجري</title>"));
        assert!(doc.html.contains(r#"<body data-store-kind="general">"#));
        assert!(doc.html.trim_end().ends_with("</html>"));
        assert!(!doc.html.contains("<script"));
        assert!(!doc.html.contains("https://"));
    }

    #[test]
    fn test_unknown_type_skipped() {
        let theme = theme::build("#6c5ce7");
        let configs = vec![
            config("navbar", "navbar", json!({})),
            config("x", "hologram", json!({"title": "never"})),
            config("footer", "footer", json!({})),
        ];
        let doc = render("Shop", "general", &theme, &configs);
        assert!(!doc.html.contains("never"));
        assert!(doc.html.contains(r#"data-section-type="navbar""#));
        assert!(doc.html.contains(r#"data-section-type="footer""#));
    }

    #[test]
    fn test_fragments_in_sequence_order() {
        let theme = theme::build("#6c5ce7");
        let configs = vec![
            config("b", "banner", json!({"text": "first"})),
            config("h", "hero", json!({"title": "second"})),
        ];
        let html = render("Shop", "general", &theme, &configs).html;
        let banner = html.find(r#"data-section-type="banner""#).unwrap();
        let hero = html.find(r#"data-section-type="hero""#).unwrap();
        assert!(banner < hero);
    }

    #[test]
    fn test_store_name_and_kind_escaped() {
        let doc = render("<b>Shop</b>", "\"kind\"", &theme::build("#6c5ce7"), &[]);
        assert!(doc.html.contains("<title>&lt;b&gt;Shop&lt;/b&gt;</title>"));
        assert!(doc.html.contains(r#"data-store-kind="&quot;kind&quot;""#));
    }

    #[test]
    fn test_fingerprint_and_data_url() {
        let doc = RenderedDocument::new("<p>hi</p>".to_string());
        assert_eq!(doc.fingerprint.len(), 64);
        assert_eq!(
            doc.to_data_url(),
            "data:text/html;charset=utf-8;base64,PHA+aGk8L3A+"
        );
    }

    #[test]
    fn test_name_slug() {
        let theme = theme::build("#6c5ce7");
        let ctx = RenderContext {
            store_name: "My Shop",
            store_kind: "general",
            theme: &theme,
        };
        assert_eq!(ctx.name_slug(), "myshop");
    }
}
