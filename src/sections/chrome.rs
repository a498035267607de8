//! Navbar and footer: injected around every composition, never user-created.

use serde_json::json;

use super::{no_props, tags, text, BuiltinSection};
use crate::catalog::{PropField, PropKind, Props};
use crate::render::RenderContext;

pub(crate) const NAVBAR: BuiltinSection = BuiltinSection {
    type_id: "navbar",
    label: "شريط التنقل",
    icon: "🧭",
    description: "شعار المتجر وروابط التنقل",
    defaults: no_props,
    fallbacks: navbar_fallbacks,
    schema: navbar_schema,
    render: render_navbar,
    addable: false,
    single: true,
};

pub(crate) const FOOTER: BuiltinSection = BuiltinSection {
    type_id: "footer",
    label: "تذييل الصفحة",
    icon: "📄",
    description: "روابط المتجر وحقوق النشر",
    defaults: no_props,
    fallbacks: footer_fallbacks,
    schema: footer_schema,
    render: render_footer,
    addable: false,
    single: true,
};

fn navbar_fallbacks() -> serde_json::Value {
    json!({
        "links": ["الرئيسية", "المنتجات", "العروض", "من نحن", "تواصل معنا"],
        "cta": "تسوق الآن",
    })
}

fn navbar_schema() -> Vec<PropField> {
    vec![
        PropField::new("links", "الروابط", PropKind::Tags),
        PropField::new("cta", "نص الزر", PropKind::Text),
    ]
}

fn render_navbar(props: &Props, ctx: &RenderContext<'_>) -> String {
    let links: String = tags(props, "links")
        .iter()
        .map(|l| format!(r##"<a href="#">{l}</a>"##))
        .collect();
    format!(
        r##"<nav class="navbar" data-section-type="navbar"><div class="navbar-inner"><span class="logo">{name}</span><div class="nav-links">{links}</div><a href="#products" class="btn btn-p btn-sm">{cta}</a></div></nav>"##,
        name = ctx.name_html(),
        cta = text(props, "cta"),
    )
}

fn footer_fallbacks() -> serde_json::Value {
    json!({
        "about": "نسعى لتقديم أفضل تجربة تسوق إلكتروني. نختار لكم أجود المنتجات بعناية فائقة.",
        "shopLinks": ["جميع المنتجات", "المجموعات", "العروض", "وصل حديثاً"],
        "serviceLinks": ["تتبع الطلب", "سياسة الإرجاع", "الشحن والتوصيل", "تواصل معنا"],
        "aboutLinks": ["من نحن", "سياسة الخصوصية", "الشروط والأحكام"],
    })
}

fn footer_schema() -> Vec<PropField> {
    vec![
        PropField::new("about", "نبذة", PropKind::LongText),
        PropField::new("shopLinks", "روابط المتجر", PropKind::Tags),
        PropField::new("serviceLinks", "روابط خدمة العملاء", PropKind::Tags),
        PropField::new("aboutLinks", "روابط عن المتجر", PropKind::Tags),
    ]
}

fn footer_column(title: &str, links: &[String]) -> String {
    let links: String = links
        .iter()
        .map(|l| format!(r##"<a href="#">{l}</a>"##))
        .collect();
    format!(r#"<div class="footer-col"><h4>{title}</h4>{links}</div>"#)
}

fn render_footer(props: &Props, ctx: &RenderContext<'_>) -> String {
    let name = ctx.name_html();
    format!(
        r#"<footer class="store-footer" data-section-type="footer"><div class="container"><div class="footer-grid"><div class="footer-brand"><span class="logo">{name}</span><p>{about}</p><p>info@{slug}.com</p></div>{shop}{service}{about_col}</div><div class="footer-bottom"><p>© {name} - جميع الحقوق محفوظة</p></div></div></footer>"#,
        about = text(props, "about"),
        slug = ctx.name_slug(),
        shop = footer_column("المتجر", &tags(props, "shopLinks")),
        service = footer_column("خدمة العملاء", &tags(props, "serviceLinks")),
        about_col = footer_column("عن المتجر", &tags(props, "aboutLinks")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::resolve_props;
    use crate::catalog::SectionKind;
    use crate::theme;

    #[test]
    fn test_footer_uses_store_name_slug() {
        let theme = theme::build("#6c5ce7");
        let ctx = RenderContext {
            store_name: "Blue Lagoon",
            store_kind: "general",
            theme: &theme,
        };
        let props = resolve_props(&FOOTER, &Props::new());
        let html = FOOTER.render(&props, &ctx);
        assert!(html.contains("info@bluelagoon.com"));
        assert!(html.contains(r#"<span class="logo">Blue Lagoon</span>"#));
    }

    #[test]
    fn test_navbar_links() {
        let theme = theme::build("#6c5ce7");
        let ctx = RenderContext {
            store_name: "Shop",
            store_kind: "general",
            theme: &theme,
        };
        let props = resolve_props(&NAVBAR, &Props::new());
        let html = NAVBAR.render(&props, &ctx);
        assert_eq!(html.matches(r##"<a href="#">"##).count(), 5);
    }
}
