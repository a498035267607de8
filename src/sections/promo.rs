//! Hero, banner, newsletter and call-to-action blocks.

use serde_json::json;

use super::{color, link, text, BuiltinSection};
use crate::catalog::{PropField, PropKind, Props};
use crate::render::RenderContext;

const HEIGHTS: &[&str] = &["small", "medium", "large"];

pub(crate) const HERO: BuiltinSection = BuiltinSection {
    type_id: "hero",
    label: "البانر الرئيسي",
    icon: "🖼️",
    description: "صورة كبيرة مع عنوان وزر",
    defaults: hero_defaults,
    fallbacks: hero_fallbacks,
    schema: hero_schema,
    render: render_hero,
    addable: true,
    single: true,
};

pub(crate) const BANNER: BuiltinSection = BuiltinSection {
    type_id: "banner",
    label: "بانر إعلاني",
    icon: "📢",
    description: "بانر ترويجي",
    defaults: banner_defaults,
    fallbacks: banner_fallbacks,
    schema: banner_schema,
    render: render_banner,
    addable: true,
    single: false,
};

pub(crate) const NEWSLETTER: BuiltinSection = BuiltinSection {
    type_id: "newsletter",
    label: "النشرة البريدية",
    icon: "📧",
    description: "نموذج اشتراك",
    defaults: newsletter_defaults,
    fallbacks: newsletter_fallbacks,
    schema: newsletter_schema,
    render: render_newsletter,
    addable: true,
    single: true,
};

pub(crate) const CTA: BuiltinSection = BuiltinSection {
    type_id: "cta",
    label: "دعوة للشراء",
    icon: "🎯",
    description: "عنوان مع زرين",
    defaults: cta_defaults,
    fallbacks: cta_fallbacks,
    schema: cta_schema,
    render: render_cta,
    addable: true,
    single: false,
};

// --- hero ---

fn hero_defaults() -> serde_json::Value {
    json!({
        "title": "مرحباً بكم في متجرنا",
        "subtitle": "أفضل المنتجات بأفضل الأسعار",
        "buttonText": "تسوق الآن",
        "buttonLink": "/products",
        "bgColor": "#6c5ce7",
        "height": "large",
    })
}

fn hero_fallbacks() -> serde_json::Value {
    json!({
        "title": "عنوان البانر",
        "subtitle": "اكتشفوا تشكيلتنا الفريدة من أفضل المنتجات بأسعار لا تُقاوم",
        "buttonText": "تسوق الآن",
        "buttonLink": "#products",
        "height": "large",
        "badge": "وصل حديثاً",
    })
}

fn hero_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::LongText),
        PropField::new("buttonText", "نص الزر", PropKind::Text),
        PropField::new("buttonLink", "رابط الزر", PropKind::Link),
        PropField::new("bgColor", "لون الخلفية", PropKind::Color),
        PropField::new("height", "الارتفاع", PropKind::Select { options: HEIGHTS }),
        PropField::new("badge", "الشارة", PropKind::Text),
    ]
}

fn hero_height(props: &Props) -> u32 {
    match props.get("height").and_then(|v| v.as_str()) {
        Some("small") => 320,
        Some("medium") => 420,
        _ => 520,
    }
}

/// A valid `bgColor` blends into the theme primary; otherwise the theme gradient.
fn render_hero(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let background = match color(props, "bgColor") {
        Some(bg) => format!("linear-gradient(135deg,{bg} 0%,var(--p) 100%)"),
        None => "var(--hg)".to_string(),
    };
    let badge = text(props, "badge");
    let badge = if badge.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="badge">✨ {badge}</span>"#)
    };
    format!(
        r#"<section class="hero" style="background:{background}" data-section-type="hero"><div class="hero-content" style="min-height:{height}px"><div class="container">{badge}<h1>{title}</h1><p>{subtitle}</p><a href="{href}" class="btn btn-w btn-lg">{button} ←</a></div></div></section>"#,
        height = hero_height(props),
        title = text(props, "title"),
        subtitle = text(props, "subtitle"),
        href = link(props, "buttonLink"),
        button = text(props, "buttonText"),
    )
}

// --- banner ---

fn banner_defaults() -> serde_json::Value {
    json!({
        "text": "خصم 50% على جميع المنتجات!",
        "bgColor": "#00cec9",
        "textColor": "#ffffff",
    })
}

fn banner_fallbacks() -> serde_json::Value {
    json!({
        "text": "خصم 30% على جميع المنتجات",
        "emoji": "🎉",
        "linkText": "تسوق الآن",
        "link": "#products",
    })
}

fn banner_schema() -> Vec<PropField> {
    vec![
        PropField::new("text", "النص", PropKind::Text),
        PropField::new("emoji", "الرمز", PropKind::Text),
        PropField::new("bgColor", "لون الخلفية", PropKind::Color),
        PropField::new("textColor", "لون النص", PropKind::Color),
        PropField::new("linkText", "نص الرابط", PropKind::Text),
        PropField::new("link", "الرابط", PropKind::Link),
    ]
}

fn render_banner(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let background = color(props, "bgColor").unwrap_or_else(|| "var(--p)".to_string());
    let foreground = color(props, "textColor").unwrap_or_else(|| "#ffffff".to_string());
    format!(
        r#"<div class="promo-banner" style="background:{background};color:{foreground}" data-section-type="banner">{emoji} {text} <a href="{href}" style="color:{foreground}">{link_text}</a></div>"#,
        emoji = text(props, "emoji"),
        text = text(props, "text"),
        href = link(props, "link"),
        link_text = text(props, "linkText"),
    )
}

// --- newsletter ---

fn newsletter_defaults() -> serde_json::Value {
    json!({
        "title": "اشترك في نشرتنا البريدية",
        "subtitle": "احصل على أحدث العروض",
        "buttonText": "اشترك",
    })
}

fn newsletter_fallbacks() -> serde_json::Value {
    json!({
        "title": "اشترك في نشرتنا البريدية",
        "subtitle": "احصل على أحدث العروض والمنتجات الجديدة مباشرة في بريدك",
        "buttonText": "اشترك الآن",
        "placeholder": "أدخل بريدك الإلكتروني",
    })
}

fn newsletter_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::LongText),
        PropField::new("buttonText", "نص الزر", PropKind::Text),
        PropField::new("placeholder", "نص الحقل", PropKind::Text),
    ]
}

fn render_newsletter(props: &Props, _ctx: &RenderContext<'_>) -> String {
    format!(
        r#"<section class="section-sm" data-section-type="newsletter"><div class="container"><div class="newsletter-box"><h3>{title}</h3><p>{subtitle}</p><div class="newsletter-form"><input type="email" class="newsletter-input" placeholder="{placeholder}" dir="rtl"><button type="button" class="btn btn-w">{button}</button></div></div></div></section>"#,
        title = text(props, "title"),
        subtitle = text(props, "subtitle"),
        placeholder = text(props, "placeholder"),
        button = text(props, "buttonText"),
    )
}

// --- call to action ---

fn cta_defaults() -> serde_json::Value {
    json!({
        "title": "جاهز تبدأ التسوق؟",
        "subtitle": "آلاف المنتجات بانتظارك",
        "buttonText": "تسوق الآن",
        "buttonLink": "/products",
    })
}

fn cta_fallbacks() -> serde_json::Value {
    json!({
        "title": "جاهز تبدأ التسوق؟",
        "subtitle": "آلاف المنتجات بانتظارك، ابدأ الآن واستمتع بعروض حصرية",
        "buttonText": "تسوق الآن",
        "buttonLink": "#products",
        "secondaryText": "تواصل معنا",
        "secondaryLink": "#contact",
    })
}

fn cta_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::LongText),
        PropField::new("buttonText", "نص الزر", PropKind::Text),
        PropField::new("buttonLink", "رابط الزر", PropKind::Link),
        PropField::new("secondaryText", "نص الزر الثاني", PropKind::Text),
        PropField::new("secondaryLink", "رابط الزر الثاني", PropKind::Link),
    ]
}

fn render_cta(props: &Props, _ctx: &RenderContext<'_>) -> String {
    format!(
        r#"<section class="section-sm" data-section-type="cta"><div class="container"><div class="cta-section"><h2>{title}</h2><p>{subtitle}</p><a href="{href}" class="btn btn-w btn-lg">{button} ←</a> <a href="{href2}" class="btn btn-o btn-lg">{button2}</a></div></div></section>"#,
        title = text(props, "title"),
        subtitle = text(props, "subtitle"),
        href = link(props, "buttonLink"),
        button = text(props, "buttonText"),
        href2 = link(props, "secondaryLink"),
        button2 = text(props, "secondaryText"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SectionKind;
    use crate::mapper::resolve_props;
    use crate::theme;
    use serde_json::json;

    fn render(kind: &BuiltinSection, props: serde_json::Value) -> String {
        let theme = theme::build("#6c5ce7");
        let ctx = RenderContext {
            store_name: "Shop",
            store_kind: "general",
            theme: &theme,
        };
        let props = resolve_props(kind, props.as_object().unwrap_or(&Props::new()));
        kind.render(&props, &ctx)
    }

    #[test]
    fn test_hero_without_color_uses_gradient() {
        let html = render(&HERO, json!({}));
        assert!(html.contains("background:var(--hg)"));
        assert!(html.contains("عنوان البانر"));
        assert!(html.contains("min-height:520px"));
    }

    #[test]
    fn test_hero_color_and_height() {
        let html = render(&HERO, json!({"bgColor": "#112233", "height": "small"}));
        assert!(html.contains("background:linear-gradient(135deg,#112233 0%,var(--p) 100%)"));
        assert!(html.contains("min-height:320px"));
    }

    #[test]
    fn test_default_hero_follows_theme_primary() {
        let defaults = HERO.default_props();
        let html = render(&HERO, serde_json::Value::Object(defaults));
        assert!(html.contains("var(--p)"));
        assert!(!html.contains("background:#6c5ce7\""));
    }

    #[test]
    fn test_hero_rejects_css_injection() {
        let html = render(&HERO, json!({"bgColor": "red;position:fixed"}));
        assert!(html.contains("background:var(--hg)"));
        assert!(!html.contains("position:fixed"));
    }

    #[test]
    fn test_hero_rejects_script_link() {
        let html = render(&HERO, json!({"buttonLink": "javascript:alert(1)"}));
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"href="#products""##));
    }

    #[test]
    fn test_banner_colors() {
        let html = render(&BANNER, json!({"bgColor": "#00cec9", "textColor": "white"}));
        assert!(html.contains("background:#00cec9;color:white"));
    }

    #[test]
    fn test_newsletter_has_no_form_submission() {
        let html = render(&NEWSLETTER, json!({}));
        assert!(!html.contains("<form"));
        assert!(html.contains(r#"type="button""#));
    }
}
