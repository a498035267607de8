//! Text-led blocks: features, testimonials, FAQ, contact and spacer.

use serde_json::json;

use super::{flag, int, items, section_header, text, BuiltinSection};
use crate::catalog::{PropField, PropKind, Props};
use crate::render::RenderContext;

const FEATURE_FIELDS: &[&str] = &["icon", "title", "desc"];
const TESTIMONIAL_FIELDS: &[&str] = &["name", "role", "text"];
const FAQ_FIELDS: &[&str] = &["q", "a"];

pub(crate) const FEATURES: BuiltinSection = BuiltinSection {
    type_id: "features",
    label: "مميزات المتجر",
    icon: "✨",
    description: "شحن مجاني، دفع آمن...",
    defaults: features_defaults,
    fallbacks: features_fallbacks,
    schema: features_schema,
    render: render_features,
    addable: true,
    single: false,
};

pub(crate) const TESTIMONIALS: BuiltinSection = BuiltinSection {
    type_id: "testimonials",
    label: "آراء العملاء",
    icon: "💬",
    description: "تقييمات ومراجعات",
    defaults: testimonials_defaults,
    fallbacks: testimonials_fallbacks,
    schema: testimonials_schema,
    render: render_testimonials,
    addable: true,
    single: false,
};

pub(crate) const FAQ: BuiltinSection = BuiltinSection {
    type_id: "faq",
    label: "الأسئلة الشائعة",
    icon: "❓",
    description: "أسئلة وأجوبة",
    defaults: faq_defaults,
    fallbacks: faq_fallbacks,
    schema: faq_schema,
    render: render_faq,
    addable: true,
    single: false,
};

pub(crate) const CONTACT: BuiltinSection = BuiltinSection {
    type_id: "contact",
    label: "تواصل معنا",
    icon: "📞",
    description: "معلومات التواصل ونموذج مراسلة",
    defaults: contact_defaults,
    fallbacks: contact_fallbacks,
    schema: contact_schema,
    render: render_contact,
    addable: true,
    single: false,
};

pub(crate) const SPACER: BuiltinSection = BuiltinSection {
    type_id: "spacer",
    label: "مسافة فارغة",
    icon: "↕️",
    description: "فاصل عمودي بين الأقسام",
    defaults: spacer_defaults,
    fallbacks: spacer_defaults,
    schema: spacer_schema,
    render: render_spacer,
    addable: true,
    single: false,
};

// --- features ---

fn features_defaults() -> serde_json::Value {
    json!({
        "items": [
            {"icon": "🚚", "title": "شحن مجاني", "desc": "لجميع الطلبات"},
            {"icon": "🔒", "title": "دفع آمن", "desc": "100% حماية"},
            {"icon": "↩️", "title": "استرجاع سهل", "desc": "خلال 14 يوم"},
            {"icon": "💬", "title": "دعم 24/7", "desc": "نحن هنا دائماً"},
        ]
    })
}

fn features_fallbacks() -> serde_json::Value {
    let mut fallbacks = features_defaults();
    if let Some(map) = fallbacks.as_object_mut() {
        map.insert("title".into(), json!("لماذا تختارنا؟"));
        map.insert("subtitle".into(), json!("نقدم لك تجربة تسوق لا مثيل لها"));
    }
    fallbacks
}

fn features_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("items", "المميزات", PropKind::Items { fields: FEATURE_FIELDS }),
    ]
}

fn render_features(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let entries = items(props, "items", FEATURE_FIELDS);
    let columns = entries.len().clamp(1, 6);
    let cards: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<div class="feature-card"><div class="feature-icon">{}</div><div class="feature-title">{}</div><div class="feature-desc">{}</div></div>"#,
                e[0], e[1], e[2]
            )
        })
        .collect();
    format!(
        r#"<section class="section" id="features" data-section-type="features"><div class="container">{header}<div class="grid grid-{columns}">{cards}</div></div></section>"#,
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- testimonials ---

fn testimonials_defaults() -> serde_json::Value {
    json!({"columns": 3, "autoSlide": true})
}

fn testimonials_fallbacks() -> serde_json::Value {
    json!({
        "title": "آراء عملائنا",
        "subtitle": "ثقة أكثر من 10,000 عميل سعيد",
        "columns": 3,
        "autoSlide": false,
        "items": [
            {
                "name": "سارة المالكي",
                "role": "عميلة مميزة",
                "text": "تجربة تسوق رائعة! المنتجات أصلية 100% والتوصيل وصلني في نفس اليوم."
            },
            {
                "name": "محمد العتيبي",
                "role": "عميل دائم",
                "text": "أفضل متجر تعاملت معه. خدمة العملاء ممتازة والمنتجات بجودة عالية."
            },
            {
                "name": "نورة القحطاني",
                "role": "مشترية معتمدة",
                "text": "جودة عالية وأسعار منافسة جداً. المنتج مطابق للوصف تماماً."
            },
        ]
    })
}

fn testimonials_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("columns", "عدد الأعمدة", PropKind::Number { min: 1, max: 4 }),
        PropField::new("autoSlide", "تمرير تلقائي", PropKind::Toggle),
        PropField::new("items", "الآراء", PropKind::Items { fields: TESTIMONIAL_FIELDS }),
    ]
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn render_testimonials(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let columns = int(props, "columns", 3, 1, 4);
    let cards: String = items(props, "items", TESTIMONIAL_FIELDS)
        .iter()
        .map(|e| {
            format!(
                r#"<div class="testimonial-card"><div class="stars">★★★★★</div><div class="testimonial-text">{text}</div><div class="testimonial-author"><div class="testimonial-avatar">{avatar}</div><div><div class="testimonial-name">{name}</div><div class="testimonial-role">{role}</div></div></div></div>"#,
                name = e[0],
                role = e[1],
                text = e[2],
                avatar = initial(&e[0]),
            )
        })
        .collect();
    // No script runs in the preview; sliding is carried as a hint only.
    format!(
        r#"<section class="section" data-section-type="testimonials" data-auto-slide="{slide}"><div class="container">{header}<div class="grid grid-{columns}">{cards}</div></div></section>"#,
        slide = flag(props, "autoSlide"),
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- faq ---

fn faq_defaults() -> serde_json::Value {
    json!({
        "items": [
            {"q": "كيف أطلب؟", "a": "اختر المنتج وأضفه للسلة"},
            {"q": "ما مدة التوصيل؟", "a": "3-5 أيام عمل"},
        ]
    })
}

fn faq_fallbacks() -> serde_json::Value {
    json!({
        "title": "الأسئلة الشائعة",
        "subtitle": "إجابات لأكثر الأسئلة شيوعاً",
        "items": [
            {"q": "كم مدة التوصيل؟", "a": "التوصيل داخل المدن الرئيسية خلال 24 ساعة، وباقي المناطق خلال 2-5 أيام عمل."},
            {"q": "هل يمكنني إرجاع المنتج؟", "a": "نعم، يمكنك إرجاع أي منتج خلال 14 يوم من تاريخ الاستلام."},
            {"q": "ما طرق الدفع المتاحة؟", "a": "نقبل البطاقات البنكية والتحويل البنكي والدفع عند الاستلام."},
        ]
    })
}

fn faq_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("items", "الأسئلة", PropKind::Items { fields: FAQ_FIELDS }),
    ]
}

fn render_faq(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let entries: String = items(props, "items", FAQ_FIELDS)
        .iter()
        .map(|e| {
            format!(
                r#"<details class="faq-item"><summary>{}</summary><div class="faq-a">{}</div></details>"#,
                e[0], e[1]
            )
        })
        .collect();
    format!(
        r#"<section class="section" style="background:var(--sf)" data-section-type="faq"><div class="container">{header}{entries}</div></section>"#,
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- contact ---

fn contact_defaults() -> serde_json::Value {
    json!({
        "title": "تواصل معنا",
        "address": "الرياض، المملكة العربية السعودية",
        "phone": "+966 50 000 0000",
    })
}

fn contact_fallbacks() -> serde_json::Value {
    json!({
        "title": "تواصل معنا",
        "subtitle": "نسعد بخدمتك في أي وقت",
        "address": "الرياض، المملكة العربية السعودية",
        "phone": "+966 50 000 0000",
        "hours": "السبت - الخميس: 9 صباحاً - 10 مساءً",
    })
}

fn contact_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("address", "العنوان البريدي", PropKind::Text),
        PropField::new("phone", "الهاتف", PropKind::Text),
        PropField::new("hours", "أوقات العمل", PropKind::Text),
    ]
}

fn contact_row(icon: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="contact-info-item"><div class="contact-icon">{icon}</div><div><strong>{label}</strong><br><span>{value}</span></div></div>"#
    )
}

fn render_contact(props: &Props, ctx: &RenderContext<'_>) -> String {
    let email = format!("info@{}.com", ctx.name_slug());
    let rows = [
        contact_row("📍", "العنوان", &text(props, "address")),
        contact_row("📧", "البريد الإلكتروني", &email),
        contact_row("📞", "الهاتف", &text(props, "phone")),
        contact_row("⏰", "أوقات العمل", &text(props, "hours")),
    ]
    .concat();
    format!(
        r#"<section class="section" id="contact" data-section-type="contact"><div class="container">{header}<div class="contact-grid"><div>{rows}</div><div class="contact-form"><input type="text" placeholder="الاسم الكامل" dir="rtl"><input type="email" placeholder="البريد الإلكتروني" dir="rtl"><textarea placeholder="رسالتك..." dir="rtl"></textarea><button type="button" class="btn btn-p">إرسال الرسالة</button></div></div></div></section>"#,
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- spacer ---

fn spacer_defaults() -> serde_json::Value {
    json!({"height": 40})
}

fn spacer_schema() -> Vec<PropField> {
    vec![PropField::new(
        "height",
        "الارتفاع",
        PropKind::Number { min: 8, max: 200 },
    )]
}

fn render_spacer(props: &Props, _ctx: &RenderContext<'_>) -> String {
    format!(
        r#"<div style="height:{}px" data-section-type="spacer"></div>"#,
        int(props, "height", 40, 8, 200)
    )
}
