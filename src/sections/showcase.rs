//! Catalog-style grids: categories, products, gallery, brands and stats.

use serde_json::json;

use super::{flag, int, items, section_header, tags, text, BuiltinSection};
use crate::catalog::{PropField, PropKind, Props};
use crate::render::RenderContext;

const GRID_STYLES: &[&str] = &["cards", "minimal"];

struct SampleCategory {
    name: &'static str,
    emoji: &'static str,
    count: &'static str,
    gradient: &'static str,
}

const SAMPLE_CATEGORIES: &[SampleCategory] = &[
    SampleCategory { name: "الأكثر مبيعاً", emoji: "🔥", count: "50+", gradient: "linear-gradient(135deg, #ff5722, #d84315)" },
    SampleCategory { name: "وصل حديثاً", emoji: "⭐", count: "30+", gradient: "linear-gradient(135deg, #ffc107, #ff8f00)" },
    SampleCategory { name: "عروض خاصة", emoji: "🏷️", count: "25+", gradient: "linear-gradient(135deg, #4caf50, #2e7d32)" },
    SampleCategory { name: "إلكترونيات", emoji: "📱", count: "40+", gradient: "linear-gradient(135deg, #2196f3, #1565c0)" },
    SampleCategory { name: "أزياء", emoji: "👗", count: "35+", gradient: "linear-gradient(135deg, #e91e63, #ad1457)" },
    SampleCategory { name: "منزل", emoji: "🏠", count: "20+", gradient: "linear-gradient(135deg, #795548, #4e342e)" },
];

struct SampleProduct {
    name: &'static str,
    price: &'static str,
    old_price: Option<&'static str>,
    emoji: &'static str,
    badge: Option<&'static str>,
    rating: u8,
    gradient: &'static str,
}

const SAMPLE_PRODUCTS: &[SampleProduct] = &[
    SampleProduct { name: "منتج مميز أول", price: "199", old_price: None, emoji: "⭐", badge: Some("الأكثر مبيعاً"), rating: 5, gradient: "linear-gradient(135deg, #e8eaf6 0%, #c5cae9 100%)" },
    SampleProduct { name: "منتج راقي ثاني", price: "349", old_price: None, emoji: "💎", badge: Some("جديد"), rating: 5, gradient: "linear-gradient(135deg, #e0f2f1 0%, #b2dfdb 100%)" },
    SampleProduct { name: "منتج عصري ثالث", price: "149", old_price: None, emoji: "🔥", badge: None, rating: 4, gradient: "linear-gradient(135deg, #fff3e0 0%, #ffcc80 100%)" },
    SampleProduct { name: "منتج حصري رابع", price: "599", old_price: None, emoji: "🎁", badge: Some("حصري"), rating: 5, gradient: "linear-gradient(135deg, #fce4ec 0%, #f8bbd0 100%)" },
    SampleProduct { name: "منتج كلاسيكي خامس", price: "249", old_price: None, emoji: "🏷️", badge: None, rating: 4, gradient: "linear-gradient(135deg, #f3e5f5 0%, #e1bee7 100%)" },
    SampleProduct { name: "منتج عملي سادس", price: "89", old_price: Some("129"), emoji: "📦", badge: Some("خصم 30%"), rating: 4, gradient: "linear-gradient(135deg, #e0e0e0 0%, #bdbdbd 100%)" },
    SampleProduct { name: "منتج فريد سابع", price: "449", old_price: None, emoji: "🎯", badge: None, rating: 5, gradient: "linear-gradient(135deg, #e8f5e9 0%, #a5d6a7 100%)" },
    SampleProduct { name: "منتج أنيق ثامن", price: "299", old_price: None, emoji: "🛍️", badge: Some("جديد"), rating: 4, gradient: "linear-gradient(135deg, #e3f2fd 0%, #90caf9 100%)" },
];

const GALLERY_GRADIENTS: [&str; 8] = [
    "linear-gradient(135deg, #667eea, #764ba2)",
    "linear-gradient(135deg, #f093fb, #f5576c)",
    "linear-gradient(135deg, #4facfe, #00f2fe)",
    "linear-gradient(135deg, #43e97b, #38f9d7)",
    "linear-gradient(135deg, #fa709a, #fee140)",
    "linear-gradient(135deg, #a18cd1, #fbc2eb)",
    "linear-gradient(135deg, #fccb90, #d57eeb)",
    "linear-gradient(135deg, #e0c3fc, #8ec5fc)",
];

pub(crate) const CATEGORIES: BuiltinSection = BuiltinSection {
    type_id: "categories",
    label: "التصنيفات",
    icon: "📦",
    description: "عرض أقسام المتجر",
    defaults: categories_defaults,
    fallbacks: categories_fallbacks,
    schema: categories_schema,
    render: render_categories,
    addable: true,
    single: false,
};

pub(crate) const FEATURED_PRODUCTS: BuiltinSection = BuiltinSection {
    type_id: "featured_products",
    label: "منتجات مميزة",
    icon: "⭐",
    description: "عرض المنتجات المختارة",
    defaults: products_defaults,
    fallbacks: products_fallbacks,
    schema: products_schema,
    render: render_products,
    addable: true,
    single: false,
};

pub(crate) const GALLERY: BuiltinSection = BuiltinSection {
    type_id: "gallery",
    label: "معرض الصور",
    icon: "🖼️",
    description: "شبكة صور",
    defaults: gallery_defaults,
    fallbacks: gallery_fallbacks,
    schema: gallery_schema,
    render: render_gallery,
    addable: true,
    single: false,
};

pub(crate) const BRANDS: BuiltinSection = BuiltinSection {
    type_id: "brands",
    label: "الماركات",
    icon: "🏷️",
    description: "شعارات العلامات التجارية",
    defaults: brands_defaults,
    fallbacks: brands_fallbacks,
    schema: brands_schema,
    render: render_brands,
    addable: true,
    single: false,
};

pub(crate) const STATS: BuiltinSection = BuiltinSection {
    type_id: "stats",
    label: "الإحصائيات",
    icon: "📊",
    description: "أرقام وإنجازات المتجر",
    defaults: stats_defaults,
    fallbacks: stats_fallbacks,
    schema: stats_schema,
    render: render_stats,
    addable: true,
    single: false,
};

// --- categories ---

fn categories_defaults() -> serde_json::Value {
    json!({"columns": 4, "showImages": true, "gridStyle": "cards"})
}

fn categories_fallbacks() -> serde_json::Value {
    json!({
        "title": "تسوق حسب القسم",
        "subtitle": "اختر من تشكيلتنا المتنوعة",
        "columns": 4,
        "showImages": true,
        "gridStyle": "cards",
    })
}

fn categories_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("columns", "عدد الأعمدة", PropKind::Number { min: 2, max: 6 }),
        PropField::new("showImages", "إظهار الصور", PropKind::Toggle),
        PropField::new("gridStyle", "نمط الشبكة", PropKind::Select { options: GRID_STYLES }),
    ]
}

fn render_categories(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let columns = int(props, "columns", 4, 2, 6);
    let minimal = props.get("gridStyle").and_then(|v| v.as_str()) == Some("minimal");
    let show_images = flag(props, "showImages");
    let cards: String = SAMPLE_CATEGORIES
        .iter()
        .map(|cat| {
            let (class, style) = if minimal {
                ("cat-card minimal", String::new())
            } else {
                ("cat-card", format!(r#" style="background:{}""#, cat.gradient))
            };
            let emoji = if show_images {
                format!(r#"<span class="cat-emoji">{}</span>"#, cat.emoji)
            } else {
                String::new()
            };
            format!(
                r#"<div class="{class}"{style}>{emoji}<div class="cat-name">{}</div><div>{} منتج</div></div>"#,
                cat.name, cat.count
            )
        })
        .collect();
    format!(
        r#"<section class="section" id="categories" data-section-type="categories"><div class="container">{header}<div class="grid grid-{columns}">{cards}</div></div></section>"#,
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- featured products ---

fn products_defaults() -> serde_json::Value {
    json!({"columns": 4, "count": 8, "showPrice": true, "showRating": true})
}

fn products_fallbacks() -> serde_json::Value {
    json!({
        "title": "منتجات مميزة",
        "subtitle": "اكتشف أحدث المنتجات المختارة بعناية",
        "columns": 4,
        "count": 8,
        "showPrice": true,
        "showRating": true,
    })
}

fn products_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("columns", "عدد الأعمدة", PropKind::Number { min: 2, max: 6 }),
        PropField::new("count", "عدد المنتجات", PropKind::Number { min: 1, max: 8 }),
        PropField::new("showPrice", "إظهار السعر", PropKind::Toggle),
        PropField::new("showRating", "إظهار التقييم", PropKind::Toggle),
    ]
}

fn stars(rating: u8) -> String {
    let full = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

fn render_products(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let columns = int(props, "columns", 4, 2, 6);
    let count = int(props, "count", 8, 1, 8) as usize;
    let show_price = flag(props, "showPrice");
    let show_rating = flag(props, "showRating");

    let cards: String = SAMPLE_PRODUCTS
        .iter()
        .take(count)
        .map(|p| {
            let badge = p
                .badge
                .map(|b| format!(r#"<span class="product-badge">{b}</span>"#))
                .unwrap_or_default();
            let price = if show_price {
                let old = p
                    .old_price
                    .map(|o| format!(" <s>{o} ر.س</s>"))
                    .unwrap_or_default();
                format!(r#"<div class="product-price">{} ر.س{old}</div>"#, p.price)
            } else {
                String::new()
            };
            let rating = if show_rating {
                format!(r#"<div class="rating">{}</div>"#, stars(p.rating))
            } else {
                String::new()
            };
            format!(
                r#"<div class="product-card">{badge}<div class="product-img" style="background:{}">{}</div><div class="product-info"><div class="product-name">{}</div>{rating}{price}</div></div>"#,
                p.gradient, p.emoji, p.name
            )
        })
        .collect();

    format!(
        r#"<section class="section" id="products" data-section-type="featured_products"><div class="container">{header}<div class="grid grid-{columns}">{cards}</div></div></section>"#,
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- gallery ---

fn gallery_defaults() -> serde_json::Value {
    json!({"columns": 3, "gap": 4})
}

fn gallery_fallbacks() -> serde_json::Value {
    json!({
        "title": "معرض الصور",
        "subtitle": "لمحات من أجمل منتجاتنا",
        "columns": 3,
        "gap": 4,
    })
}

fn gallery_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("subtitle", "العنوان الفرعي", PropKind::Text),
        PropField::new("columns", "عدد الأعمدة", PropKind::Number { min: 2, max: 6 }),
        PropField::new("gap", "المسافة", PropKind::Number { min: 0, max: 10 }),
    ]
}

/// Placeholder tiles follow the store kind.
fn gallery_icons(store_kind: &str) -> [&'static str; 8] {
    match store_kind {
        "fashion" => ["👗", "👠", "👜", "💍", "⌚", "🧥", "👔", "🕶️"],
        "beauty" => ["🌹", "💄", "✨", "🌸", "🧴", "🎀", "💅", "🪞"],
        "food" => ["🍔", "🍕", "🥗", "🍰", "☕", "🍣", "🥤", "🍝"],
        _ => ["📸", "🎨", "🌟", "💫", "🎪", "🌈", "🎭", "✨"],
    }
}

fn render_gallery(props: &Props, ctx: &RenderContext<'_>) -> String {
    let columns = int(props, "columns", 3, 2, 6);
    let gap = int(props, "gap", 4, 0, 10) * 4;
    let tiles: String = gallery_icons(ctx.store_kind)
        .iter()
        .zip(GALLERY_GRADIENTS.iter())
        .map(|(icon, gradient)| {
            format!(r#"<div class="gallery-item" style="background:{gradient}">{icon}</div>"#)
        })
        .collect();
    format!(
        r#"<section class="section" data-section-type="gallery"><div class="container">{header}<div class="gallery-grid" style="grid-template-columns:repeat({columns},1fr);gap:{gap}px">{tiles}</div></div></section>"#,
        header = section_header(&text(props, "title"), &text(props, "subtitle")),
    )
}

// --- brands ---

fn brands_defaults() -> serde_json::Value {
    json!({"grayscale": true})
}

fn brands_fallbacks() -> serde_json::Value {
    json!({
        "title": "علاماتنا التجارية",
        "grayscale": true,
        "brands": ["Apple", "Samsung", "Nike", "Adidas", "Chanel", "Dior", "Gucci", "Louis Vuitton"],
    })
}

fn brands_schema() -> Vec<PropField> {
    vec![
        PropField::new("title", "العنوان", PropKind::Text),
        PropField::new("grayscale", "تدرج رمادي", PropKind::Toggle),
        PropField::new("brands", "الماركات", PropKind::Tags),
    ]
}

fn render_brands(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let class = if flag(props, "grayscale") {
        "brands-row grayscale"
    } else {
        "brands-row"
    };
    let brands: String = tags(props, "brands")
        .iter()
        .map(|b| format!(r#"<span class="brand-item">{b}</span>"#))
        .collect();
    format!(
        r#"<section class="section-sm" data-section-type="brands"><div class="container">{header}<div class="{class}">{brands}</div></div></section>"#,
        header = section_header(&text(props, "title"), ""),
    )
}

// --- stats ---

fn stats_defaults() -> serde_json::Value {
    json!({
        "items": [
            {"value": "+10K", "label": "عميل سعيد"},
            {"value": "+500", "label": "منتج متوفر"},
            {"value": "+50K", "label": "طلب منجز"},
            {"value": "4.9", "label": "تقييم العملاء"},
        ]
    })
}

fn stats_fallbacks() -> serde_json::Value {
    stats_defaults()
}

fn stats_schema() -> Vec<PropField> {
    vec![PropField::new(
        "items",
        "الأرقام",
        PropKind::Items { fields: &["value", "label"] },
    )]
}

fn render_stats(props: &Props, _ctx: &RenderContext<'_>) -> String {
    let entries = items(props, "items", &["value", "label"]);
    let columns = entries.len().clamp(1, 6);
    let cells: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<div class="stat-item"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                e[0], e[1]
            )
        })
        .collect();
    format!(
        r#"<section class="section-sm" style="background:var(--sf)" data-section-type="stats"><div class="container"><div class="grid grid-{columns}">{cells}</div></div></section>"#,
    )
}
