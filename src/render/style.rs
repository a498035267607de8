//! Base stylesheet, parameterized by theme tokens.

use crate::render::escape::css_value;
use crate::theme::ThemeRecord;

const BASE_RULES: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:var(--ff);background:var(--bg);color:var(--tx);line-height:1.7;-webkit-font-smoothing:antialiased}
a{text-decoration:none;color:inherit}
.container{max-width:1200px;margin:0 auto;padding:0 24px}
.section{padding:80px 0}
.section-sm{padding:50px 0}
.section-header{text-align:center;margin-bottom:48px}
.section-header h2{font-size:2rem;font-weight:800;margin-bottom:8px}
.section-header p{color:var(--ts)}
.section-header .line{width:60px;height:4px;border-radius:2px;background:var(--p);margin:16px auto 0}
.grid{display:grid;gap:24px}
.grid-2{grid-template-columns:repeat(2,1fr)}
.grid-3{grid-template-columns:repeat(3,1fr)}
.grid-4{grid-template-columns:repeat(4,1fr)}
.grid-5{grid-template-columns:repeat(5,1fr)}
.grid-6{grid-template-columns:repeat(6,1fr)}
.btn{display:inline-flex;align-items:center;gap:8px;padding:14px 32px;border-radius:var(--r);font-weight:700;border:none;cursor:pointer;font-family:inherit}
.btn-p{background:var(--p);color:#fff}
.btn-p:hover{background:var(--pd)}
.btn-w{background:#fff;color:var(--p)}
.btn-o{background:transparent;color:var(--p);border:2px solid var(--p)}
.btn-lg{padding:16px 40px;font-size:1.1rem}
.btn-sm{padding:8px 18px;font-size:.85rem}
.badge{display:inline-block;padding:6px 16px;border-radius:999px;font-size:.85rem;font-weight:600}
.navbar{position:sticky;top:0;z-index:10;background:var(--cb);border-bottom:1px solid var(--br)}
.navbar-inner{max-width:1200px;margin:0 auto;padding:16px 24px;display:flex;align-items:center;justify-content:space-between;gap:24px}
.logo{font-size:1.4rem;font-weight:900;color:var(--p)}
.nav-links{display:flex;gap:24px;color:var(--ts)}
.hero{position:relative;overflow:hidden;color:#fff}
.hero-content{display:flex;align-items:center}
.hero h1{font-size:3rem;font-weight:900;margin-bottom:20px}
.hero p{font-size:1.15rem;opacity:.85;max-width:540px;margin-bottom:32px}
.cat-card{border-radius:var(--r);padding:28px 12px;text-align:center;color:#fff}
.cat-card.minimal{background:var(--sf);color:var(--tx)}
.cat-emoji{font-size:2.2rem;display:block;margin-bottom:8px}
.cat-name{font-weight:700}
.product-card{background:var(--cb);border:1px solid var(--br);border-radius:var(--r);overflow:hidden;position:relative}
.product-img{height:200px;display:flex;align-items:center;justify-content:center;font-size:4rem}
.product-info{padding:16px}
.product-name{font-weight:600;margin-bottom:6px}
.product-price{font-weight:800;color:var(--p)}
.product-badge{position:absolute;top:12px;right:12px;padding:4px 12px;border-radius:999px;font-size:.75rem;color:#fff;background:var(--a)}
.rating{color:#f5b301;font-size:.85rem}
.feature-card{background:var(--cb);border-radius:var(--r);padding:32px 24px;text-align:center;border:1px solid var(--br)}
.feature-icon{font-size:2.5rem;margin-bottom:12px}
.feature-title{font-weight:700;margin-bottom:6px}
.feature-desc{color:var(--ts);font-size:.9rem}
.testimonial-card{background:var(--cb);border:1px solid var(--br);border-radius:var(--r);padding:28px}
.stars{color:#f5b301;margin-bottom:12px}
.testimonial-text{color:var(--ts);margin-bottom:20px}
.testimonial-author{display:flex;align-items:center;gap:12px}
.testimonial-avatar{width:44px;height:44px;border-radius:50%;background:var(--p);color:#fff;display:flex;align-items:center;justify-content:center;font-weight:700}
.testimonial-name{font-weight:700}
.testimonial-role{color:var(--ts);font-size:.8rem}
.newsletter-box{background:var(--ps);border-radius:var(--r);padding:56px 32px;text-align:center}
.newsletter-box h3{font-size:1.8rem;font-weight:800;margin-bottom:8px}
.newsletter-box p{color:var(--ts);margin-bottom:24px}
.newsletter-form{display:flex;gap:8px;max-width:480px;margin:0 auto}
.newsletter-input{flex:1;padding:14px 20px;border:1px solid var(--br);border-radius:var(--r);font-family:inherit}
.promo-banner{padding:14px 24px;text-align:center;font-weight:600}
.promo-banner a{text-decoration:underline;margin-right:12px}
.brands-row{display:flex;flex-wrap:wrap;align-items:center;justify-content:center;gap:40px}
.brand-item{font-size:1.3rem;font-weight:800;color:var(--tx)}
.brands-row.grayscale .brand-item{opacity:.45;filter:grayscale(1)}
.gallery-grid{display:grid;gap:12px}
.gallery-item{aspect-ratio:1;border-radius:var(--r);display:flex;align-items:center;justify-content:center;font-size:3rem}
.faq-item{background:var(--cb);border:1px solid var(--br);border-radius:var(--r);margin-bottom:12px;padding:18px 24px}
.faq-item summary{font-weight:700;cursor:pointer}
.faq-a{color:var(--ts);margin-top:12px}
.stat-item{text-align:center}
.stat-value{font-size:2.4rem;font-weight:900;color:var(--p)}
.stat-label{color:var(--ts)}
.cta-section{background:var(--hg);border-radius:var(--r);padding:64px 32px;text-align:center;color:#fff}
.cta-section h2{font-size:2.2rem;font-weight:900;margin-bottom:12px}
.cta-section p{opacity:.85;margin-bottom:32px}
.contact-grid{display:grid;grid-template-columns:1fr 1fr;gap:40px}
.contact-info-item{display:flex;gap:16px;margin-bottom:24px}
.contact-icon{width:48px;height:48px;border-radius:var(--r);background:var(--sf);display:flex;align-items:center;justify-content:center;font-size:1.4rem}
.contact-form{display:flex;flex-direction:column;gap:12px}
.contact-form input,.contact-form textarea{padding:12px 16px;border:1px solid var(--br);border-radius:var(--r);font-family:inherit}
.store-footer{background:var(--tx);color:#d1d5db;padding:64px 0 24px}
.footer-grid{display:grid;grid-template-columns:2fr 1fr 1fr 1fr;gap:40px;margin-bottom:40px}
.footer-brand p{margin-top:12px;font-size:.9rem}
.footer-col h4{color:#fff;margin-bottom:16px}
.footer-col a{display:block;margin-bottom:8px;font-size:.9rem}
.footer-bottom{border-top:1px solid rgba(255,255,255,.1);padding-top:24px;display:flex;justify-content:space-between;flex-wrap:wrap;gap:12px;font-size:.85rem}
.empty-state{padding:80px 24px;text-align:center;color:var(--ts)}
@media (max-width:768px){
.grid-3,.grid-4,.grid-5,.grid-6{grid-template-columns:repeat(2,1fr)}
.grid-2,.contact-grid,.footer-grid{grid-template-columns:1fr}
.nav-links{display:none}
.hero h1{font-size:2rem}
}
"#;

/// Theme variables followed by the fixed rule set.
pub fn base_css(theme: &ThemeRecord) -> String {
    let vars = [
        ("--p", &theme.primary),
        ("--pd", &theme.primary_dark),
        ("--ps", &theme.primary_soft),
        ("--hg", &theme.hero_gradient),
        ("--a", &theme.accent),
        ("--bg", &theme.bg),
        ("--sf", &theme.surface),
        ("--sfa", &theme.surface_alt),
        ("--tx", &theme.text),
        ("--ts", &theme.text_secondary),
        ("--cb", &theme.card_bg),
        ("--br", &theme.border_color),
        ("--ff", &theme.font_family),
        ("--r", &theme.radius),
    ];

    let mut css = String::from(":root{");
    for (name, value) in vars {
        css.push_str(name);
        css.push(':');
        css.push_str(&css_value(value));
        css.push(';');
    }
    css.push('}');
    css.push_str(BASE_RULES);
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn test_vars_follow_theme() {
        let css = base_css(&theme::build("#00b894"));
        assert!(css.starts_with(":root{--p:#00b894;"));
        assert!(css.contains("--r:12px;"));
    }

    #[test]
    fn test_hostile_token_cannot_close_style() {
        let mut record = theme::build("#00b894");
        record.font_family = "x}</style><script>alert(1)</script>".to_string();
        let css = base_css(&record);
        assert!(!css.contains("</style>"));
        assert!(!css.contains("<script>"));
    }
}
