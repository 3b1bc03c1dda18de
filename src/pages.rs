//! HTML pages: a shared layout carrying the locale's head metadata and
//! JSON-LD, with bodies filled from the locale dictionary.

use crate::blog::{all_blog_posts, render_content, BlogPost};
use crate::html::{encode_uri_component, escape_attr, escape_html};
use crate::i18n::{LeadFormStrings, Locale, LocaleStrings, PolicySection};
use crate::seo::catalog::{SITE_NAME, WHATSAPP_URL};
use crate::seo::{build_seo, build_structured_data, to_script_json, SeoMetadata};
use std::fmt::Write;

const THEME_COLOR: &str = "#1A1714";

/// Submits lead forms as JSON to `/api/lead` and swaps in the result text.
const LEAD_FORM_SCRIPT: &str = r#"<script>
document.querySelectorAll('form.lead-form').forEach(function (form) {
  form.addEventListener('submit', async function (e) {
    e.preventDefault();
    var status = form.querySelector('.lead-status');
    var button = form.querySelector('button');
    var name = form.elements.name.value.trim();
    var phone = form.elements.phone.value.trim();
    if (!name || !phone) return;
    button.disabled = true;
    status.textContent = form.dataset.sending;
    try {
      var res = await fetch('/api/lead', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ name: name, phone: phone, source: form.dataset.source })
      });
      status.textContent = res.ok ? form.dataset.success : form.dataset.error;
      if (res.ok) form.reset();
    } catch (err) {
      status.textContent = form.dataset.error;
    }
    button.disabled = false;
  });
});
</script>"#;

/// `/{locale}`
pub fn render_home(base_url: &str, locale: Locale) -> String {
    let dict = LocaleStrings::for_locale(locale);
    let seo = build_seo(base_url, locale);

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<section class="hero"><h1>{}</h1><p>{}</p><a class="btn-premium" href="{}">{}</a></section>
<section id="about"><h2>{}</h2><p>{}</p></section>
"#,
        escape_html(dict.hero_title),
        escape_html(dict.hero_subtitle),
        WHATSAPP_URL,
        escape_html(dict.nav_book),
        escape_html(dict.nav_about),
        escape_html(dict.about_text),
    );
    let _ = write!(
        body,
        r#"<section class="cta"><h2>{}</h2><a class="btn-premium" href="{}" target="_blank" rel="noopener noreferrer">{}</a></section>
"#,
        escape_html(dict.consultation_title),
        WHATSAPP_URL,
        escape_html(dict.consultation_button),
    );
    body.push_str(&services_section(dict));
    body.push_str(&lead_form(dict, &dict.form_tour));
    body.push_str(&benefits_section(dict));
    body.push_str(&lead_form(dict, &dict.form_start));
    body.push_str(&blog_section(locale, dict));
    body.push_str(&lead_form(dict, &dict.form_trial));
    let _ = write!(
        body,
        r#"<section id="contacts"><h2>{}</h2><p>{}</p><p>{}</p></section>
"#,
        escape_html(dict.location_title),
        escape_html(dict.contact_address),
        escape_html(dict.location_hours),
    );
    body.push_str(LEAD_FORM_SCRIPT);

    layout(base_url, locale, &seo, &body)
}

/// `/{locale}/blog/{slug}`
pub fn render_blog_post(base_url: &str, locale: Locale, post: &BlogPost) -> String {
    let dict = LocaleStrings::for_locale(locale);
    let seo = build_seo(base_url, locale)
        .with_page(post.title, Some(post.excerpt))
        .with_url(format!("{}/{}/blog/{}", base_url, locale, post.slug))
        .with_image(format!("{}{}", base_url, post.image), post.title);

    let body = format!(
        r#"<article class="blog-post">
<a href="/{locale}#blog">{back}</a>
<div class="meta"><span class="category">{category}</span> <span class="date">{date}</span></div>
<h1>{title}</h1>
<p class="excerpt">{excerpt}</p>
<img src="{image}" alt="{alt}">
<div class="prose">
{content}</div>
<div class="cta"><h3>{cta_title}</h3><p>{cta_text}</p><a class="btn-premium" href="{whatsapp}" target="_blank" rel="noopener noreferrer">{book}</a></div>
</article>
"#,
        locale = locale,
        back = escape_html(dict.blog_back),
        category = escape_html(post.category),
        date = escape_html(post.date),
        title = escape_html(post.title),
        excerpt = escape_html(post.excerpt),
        image = escape_attr(post.image),
        alt = escape_attr(post.title),
        content = render_content(post.content),
        cta_title = escape_html(dict.blog_cta_title),
        cta_text = escape_html(dict.blog_cta_text),
        whatsapp = WHATSAPP_URL,
        book = escape_html(dict.nav_book),
    );

    layout(base_url, locale, &seo, &body)
}

/// `/{locale}/privacy`
pub fn render_privacy(base_url: &str, locale: Locale) -> String {
    let dict = LocaleStrings::for_locale(locale);
    let seo = build_seo(base_url, locale)
        .with_page(dict.privacy_meta_title, None)
        .with_url(format!("{}/{}/privacy", base_url, locale));

    let mut body = format!(
        "<main class=\"policy\">\n<h1>{}</h1>\n<p class=\"updated\">{}</p>\n<p>{}</p>\n",
        escape_html(dict.privacy_title),
        escape_html(dict.privacy_last_updated),
        escape_html(dict.privacy_intro),
    );
    for section in dict.privacy_sections {
        body.push_str(&policy_section(section));
    }
    let _ = write!(
        body,
        "<div class=\"contacts\"><p>{}</p><p>{}</p><p>{}</p></div>\n</main>\n",
        escape_html(dict.contact_email),
        escape_html(dict.contact_phone),
        escape_html(dict.contact_address),
    );

    layout(base_url, locale, &seo, &body)
}

/// `/{locale}/delete-account`
pub fn render_delete_account(base_url: &str, locale: Locale) -> String {
    let dict = LocaleStrings::for_locale(locale);
    let seo = build_seo(base_url, locale)
        .with_page(dict.delete_meta_title, None)
        .with_url(format!("{}/{}/delete-account", base_url, locale));

    let whatsapp_link = format!(
        "{}?text={}",
        WHATSAPP_URL,
        encode_uri_component(dict.delete_request_message)
    );

    let mut body = format!(
        "<main class=\"policy\">\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n<p>{}</p>\n<section><h2>{}</h2><ul>",
        escape_html(dict.delete_title),
        escape_html(dict.delete_subtitle),
        escape_html(dict.delete_intro),
        escape_html(dict.delete_items_title),
    );
    for item in dict.delete_items {
        let _ = write!(body, "<li>{}</li>", escape_html(item));
    }
    let _ = write!(
        body,
        "</ul></section>\n<section><h2>{}</h2><p>{}</p>\
         <a class=\"btn-premium\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></section>\n</main>\n",
        escape_html(dict.delete_how_title),
        escape_html(dict.delete_how_text),
        escape_attr(&whatsapp_link),
        escape_html(dict.delete_button),
    );

    layout(base_url, locale, &seo, &body)
}

/// 404 body in the given locale.
pub fn render_not_found(base_url: &str, locale: Locale) -> String {
    let dict = LocaleStrings::for_locale(locale);
    let seo = build_seo(base_url, locale).with_page("404", None);
    let body = format!(
        "<main class=\"not-found\"><h1>404</h1><a href=\"/{}\">{}</a></main>\n",
        locale,
        escape_html(dict.home)
    );
    layout(base_url, locale, &seo, &body)
}

fn layout(base_url: &str, locale: Locale, seo: &SeoMetadata, body: &str) -> String {
    let structured = build_structured_data(base_url, locale);
    let dict = LocaleStrings::for_locale(locale);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=5">
<meta name="theme-color" content="{theme}">
{head}<script type="application/ld+json">{json_ld}</script>
<link rel="dns-prefetch" href="https://www.instagram.com">
<link rel="dns-prefetch" href="https://wa.me">
</head>
<body>
{header}{body}{footer}</body>
</html>
"#,
        lang = locale.code(),
        theme = THEME_COLOR,
        head = seo.render_head(),
        json_ld = to_script_json(&structured),
        header = site_header(locale, dict),
        body = body,
        footer = site_footer(locale, dict),
    )
}

fn site_header(locale: Locale, dict: &LocaleStrings) -> String {
    let mut out = format!(
        r##"<header><a class="logo" href="/{locale}"><img src="/images/logo.png" alt="{site}"></a>
<nav><a href="/{locale}#about">{about}</a> <a href="/{locale}#services">{services}</a> <a href="/{locale}#blog">{blog}</a> <a href="/{locale}#contacts">{contacts}</a></nav>
<ul class="locale-switcher">"##,
        locale = locale,
        site = SITE_NAME,
        about = escape_html(dict.nav_about),
        services = escape_html(dict.nav_services),
        blog = escape_html(dict.nav_blog),
        contacts = escape_html(dict.nav_contacts),
    );
    for other in Locale::all() {
        let current = if other == locale {
            r#" aria-current="true""#
        } else {
            ""
        };
        let _ = write!(
            out,
            r#"<li><a href="/{}" hreflang="{}"{}>{}</a></li>"#,
            other,
            other,
            current,
            escape_html(other.native_name())
        );
    }
    out.push_str("</ul></header>\n");
    out
}

fn site_footer(locale: Locale, dict: &LocaleStrings) -> String {
    format!(
        "<footer><a href=\"/{locale}/privacy\">{privacy}</a> <a href=\"/{locale}/delete-account\">{delete}</a>\
         <p>© {site}. {rights}</p></footer>\n",
        locale = locale,
        privacy = escape_html(dict.footer_privacy),
        delete = escape_html(dict.footer_delete_account),
        site = SITE_NAME,
        rights = escape_html(dict.footer_rights),
    )
}

fn lead_form(dict: &LocaleStrings, variant: &LeadFormStrings) -> String {
    format!(
        r#"<section class="lead"><h2>{title}</h2><p>{subtitle}</p>
<form class="lead-form" data-source="{source}" data-sending="{sending}" data-success="{success}" data-error="{error}">
<input type="text" name="name" placeholder="{name}" required>
<input type="tel" name="phone" placeholder="+7 (___) ___-__-__" required>
<button type="submit">{button}</button>
<p class="lead-status" role="status"></p>
</form></section>
"#,
        title = escape_html(variant.title),
        subtitle = escape_html(variant.subtitle),
        source = escape_attr(variant.title),
        sending = escape_attr(dict.form_sending),
        success = escape_attr(dict.form_success),
        error = escape_attr(dict.form_error),
        name = escape_attr(dict.form_name),
        button = escape_html(variant.button),
    )
}

fn services_section(dict: &LocaleStrings) -> String {
    let mut out = format!(
        "<section id=\"services\"><p class=\"label\">{}</p><h2>{}</h2>\n<div class=\"services-grid\">\n",
        escape_html(dict.nav_services),
        escape_html(dict.services_title)
    );
    for (i, card) in dict.services.iter().enumerate() {
        let _ = write!(
            out,
            "<div class=\"service\"><span class=\"number\">{:02}</span><h3>{}</h3><p>{}</p><ul>",
            i + 1,
            escape_html(card.title),
            escape_html(card.description)
        );
        for feature in card.features {
            let _ = write!(out, "<li>{}</li>", escape_html(feature));
        }
        out.push_str("</ul></div>\n");
    }
    out.push_str("</div></section>\n");
    out
}

fn benefits_section(dict: &LocaleStrings) -> String {
    let mut out = format!(
        "<section id=\"benefits\"><p class=\"label\">{}</p><h2>{}</h2>\n<ol class=\"benefits\">\n",
        escape_html(dict.benefits_label),
        escape_html(dict.benefits_title)
    );
    for benefit in dict.benefits {
        let _ = writeln!(
            out,
            "<li><h3>{}</h3><p>{}</p></li>",
            escape_html(benefit.title),
            escape_html(benefit.description)
        );
    }
    out.push_str("</ol></section>\n");
    out
}

fn blog_section(locale: Locale, dict: &LocaleStrings) -> String {
    let mut out = format!(
        "<section id=\"blog\"><h2>{}</h2>\n<div class=\"blog-grid\">\n",
        escape_html(dict.blog_title)
    );
    for post in all_blog_posts() {
        let _ = writeln!(
            out,
            r#"<a class="blog-card" href="/{}/blog/{}"><img src="{}" alt="{}"><p class="date">{}</p><h3>{}</h3><p>{}</p><span>{}</span></a>"#,
            locale,
            post.slug,
            escape_attr(post.image),
            escape_attr(post.title),
            escape_html(post.date),
            escape_html(post.title),
            escape_html(post.excerpt),
            escape_html(dict.blog_read_more),
        );
    }
    out.push_str("</div></section>\n");
    out
}

fn policy_section(section: &PolicySection) -> String {
    let mut out = format!(
        "<section><h2>{}</h2><p>{}</p>",
        escape_html(section.title),
        escape_html(section.text)
    );
    if !section.items.is_empty() {
        out.push_str("<ul>");
        for item in section.items {
            let _ = write!(out, "<li>{}</li>", escape_html(item));
        }
        out.push_str("</ul>");
    }
    out.push_str("</section>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::get_blog_post;

    const BASE: &str = "https://forme.kz";

    #[test]
    fn test_home_has_lang_and_head() {
        let html = render_home(BASE, Locale::KAZAKH);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="kk">"#));
        assert!(html.contains("<title>FORME — Алматыдағы премиум әйелдер фитнес-клубы"));
        assert!(html.contains(r#"<script type="application/ld+json">{"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://forme.kz/kk">"#));
    }

    #[test]
    fn test_home_has_three_lead_forms() {
        let html = render_home(BASE, Locale::ENGLISH);
        assert_eq!(html.matches(r#"<form class="lead-form""#).count(), 3);
        assert!(html.contains(r#"data-source="Club tour""#));
        assert!(html.contains(r#"data-source="Trial training""#));
        assert!(html.contains("fetch('/api/lead'"));
    }

    #[test]
    fn test_home_has_services_and_benefits() {
        let html = render_home(BASE, Locale::ENGLISH);
        assert!(html.contains(r#"<a href="/en#services">Services</a>"#));
        assert!(html.contains(r#"<section id="services">"#));
        assert!(html.contains(r#"<span class="number">01</span><h3>Personal training</h3>"#));
        assert!(html.contains("<li>Professional nanny</li>"));
        assert!(html.contains("<h2>Why women choose FORME</h2>"));
        assert_eq!(html.matches("<li><h3>").count(), 5);
        assert!(html.contains("Book a consultation"));
    }

    #[test]
    fn test_home_section_order() {
        let html = render_home(BASE, Locale::RUSSIAN);
        let pos = |needle: &str| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle));
        assert!(pos(r#"<section id="about">"#) < pos(r#"<section class="cta">"#));
        assert!(pos(r#"<section class="cta">"#) < pos(r#"<section id="services">"#));
        assert!(pos(r#"<section id="services">"#) < pos(r#"data-source="Экскурсия по клубу""#));
        assert!(pos(r#"<section id="benefits">"#) < pos(r#"<section id="blog">"#));
    }

    #[test]
    fn test_home_links_blog_posts_under_locale() {
        let html = render_home(BASE, Locale::ENGLISH);
        for post in all_blog_posts() {
            assert!(html.contains(&format!("href=\"/en/blog/{}\"", post.slug)));
        }
    }

    #[test]
    fn test_locale_switcher_marks_current() {
        let html = render_home(BASE, Locale::RUSSIAN);
        assert!(html.contains(r#"<a href="/ru" hreflang="ru" aria-current="true">Русский</a>"#));
        assert!(html.contains(r#"<a href="/kk" hreflang="kk">Қазақша</a>"#));
    }

    #[test]
    fn test_blog_post_page() {
        let post = get_blog_post("fitness-i-materinstvo").unwrap();
        let html = render_blog_post(BASE, Locale::ENGLISH, post);
        assert!(html.contains(&format!("<title>{} | FORME</title>", post.title)));
        assert!(html.contains(r#"<link rel="canonical" href="https://forme.kz/en/blog/fitness-i-materinstvo">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://forme.kz/images/blog-materinstvo.jpg">"#));
        assert!(html.contains("<h2>Детская зона с няней</h2>"));
        assert!(html.contains("Back to Home"));
        assert!(html.contains("Ready to start training?"));
    }

    #[test]
    fn test_privacy_page_title_and_sections() {
        let html = render_privacy(BASE, Locale::KAZAKH);
        assert!(html.contains("<title>Құпиялық саясаты | FORME</title>"));
        let sections = LocaleStrings::for_locale(Locale::KAZAKH).privacy_sections.len();
        assert_eq!(html.matches("<section><h2>").count(), sections);
        assert!(html.contains("Forme.gym@list.ru"));
    }

    #[test]
    fn test_delete_account_whatsapp_link_is_encoded() {
        let html = render_delete_account(BASE, Locale::ENGLISH);
        assert!(html.contains("<title>Personal Data Deletion | FORME</title>"));
        assert!(html.contains("https://wa.me/77022222566?text=Hello!%20Please%20delete%20my%20personal%20data."));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found(BASE, Locale::RUSSIAN);
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("<title>404 | FORME</title>"));
    }

    #[test]
    fn test_footer_links_policies() {
        let html = render_home(BASE, Locale::ENGLISH);
        assert!(html.contains(r#"<a href="/en/privacy">Privacy Policy</a>"#));
        assert!(html.contains(r#"<a href="/en/delete-account">Data deletion</a>"#));
    }
}
