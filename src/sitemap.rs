//! sitemap.xml generation with hreflang alternates.

use crate::blog::BlogPost;
use crate::html::escape_attr;
use crate::i18n::Locale;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// Same page in every other locale
    pub alternates: Vec<Alternate>,
}

/// One home entry per locale, then one entry per (locale, post).
pub fn build_sitemap(
    base_url: &str,
    posts: &[BlogPost],
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let locales = Locale::all();
    let mut entries = Vec::with_capacity(locales.len() * (1 + posts.len()));

    let entry = |locale: Locale, path: &str, change_frequency, priority| SitemapEntry {
        url: format!("{}/{}{}", base_url, locale.code(), path),
        last_modified,
        change_frequency,
        priority,
        alternates: locale
            .others()
            .into_iter()
            .map(|other| Alternate {
                hreflang: other.code(),
                href: format!("{}/{}{}", base_url, other.code(), path),
            })
            .collect(),
    };

    for &locale in &locales {
        entries.push(entry(locale, "", ChangeFrequency::Weekly, 1.0));
    }
    for &locale in &locales {
        for post in posts {
            let path = format!("/blog/{}", post.slug);
            entries.push(entry(locale, &path, ChangeFrequency::Monthly, 0.7));
        }
    }

    entries
}

/// Render entries as a sitemaps.org urlset with xhtml alternates.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );
    for entry in entries {
        out.push_str("<url>\n");
        let _ = writeln!(out, "<loc>{}</loc>", escape_attr(&entry.url));
        for alt in &entry.alternates {
            let _ = writeln!(
                out,
                "<xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                alt.hreflang,
                escape_attr(&alt.href)
            );
        }
        let _ = writeln!(
            out,
            "<lastmod>{}</lastmod>",
            entry.last_modified.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        );
        let _ = writeln!(
            out,
            "<changefreq>{}</changefreq>",
            entry.change_frequency.as_str()
        );
        let _ = writeln!(out, "<priority>{:.1}</priority>", entry.priority);
        out.push_str("</url>\n");
    }
    out.push_str("</urlset>\n");
    out
}
