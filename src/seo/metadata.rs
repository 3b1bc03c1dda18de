//! Head metadata: title, description, canonical/alternate links, Open Graph,
//! Twitter card, robots directives and geo tags for one locale.

use super::catalog::{
    SeoRecord, GEO_PLACENAME, GEO_REGION, LATITUDE, LONGITUDE, OG_IMAGE_HEIGHT, OG_IMAGE_PATH,
    OG_IMAGE_WIDTH, SITE_NAME, TITLE_TEMPLATE, TWITTER_CREATOR,
};
use crate::html::{escape_attr, escape_html};
use crate::i18n::Locale;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub locale: &'static str,
    pub title: Title,
    pub description: String,
    pub keywords: Vec<&'static str>,
    pub author: &'static str,
    pub creator: &'static str,
    pub publisher: &'static str,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub icons: Vec<IconLink>,
    pub manifest: &'static str,
    pub category: &'static str,
    pub classification: &'static str,
    /// Extra `<meta name=...>` pairs (geo tags)
    pub other: Vec<(&'static str, String)>,
}

/// Site title plus an optional page title rendered through the template
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub default: String,
    pub template: &'static str,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlternateLink {
    pub hreflang: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub locale: &'static str,
    pub alternate_locale: Vec<&'static str>,
    pub url: String,
    pub site_name: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub noimageindex: bool,
    pub max_video_preview: i32,
    pub max_image_preview: &'static str,
    pub max_snippet: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct IconLink {
    pub rel: &'static str,
    pub url: &'static str,
    pub sizes: Option<&'static str>,
    #[serde(rename = "type")]
    pub mime: Option<&'static str>,
}

/// Build the head metadata for a locale.
///
/// `base_url` has no trailing slash (e.g., "https://forme.kz").
pub fn build_seo(base_url: &str, locale: Locale) -> SeoMetadata {
    let seo = SeoRecord::for_locale(locale);
    let canonical = format!("{}/{}", base_url, locale.code());
    let image_url = format!("{}{}", base_url, OG_IMAGE_PATH);

    let mut alternates: Vec<AlternateLink> = Locale::all()
        .into_iter()
        .map(|l| AlternateLink {
            hreflang: l.code(),
            href: format!("{}/{}", base_url, l.code()),
        })
        .collect();
    alternates.push(AlternateLink {
        hreflang: "x-default",
        href: format!("{}/{}", base_url, Locale::default_locale().code()),
    });

    SeoMetadata {
        locale: locale.code(),
        title: Title {
            default: seo.title.to_string(),
            template: TITLE_TEMPLATE,
            page: None,
        },
        description: seo.description.to_string(),
        keywords: seo.keywords.to_vec(),
        author: SITE_NAME,
        creator: SITE_NAME,
        publisher: SITE_NAME,
        canonical: canonical.clone(),
        alternates,
        open_graph: OpenGraph {
            og_type: "website",
            locale: locale.og_locale(),
            alternate_locale: locale.others().iter().map(|l| l.og_locale()).collect(),
            url: canonical,
            site_name: SITE_NAME,
            title: seo.title.to_string(),
            description: seo.description.to_string(),
            images: vec![OgImage {
                url: image_url.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: seo.image_alt.to_string(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: seo.title.to_string(),
            description: seo.description.to_string(),
            images: vec![image_url],
            creator: TWITTER_CREATOR,
        },
        robots: Robots {
            index: true,
            follow: true,
            nocache: false,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                noimageindex: false,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            },
        },
        icons: vec![
            IconLink {
                rel: "icon",
                url: "/favicon.png",
                sizes: Some("32x32"),
                mime: Some("image/png"),
            },
            IconLink {
                rel: "icon",
                url: "/favicon.png",
                sizes: Some("16x16"),
                mime: Some("image/png"),
            },
            IconLink {
                rel: "shortcut icon",
                url: "/favicon.png",
                sizes: None,
                mime: None,
            },
            IconLink {
                rel: "apple-touch-icon",
                url: "/apple-touch-icon.png",
                sizes: Some("180x180"),
                mime: Some("image/png"),
            },
        ],
        manifest: "/manifest.json",
        category: "fitness",
        classification: "Business",
        other: vec![
            ("geo.region", GEO_REGION.to_string()),
            ("geo.placename", GEO_PLACENAME.to_string()),
            ("geo.position", format!("{};{}", LATITUDE, LONGITUDE)),
            ("ICBM", format!("{}, {}", LATITUDE, LONGITUDE)),
        ],
    }
}

impl SeoMetadata {
    /// Override title and description for a sub-page (blog post, policy page).
    pub fn with_page(mut self, title: &str, description: Option<&str>) -> Self {
        self.title.page = Some(title.to_string());
        self.open_graph.title = title.to_string();
        self.twitter.title = title.to_string();
        if let Some(description) = description {
            self.description = description.to_string();
            self.open_graph.description = description.to_string();
            self.twitter.description = description.to_string();
        }
        self
    }

    /// Point the canonical and Open Graph URLs at a sub-page.
    pub fn with_url(mut self, url: String) -> Self {
        self.canonical = url.clone();
        self.open_graph.url = url;
        self
    }

    /// Replace the share image, e.g. with a blog post cover.
    pub fn with_image(mut self, url: String, alt: &str) -> Self {
        self.open_graph.images = vec![OgImage {
            url: url.clone(),
            width: OG_IMAGE_WIDTH,
            height: OG_IMAGE_HEIGHT,
            alt: alt.to_string(),
        }];
        self.twitter.images = vec![url];
        self
    }

    /// The `<title>` text: page title through the template, or the site default.
    pub fn document_title(&self) -> String {
        match &self.title.page {
            Some(page) => self.title.template.replace("%s", page),
            None => self.title.default.clone(),
        }
    }

    /// Render the metadata as `<head>` elements.
    pub fn render_head(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.document_title()));
        push_meta_name(&mut out, "description", &self.description);
        push_meta_name(&mut out, "keywords", &self.keywords.join(", "));
        push_meta_name(&mut out, "author", self.author);
        push_meta_name(&mut out, "creator", self.creator);
        push_meta_name(&mut out, "publisher", self.publisher);
        push_meta_name(&mut out, "robots", &self.robots.directive());
        push_meta_name(&mut out, "googlebot", &self.robots.google_bot.directive());
        push_meta_name(&mut out, "category", self.category);
        push_meta_name(&mut out, "classification", self.classification);

        let _ = writeln!(
            out,
            r#"<link rel="canonical" href="{}">"#,
            escape_attr(&self.canonical)
        );
        for alt in &self.alternates {
            let _ = writeln!(
                out,
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                alt.hreflang,
                escape_attr(&alt.href)
            );
        }

        let og = &self.open_graph;
        push_meta_property(&mut out, "og:type", og.og_type);
        push_meta_property(&mut out, "og:locale", og.locale);
        for alt in &og.alternate_locale {
            push_meta_property(&mut out, "og:locale:alternate", alt);
        }
        push_meta_property(&mut out, "og:url", &og.url);
        push_meta_property(&mut out, "og:site_name", og.site_name);
        push_meta_property(&mut out, "og:title", &og.title);
        push_meta_property(&mut out, "og:description", &og.description);
        for image in &og.images {
            push_meta_property(&mut out, "og:image", &image.url);
            push_meta_property(&mut out, "og:image:width", &image.width.to_string());
            push_meta_property(&mut out, "og:image:height", &image.height.to_string());
            push_meta_property(&mut out, "og:image:alt", &image.alt);
        }

        let tw = &self.twitter;
        push_meta_name(&mut out, "twitter:card", tw.card);
        push_meta_name(&mut out, "twitter:creator", tw.creator);
        push_meta_name(&mut out, "twitter:title", &tw.title);
        push_meta_name(&mut out, "twitter:description", &tw.description);
        for image in &tw.images {
            push_meta_name(&mut out, "twitter:image", image);
        }

        for icon in &self.icons {
            let _ = write!(out, r#"<link rel="{}" href="{}""#, icon.rel, icon.url);
            if let Some(sizes) = icon.sizes {
                let _ = write!(out, r#" sizes="{}""#, sizes);
            }
            if let Some(mime) = icon.mime {
                let _ = write!(out, r#" type="{}""#, mime);
            }
            out.push_str(">\n");
        }
        let _ = writeln!(out, r#"<link rel="manifest" href="{}">"#, self.manifest);

        for (name, content) in &self.other {
            push_meta_name(&mut out, name, content);
        }
        out
    }
}

impl Robots {
    pub fn directive(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
        ];
        if self.nocache {
            parts.push("nocache");
        }
        parts.join(", ")
    }
}

impl GoogleBot {
    pub fn directive(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" }.to_string(),
            if self.follow { "follow" } else { "nofollow" }.to_string(),
        ];
        if self.noimageindex {
            parts.push("noimageindex".to_string());
        }
        parts.push(format!("max-video-preview:{}", self.max_video_preview));
        parts.push(format!("max-image-preview:{}", self.max_image_preview));
        parts.push(format!("max-snippet:{}", self.max_snippet));
        parts.join(", ")
    }
}

fn push_meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{}" content="{}">"#,
        escape_attr(name),
        escape_attr(content)
    );
}

fn push_meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{}" content="{}">"#,
        property,
        escape_attr(content)
    );
}
