//! schema.org JSON-LD graph describing the club.

use super::catalog::{
    BusinessText, AMENITIES, COUNTRY, EMAIL, LATITUDE, LOGO_PATH, LONGITUDE, MAP_URL,
    OG_IMAGE_PATH, OPENING_HOURS, POSTAL_CODE, RATING_VALUE, REVIEW_COUNT, SITE_NAME, TELEPHONE,
    INSTAGRAM_URL, WHATSAPP_URL,
};
use crate::i18n::Locale;
use serde_json::{json, Value};

/// `@type` of every graph node, in emission order
pub const ENTITY_TYPES: [&str; 4] = [
    "SportsActivityLocation",
    "WebSite",
    "BreadcrumbList",
    "LocalBusiness",
];

/// Build the linked-data document for a locale.
///
/// All four entities are always present; only text fields vary by locale.
pub fn build_structured_data(base_url: &str, locale: Locale) -> Value {
    let text = BusinessText::for_locale(locale);
    let locale_url = format!("{}/{}", base_url, locale.code());
    let organization_id = format!("{}/#organization", base_url);
    let image = format!("{}{}", base_url, OG_IMAGE_PATH);

    let opening_hours: Vec<Value> = OPENING_HOURS
        .iter()
        .map(|(days, opens, closes)| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": days,
                "opens": opens,
                "closes": closes,
            })
        })
        .collect();

    let amenities: Vec<Value> = AMENITIES
        .iter()
        .map(|name| {
            json!({
                "@type": "LocationFeatureSpecification",
                "name": name,
                "value": true,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": ENTITY_TYPES[0],
                "@id": organization_id,
                "name": text.name,
                "alternateName": SITE_NAME,
                "description": text.description,
                "url": locale_url,
                "telephone": TELEPHONE,
                "email": EMAIL,
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": text.street_address,
                    "addressLocality": text.address_locality,
                    "addressRegion": text.address_region,
                    "postalCode": POSTAL_CODE,
                    "addressCountry": COUNTRY,
                },
                "geo": {
                    "@type": "GeoCoordinates",
                    "latitude": LATITUDE,
                    "longitude": LONGITUDE,
                },
                "image": image,
                "logo": format!("{}{}", base_url, LOGO_PATH),
                "priceRange": "$$$",
                "currenciesAccepted": "KZT",
                "paymentAccepted": "Cash, Credit Card",
                "openingHoursSpecification": opening_hours,
                "amenityFeature": amenities,
                "sameAs": [INSTAGRAM_URL, WHATSAPP_URL],
                "hasMap": MAP_URL,
            },
            {
                "@type": ENTITY_TYPES[1],
                "@id": format!("{}/#website", base_url),
                "url": base_url,
                "name": SITE_NAME,
                "description": text.description,
                "publisher": { "@id": organization_id },
                "inLanguage": locale.language_tag(),
                "potentialAction": {
                    "@type": "SearchAction",
                    "target": format!("{}?q={{search_term_string}}", locale_url),
                    "query-input": "required name=search_term_string",
                },
            },
            {
                "@type": ENTITY_TYPES[2],
                "@id": format!("{}/#breadcrumb", base_url),
                "itemListElement": [
                    {
                        "@type": "ListItem",
                        "position": 1,
                        "name": text.breadcrumb_home,
                        "item": locale_url,
                    }
                ],
            },
            {
                "@type": ENTITY_TYPES[3],
                "@id": format!("{}/#localbusiness", base_url),
                "name": text.name,
                "image": image,
                "telephone": TELEPHONE,
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": text.street_address_short,
                    "addressLocality": text.address_locality,
                    "addressCountry": COUNTRY,
                },
                "aggregateRating": {
                    "@type": "AggregateRating",
                    "ratingValue": RATING_VALUE,
                    "reviewCount": REVIEW_COUNT,
                },
            },
        ],
    })
}

/// Serialize the document for a `<script type="application/ld+json">` body.
///
/// `<` is emitted as `\u003c` so text fields can never close the script tag.
pub fn to_script_json(document: &Value) -> String {
    document.to_string().replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://forme.kz";

    fn graph(locale: Locale) -> Vec<Value> {
        build_structured_data(BASE, locale)["@graph"]
            .as_array()
            .expect("graph should be an array")
            .clone()
    }

    #[test]
    fn test_graph_has_exactly_four_entities_for_all_locales() {
        for locale in Locale::all() {
            let types: Vec<_> = graph(locale)
                .iter()
                .map(|e| e["@type"].as_str().unwrap().to_string())
                .collect();
            assert_eq!(types, ENTITY_TYPES.to_vec(), "locale {}", locale);
        }
    }

    #[test]
    fn test_context_is_schema_org() {
        let doc = build_structured_data(BASE, Locale::RUSSIAN);
        assert_eq!(doc["@context"], "https://schema.org");
    }

    #[test]
    fn test_organization_fields() {
        let nodes = graph(Locale::KAZAKH);
        let org = &nodes[0];
        assert_eq!(org["@id"], "https://forme.kz/#organization");
        assert_eq!(org["name"], "FORME — Премиум әйелдер фитнес-клубы");
        assert_eq!(org["url"], "https://forme.kz/kk");
        assert_eq!(org["address"]["streetAddress"], "Әл-Фараби, 41/7, блок 7");
        assert_eq!(org["address"]["addressRegion"], "Алматы қаласы");
        assert_eq!(org["address"]["postalCode"], "050059");
        assert_eq!(org["geo"]["latitude"], 43.218);
        assert_eq!(org["geo"]["longitude"], 76.9282);
        assert_eq!(org["openingHoursSpecification"].as_array().unwrap().len(), 2);
        assert_eq!(org["openingHoursSpecification"][1]["opens"], "09:00");
        assert_eq!(org["amenityFeature"].as_array().unwrap().len(), 7);
        assert_eq!(org["sameAs"][0], "https://www.instagram.com/forme.women");
    }

    #[test]
    fn test_website_links_to_organization() {
        let nodes = graph(Locale::ENGLISH);
        let site = &nodes[1];
        assert_eq!(site["publisher"]["@id"], "https://forme.kz/#organization");
        assert_eq!(site["inLanguage"], "en-US");
        assert_eq!(
            site["potentialAction"]["target"],
            "https://forme.kz/en?q={search_term_string}"
        );
    }

    #[test]
    fn test_breadcrumb_label_per_locale() {
        let labels: Vec<_> = Locale::all()
            .into_iter()
            .map(|l| graph(l)[2]["itemListElement"][0]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(labels, vec!["Главная", "Басты бет", "Home"]);
        assert_eq!(graph(Locale::ENGLISH)[2]["itemListElement"][0]["item"], "https://forme.kz/en");
    }

    #[test]
    fn test_local_business_rating() {
        let nodes = graph(Locale::RUSSIAN);
        let business = &nodes[3];
        assert_eq!(business["aggregateRating"]["ratingValue"], "5");
        assert_eq!(business["aggregateRating"]["reviewCount"], "47");
        assert_eq!(business["address"]["streetAddress"], "Аль-Фараби, 41/7");
        assert!(business["address"].get("postalCode").is_none());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            build_structured_data(BASE, Locale::KAZAKH),
            build_structured_data(BASE, Locale::KAZAKH)
        );
    }

    #[test]
    fn test_script_json_has_no_raw_angle_bracket() {
        let doc = json!({ "name": "</script><b>" });
        let out = to_script_json(&doc);
        assert!(!out.contains('<'));
        assert!(out.contains("\\u003c/script>"));
    }
}
