//! Per-locale SEO and business text tables plus the fixed business facts.

use crate::i18n::Locale;

pub const SITE_NAME: &str = "FORME";
pub const TITLE_TEMPLATE: &str = "%s | FORME";
pub const TELEPHONE: &str = "+77022222566";
pub const EMAIL: &str = "Forme.gym@list.ru";
pub const OG_IMAGE_PATH: &str = "/images/og-image.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const LOGO_PATH: &str = "/images/logo.png";
pub const TWITTER_CREATOR: &str = "@forme_women";
pub const LATITUDE: f64 = 43.218;
pub const LONGITUDE: f64 = 76.9282;
pub const POSTAL_CODE: &str = "050059";
pub const COUNTRY: &str = "KZ";
pub const GEO_REGION: &str = "KZ-ALA";
pub const GEO_PLACENAME: &str = "Almaty";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/forme.women";
pub const WHATSAPP_URL: &str = "https://wa.me/77022222566";
pub const MAP_URL: &str = "https://go.2gis.com/0oeQS";
pub const RATING_VALUE: &str = "5";
pub const REVIEW_COUNT: &str = "47";

pub const AMENITIES: &[&str] = &[
    "TechnoGym Equipment",
    "Personal Training",
    "Women Only",
    "Private Training",
    "Kids Area",
    "Sauna",
    "No Cameras Policy",
];

/// Opening hours as (days, opens, closes)
pub const OPENING_HOURS: &[(&[&str], &str, &str)] = &[
    (
        &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "07:00",
        "22:00",
    ),
    (&["Saturday", "Sunday"], "09:00", "20:00"),
];

/// Search-facing page copy for one locale
#[derive(Debug, Clone)]
pub struct SeoRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Display order only
    pub keywords: &'static [&'static str],
    pub image_alt: &'static str,
}

/// Localized business wording used in the JSON-LD graph
#[derive(Debug, Clone)]
pub struct BusinessText {
    pub name: &'static str,
    pub description: &'static str,
    pub street_address: &'static str,
    pub street_address_short: &'static str,
    pub address_locality: &'static str,
    pub address_region: &'static str,
    pub breadcrumb_home: &'static str,
}

impl SeoRecord {
    pub fn for_locale(locale: Locale) -> &'static SeoRecord {
        match locale.code() {
            "kk" => &KAZAKH_SEO,
            "en" => &ENGLISH_SEO,
            _ => &RUSSIAN_SEO,
        }
    }

    pub fn has_locale(code: &str) -> bool {
        matches!(code, "ru" | "kk" | "en")
    }
}

impl BusinessText {
    pub fn for_locale(locale: Locale) -> &'static BusinessText {
        match locale.code() {
            "kk" => &KAZAKH_BUSINESS,
            "en" => &ENGLISH_BUSINESS,
            _ => &RUSSIAN_BUSINESS,
        }
    }

    pub fn has_locale(code: &str) -> bool {
        matches!(code, "ru" | "kk" | "en")
    }

    pub fn fields(&self) -> [(&'static str, &'static str); 7] {
        [
            ("name", self.name),
            ("description", self.description),
            ("street_address", self.street_address),
            ("street_address_short", self.street_address_short),
            ("address_locality", self.address_locality),
            ("address_region", self.address_region),
            ("breadcrumb_home", self.breadcrumb_home),
        ]
    }
}

pub const RUSSIAN_SEO: SeoRecord = SeoRecord {
    title: "FORME — Премиальный женский фитнес-клуб в Алматы | Персональные тренировки",
    description: "Приватный премиум фитнес-клуб для женщин в ЖК Metropole, Алматы. Персональные тренировки на TechnoGym. Без камер, полная приватность. Детская зона с няней. Записаться: +7 702 222 25 66",
    keywords: &[
        "женский фитнес клуб Алматы",
        "премиум фитнес для женщин",
        "персональные тренировки Алматы",
        "приватный фитнес клуб",
        "TechnoGym Алматы",
        "фитнес без камер",
        "женский тренажерный зал",
        "фитнес ЖК Metropole",
        "Аль-Фараби фитнес",
        "forme fitness",
        "форме фитнес Алматы",
        "фитнес с детской комнатой",
        "элитный фитнес клуб",
        "VIP фитнес Алматы",
        "тренировки для женщин Алматы",
    ],
    image_alt: "FORME — Премиальный женский фитнес-клуб",
};

pub const KAZAKH_SEO: SeoRecord = SeoRecord {
    title: "FORME — Алматыдағы премиум әйелдер фитнес-клубы | Жеке жаттығулар",
    description: "Алматы, ЖК Metropole-дегі әйелдерге арналған жеке премиум фитнес-клуб. TechnoGym жабдығында жеке жаттығулар. Камерасыз, толық құпиялық. Күтушімен балалар бөлмесі. Жазылу: +7 702 222 25 66",
    keywords: &[
        "әйелдер фитнес клубы Алматы",
        "премиум фитнес әйелдерге",
        "жеке жаттығулар Алматы",
        "жеке фитнес клуб",
        "TechnoGym Алматы",
        "камерасыз фитнес",
        "әйелдер тренажер залы",
        "фитнес ЖК Metropole",
        "Әл-Фараби фитнес",
        "forme fitness",
        "форме фитнес Алматы",
        "балалар бөлмесі бар фитнес",
        "элиталық фитнес клуб",
        "VIP фитнес Алматы",
    ],
    image_alt: "FORME — Премиум әйелдер фитнес-клубы",
};

pub const ENGLISH_SEO: SeoRecord = SeoRecord {
    title: "FORME — Premium Women's Fitness Club in Almaty | Personal Training",
    description: "Private premium fitness club for women in Metropole Residence, Almaty. Personal training on TechnoGym equipment. No cameras, complete privacy. Kids zone with nanny. Book: +7 702 222 25 66",
    keywords: &[
        "women fitness club Almaty",
        "premium fitness for women",
        "personal training Almaty",
        "private fitness club",
        "TechnoGym Almaty",
        "no camera fitness",
        "women gym Almaty",
        "fitness Metropole Residence",
        "Al-Farabi fitness",
        "forme fitness",
        "fitness with kids room",
        "elite fitness club",
        "VIP fitness Almaty",
        "women workout Almaty",
        "luxury gym Kazakhstan",
    ],
    image_alt: "FORME — Premium Women's Fitness Club",
};

pub const RUSSIAN_BUSINESS: BusinessText = BusinessText {
    name: "FORME — Премиальный женский фитнес-клуб",
    description: "Приватный премиальный фитнес-клуб для женщин в Алматы. Персональные тренировки на оборудовании TechnoGym. Полная приватность, без камер.",
    street_address: "Аль-Фараби, 41/7, блок 7",
    street_address_short: "Аль-Фараби, 41/7",
    address_locality: "Almaty",
    address_region: "Almaty",
    breadcrumb_home: "Главная",
};

pub const KAZAKH_BUSINESS: BusinessText = BusinessText {
    name: "FORME — Премиум әйелдер фитнес-клубы",
    description: "Алматыдағы әйелдерге арналған жеке премиум фитнес-клуб. TechnoGym жабдығында жеке жаттығулар. Толық құпиялық, камерасыз.",
    street_address: "Әл-Фараби, 41/7, блок 7",
    street_address_short: "Әл-Фараби, 41/7",
    address_locality: "Алматы",
    address_region: "Алматы қаласы",
    breadcrumb_home: "Басты бет",
};

pub const ENGLISH_BUSINESS: BusinessText = BusinessText {
    name: "FORME — Premium Women's Fitness Club",
    description: "Private premium fitness club for women in Almaty. Personal training on TechnoGym equipment. Complete privacy, no cameras.",
    street_address: "Al-Farabi, 41/7, block 7",
    street_address_short: "Al-Farabi, 41/7",
    address_locality: "Almaty",
    address_region: "Almaty",
    breadcrumb_home: "Home",
};
