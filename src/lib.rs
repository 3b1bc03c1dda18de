pub mod blog;
pub mod config;
pub mod error;
pub mod html;
pub mod i18n;
pub mod lead;
pub mod pages;
pub mod routing;
pub mod seo;
pub mod server;
pub mod sitemap;
pub mod telegram;
