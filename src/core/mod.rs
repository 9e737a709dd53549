//! Core presentation logic for the landing site: timing curves, lookup tables,
//! page copy and routes. Nothing here touches the DOM.

pub mod blob;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod motion;
pub mod routes;
pub mod seo;
