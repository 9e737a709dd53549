//! Application pages
//!
//! - Home page composed from the landing sections
//! - Not found page rendered by the router fallback
//! - Static not found document served for missing assets

mod home;
mod not_found;
mod static_not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use static_not_found::StaticNotFoundPage;
