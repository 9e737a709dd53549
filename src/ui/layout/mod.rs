//! Page chrome: navbar, footer and brand mark

mod footer;
mod logo;
mod navbar;

pub use footer::Footer;
pub use logo::Logo;
pub use navbar::Navbar;
