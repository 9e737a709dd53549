pub mod common;
pub mod icon;
pub mod layout;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod seo;

pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage, StaticNotFoundPage};
