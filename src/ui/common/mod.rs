//! Common reusable UI components

pub mod button;

pub use button::{ButtonSize, ButtonVariant, LinkButton};
