//! Animation building blocks shared by the landing page sections

pub mod animated_counter;
pub mod animated_text;
pub mod floating_blob;
pub mod scroll_reveal;
pub mod styles;

pub use animated_counter::AnimatedCounter;
pub use animated_text::AnimatedText;
pub use floating_blob::FloatingBlob;
pub use scroll_reveal::{ScrollReveal, use_reveal_once};
pub use styles::MotionStyles;
