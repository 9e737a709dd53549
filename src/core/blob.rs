//! Lookup tables for decorative floating blobs

use std::time::Duration;

use super::motion::css_seconds;

/// Blob size options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlobSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl BlobSize {
    pub fn class(&self) -> &'static str {
        match self {
            BlobSize::Small => "w-32 h-32",
            BlobSize::Medium => "w-64 h-64",
            BlobSize::Large => "w-96 h-96",
            BlobSize::ExtraLarge => "w-[32rem] h-[32rem]",
        }
    }
}

/// Blob color options, mapped to the theme's brand tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlobColor {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl BlobColor {
    pub fn class(&self) -> &'static str {
        match self {
            BlobColor::Primary => "bg-brand-primary/20",
            BlobColor::Secondary => "bg-brand-secondary/20",
            BlobColor::Accent => "bg-brand-accent/25",
        }
    }
}

/// Where the blob sits inside its positioned parent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlobAnchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl BlobAnchor {
    pub fn class(&self) -> &'static str {
        match self {
            BlobAnchor::TopLeft => "top-0 left-0 -translate-x-1/3 -translate-y-1/3",
            BlobAnchor::TopRight => "top-0 right-0 translate-x-1/3 -translate-y-1/3",
            BlobAnchor::BottomLeft => "bottom-0 left-0 -translate-x-1/3 translate-y-1/3",
            BlobAnchor::BottomRight => "bottom-0 right-0 translate-x-1/3 translate-y-1/3",
            BlobAnchor::Center => "top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2",
        }
    }
}

/// Full class list for a blob
pub fn blob_class(size: BlobSize, color: BlobColor, anchor: BlobAnchor) -> String {
    format!(
        "floating-blob absolute rounded-full blur-3xl pointer-events-none {} {} {}",
        size.class(),
        color.class(),
        anchor.class()
    )
}

/// Inline style offsetting the looping float animation
pub fn blob_style(delay: Duration) -> String {
    format!("animation-delay: {};", css_seconds(delay))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_are_distinct() {
        let sizes = [
            BlobSize::Small,
            BlobSize::Medium,
            BlobSize::Large,
            BlobSize::ExtraLarge,
        ];
        for (i, a) in sizes.iter().enumerate() {
            for b in &sizes[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }

    #[test]
    fn test_blob_class_combines_tables() {
        let class = blob_class(BlobSize::Large, BlobColor::Accent, BlobAnchor::Center);
        assert!(class.contains("w-96 h-96"));
        assert!(class.contains("bg-brand-accent/25"));
        assert!(class.contains("top-1/2 left-1/2"));
        assert!(class.starts_with("floating-blob"));
    }

    #[test]
    fn test_blob_style_uses_delay() {
        assert_eq!(
            blob_style(Duration::from_millis(2500)),
            "animation-delay: 2.50s;"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BlobSize::default(), BlobSize::Medium);
        assert_eq!(BlobColor::default(), BlobColor::Primary);
        assert_eq!(BlobAnchor::default(), BlobAnchor::TopLeft);
    }
}
