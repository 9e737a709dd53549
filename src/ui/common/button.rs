use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::Icon;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    /// Light button for use on the brand-colored call-to-action band
    Inverted,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Inverted => "btn-inverted",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = format!("btn-base {} {}", variant.class(), size.class());
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

/// Call-to-action styled as a button
///
/// Anchors starting with `#` or an external scheme render a plain `<a>`;
/// everything else goes through the router.
#[component]
pub fn LinkButton(
    /// Link target
    #[prop(into)]
    href: String,
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Optional icon name to show after the text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);
    let trailing_icon = icon.map(|name| view! { <Icon name=name class="w-4 h-4" /> });

    if is_plain_link(&href) {
        view! {
            <a href=href class=classes>
                {children()}
                {trailing_icon}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=href attr:class=classes>
                {children()}
                {trailing_icon}
            </A>
        }
        .into_any()
    }
}

fn is_plain_link(href: &str) -> bool {
    href.starts_with('#') || href.contains("://") || href.starts_with("mailto:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Primary, ButtonSize::Large, ""),
            "btn-base btn-primary btn-lg"
        );
        assert_eq!(
            button_classes(ButtonVariant::Inverted, ButtonSize::Small, "w-full"),
            "btn-base btn-inverted btn-sm w-full"
        );
    }

    #[test]
    fn test_plain_links() {
        assert!(is_plain_link("#get-started"));
        assert!(is_plain_link("mailto:hello@learnbridge.app"));
        assert!(is_plain_link("https://learnbridge.app"));
        assert!(!is_plain_link("/"));
    }
}
