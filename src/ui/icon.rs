use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons used by page chrome; section icons are named in the page copy
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const HOME: &str = "home";
}
