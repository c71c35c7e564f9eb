use leptos::prelude::*;

/// Renders `/icons/{name}.svg` as an image
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and placement
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const LEAF: &str = "leaf";
    pub const TREE_PINE: &str = "tree-pine";
    pub const DROPLETS: &str = "droplets";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const WIND: &str = "wind";
    pub const FLOWER: &str = "flower";
    pub const MAIL: &str = "mail";
    pub const LOG_OUT: &str = "log-out";
    pub const COMPASS: &str = "compass";
}
