use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Where a decorative icon sits and when it fades in
struct FloatingElement {
    icon: &'static str,
    /// Inline CSS offsets, e.g. `top:10%;left:5%`
    position: &'static str,
    /// Seconds after reveal before the icon appears
    delay: f32,
}

static FLOATING_ELEMENTS: [FloatingElement; 6] = [
    FloatingElement { icon: icons::LEAF, position: "top:10%;left:5%", delay: 0.2 },
    FloatingElement { icon: icons::TREE_PINE, position: "top:20%;right:8%", delay: 0.4 },
    FloatingElement { icon: icons::DROPLETS, position: "top:60%;left:3%", delay: 0.6 },
    FloatingElement { icon: icons::SUN, position: "top:70%;right:5%", delay: 0.8 },
    FloatingElement { icon: icons::WIND, position: "bottom:15%;left:7%", delay: 1.0 },
    FloatingElement { icon: icons::FLOWER, position: "bottom:25%;right:10%", delay: 1.2 },
];

/// Nature icons drifting around the edges of the screen. Purely decorative,
/// hidden on small screens and from assistive technology.
#[component]
pub fn FloatingElements() -> impl IntoView {
    FLOATING_ELEMENTS
        .iter()
        .map(|element| {
            view! {
                <div
                    class="floating-element absolute pointer-events-none hidden md:block"
                    style=format!("{};animation-delay:{}s", element.position, element.delay)
                    aria-hidden="true"
                >
                    <div class="floating-drift">
                        <Icon name=element.icon class="w-8 h-8" />
                    </div>
                </div>
            }
        })
        .collect_view()
}
