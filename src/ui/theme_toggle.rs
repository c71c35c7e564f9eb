use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Sun/moon button. Theme state lives with the caller.
#[component]
pub fn ThemeToggle(
    #[prop(into)] is_dark: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="theme-toggle p-2 rounded-full border border-emerald-200 dark:border-gray-600
                   bg-white/70 dark:bg-gray-800/70 hover:bg-emerald-50 dark:hover:bg-gray-700 transition-colors"
            title=move || if is_dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
            aria-pressed=move || is_dark.get().to_string()
            on:click=move |_| on_toggle.run(())
        >
            {move || {
                if is_dark.get() {
                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }
                }
            }}
        </button>
    }
}
