//! Landing page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::common::{Button, ButtonSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;
use crate::ui::theme::use_theme_context;
use crate::ui::theme_toggle::ThemeToggle;

#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let session = use_session_context();

    // Signed-in visitors skip straight to their dashboard
    let on_get_started = move |_: ()| {
        let navigate = use_navigate();
        if session.is_signed_in() {
            navigate("/dashboard", Default::default());
        } else {
            navigate("/auth", Default::default());
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-50 via-green-50 to-teal-50
                    dark:from-gray-900 dark:via-gray-800 dark:to-gray-900 transition-colors duration-300">
            <header class="max-w-5xl mx-auto px-4 py-6 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <Icon name=icons::LEAF class="w-6 h-6" />
                    <span class="brand-gradient text-xl font-bold">"EcoSplash"</span>
                </div>
                <ThemeToggle
                    is_dark=theme.is_dark
                    on_toggle=Callback::new(move |_: ()| theme.toggle())
                />
            </header>

            <section class="flex items-center justify-center px-4 pt-24">
                <div class="text-center max-w-2xl auth-fade-in-up">
                    <h1 class="text-5xl font-bold text-emerald-800 dark:text-emerald-200 mb-6">
                        "Learn, teach and act for the planet"
                    </h1>
                    <p class="text-lg text-emerald-700 dark:text-emerald-300 mb-10">
                        "Students, teachers and NGOs working together on real environmental projects."
                    </p>
                    <Button size=ButtonSize::Large icon=icons::COMPASS on_click=on_get_started>
                        {move || if session.is_signed_in() { "Go to dashboard" } else { "Get started" }}
                    </Button>
                </div>
            </section>
        </div>
    }
}
