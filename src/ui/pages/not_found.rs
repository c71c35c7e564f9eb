//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-emerald-50 dark:bg-gray-900 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white dark:bg-gray-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::TREE_PINE class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-emerald-800 dark:text-emerald-200 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-emerald-800 dark:text-emerald-200 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-emerald-700 dark:text-emerald-300 mb-8 max-w-md mx-auto">
                    "This trail doesn't lead anywhere."
                </p>

                <A href="/" attr:class="btn-base btn-primary">
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
