//! Dashboard page
//!
//! Greets whoever signed in. Without a session it sends the visitor to the
//! sign-in page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();

    Effect::new(move |_| {
        if !session.is_signed_in() {
            let navigate = use_navigate();
            navigate("/auth", Default::default());
        }
    });

    let on_sign_out = move |_: ()| {
        session.sign_out();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-emerald-50 dark:bg-gray-900">
            {move || {
                session.current.get().map(|identity| {
                    let palette = identity.role.palette();
                    view! {
                        <div class="w-full max-w-md text-center rounded-xl border-2 border-emerald-200 dark:border-gray-600
                                    bg-white/80 dark:bg-gray-800/80 shadow-lg p-8 auth-fade-in-up">
                            <div class=format!(
                                "w-20 h-20 mx-auto mb-6 rounded-full bg-gradient-to-r {} flex items-center justify-center",
                                palette.gradient,
                            )>
                                <Icon name=identity.role.icon() class="w-8 h-8 icon-invert" />
                            </div>
                            <h1 class="text-emerald-800 dark:text-emerald-200 mb-2">
                                {format!("Welcome, {}", identity.display_name)}
                            </h1>
                            <p class=format!("mb-8 {} dark:text-gray-300", palette.text)>
                                {format!("Signed in as {}", identity.role.title())}
                            </p>
                            <Button
                                variant=ButtonVariant::Outline
                                icon=icons::LOG_OUT
                                on_click=on_sign_out
                            >
                                "Sign out"
                            </Button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
