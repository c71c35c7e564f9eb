//! Role picker shown before any credentials are asked for

use leptos::prelude::*;

use crate::core::Role;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn RolePicker(
    /// Called with the card the visitor clicked
    #[prop(into)]
    on_select: Callback<Role>,
) -> impl IntoView {
    view! {
        <div class="text-center auth-stagger">
            <div class="mb-12 auth-fade-in-up">
                <div class="flex items-center justify-center gap-3 mb-6">
                    <span class="auth-spin-slow">
                        <Icon name=icons::LEAF class="w-8 h-8" />
                    </span>
                    <h1 class="text-emerald-800 dark:text-emerald-200 mb-0">"Choose Your Role"</h1>
                </div>
                <p class="text-emerald-700 dark:text-emerald-300 max-w-2xl mx-auto">
                    "Join our community of environmental champions. Select your role to get personalized content and connect with like-minded individuals."
                </p>
                <div class="w-32 h-1 bg-gradient-to-r from-emerald-500 to-teal-500 mx-auto rounded-full mt-4"></div>
            </div>

            <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                {Role::ALL
                    .into_iter()
                    .map(|role| view! { <RoleCard role=role on_select=on_select /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RoleCard(role: Role, on_select: Callback<Role>) -> impl IntoView {
    let palette = role.palette();

    view! {
        <div
            class="role-card cursor-pointer auth-fade-in-up"
            role="button"
            tabindex="0"
            data-role=role.as_str()
            on:click=move |_| on_select.run(role)
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_select.run(role);
                }
            }
        >
            <div class=format!(
                "h-full transition-all duration-300 hover:shadow-lg {} dark:border-gray-600 border-2 rounded-xl bg-gradient-to-br {} dark:from-gray-800 dark:to-gray-700 backdrop-blur-sm",
                palette.border,
                palette.bg_gradient,
            )>
                <div class="p-8 text-center h-full flex flex-col">
                    <div class=format!(
                        "w-16 h-16 mx-auto mb-6 rounded-full bg-gradient-to-r {} flex items-center justify-center",
                        palette.gradient,
                    )>
                        <Icon name=role.icon() class="w-7 h-7 icon-invert" />
                    </div>

                    <h3 class=format!("mb-4 {} dark:text-gray-200", palette.text)>{role.title()}</h3>
                    <p class="text-slate-700 dark:text-gray-300 flex-grow leading-relaxed">
                        {role.description()}
                    </p>

                    <div class="mt-6">
                        <div class=format!(
                            "w-full py-3 px-6 rounded-lg bg-gradient-to-r {} text-white transition-all duration-300 hover:shadow-md",
                            palette.gradient,
                        )>
                            {format!("Select {}", role.title())}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
