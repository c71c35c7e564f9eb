//! Role selection and mock sign-in screen
//!
//! Owns only local UI state (selected role, credentials draft, mode and the
//! decorative reveal). Navigation, theme and the resulting session all
//! belong to the caller and are reached through the component's callbacks.

use std::time::Duration;

use leptos::prelude::*;

use super::credentials_form::CredentialsForm;
use super::floating_elements::FloatingElements;
use super::role_picker::RolePicker;
use crate::core::{AuthFlow, AuthSuccess, AuthView, DEFAULT_REVEAL_DELAY, RevealSchedule, Role};
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme_toggle::ThemeToggle;

#[component]
pub fn EcoAuth(
    /// "Back" button in the header
    #[prop(into)]
    on_back: Callback<()>,
    /// Called once with the signed-in role and its display name
    #[prop(into)]
    on_auth_success: Callback<AuthSuccess>,
    #[prop(into)] is_dark_theme: Signal<bool>,
    #[prop(into)] on_toggle_theme: Callback<()>,
    /// Time between mount and the floating decorations appearing
    #[prop(default = DEFAULT_REVEAL_DELAY)]
    reveal_delay: Duration,
) -> impl IntoView {
    let flow = RwSignal::new(AuthFlow::new());
    let current_view = Memo::new(move |_| flow.with(|f| f.view()));

    let revealed = use_reveal(reveal_delay);

    view! {
        <div class="eco-auth relative min-h-screen overflow-hidden bg-gradient-to-br from-emerald-50 via-green-50 to-teal-50
                    dark:from-gray-900 dark:via-gray-800 dark:to-gray-900 py-8 px-4 transition-colors duration-300">
            <div class="absolute inset-0">
                <div class="eco-auth-backdrop w-full h-full opacity-10"></div>
                <div class="absolute inset-0 bg-gradient-to-t from-emerald-100/40 via-green-50/20 to-transparent"></div>
            </div>

            <Show when=move || revealed.get()>
                <FloatingElements />
            </Show>

            <div class="relative z-10 max-w-4xl mx-auto">
                <header class="flex items-center justify-between mb-8 auth-fade-in-down">
                    <Button
                        variant=ButtonVariant::Ghost
                        icon=icons::ARROW_LEFT
                        on_click=on_back
                    >
                        "Back"
                    </Button>

                    <div class="flex items-center gap-4">
                        <div class="flex items-center gap-2">
                            <Icon name=icons::LEAF class="w-6 h-6" />
                            <span class="brand-gradient">"EcoSplash"</span>
                        </div>

                        <ThemeToggle is_dark=is_dark_theme on_toggle=on_toggle_theme />
                    </div>
                </header>

                {move || match current_view.get() {
                    AuthView::RolePicker => view! {
                        <RolePicker on_select=move |role: Role| flow.update(|f| f.select_role(role)) />
                    }
                    .into_any(),
                    AuthView::Credentials(role) => view! {
                        <CredentialsForm role=role flow=flow on_auth_success=on_auth_success />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Arms the one-shot reveal timer for the current component and returns the
/// flag it flips. Teardown clears the timer and cancels the schedule, so a
/// late tick cannot touch disposed state.
fn use_reveal(delay: Duration) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let schedule = StoredValue::new(RevealSchedule::new(delay));

    #[cfg(feature = "hydrate")]
    {
        let tick = move || {
            if schedule.try_update_value(|s| s.fire()).unwrap_or(false) {
                set_revealed.try_set(true);
            }
        };
        match set_timeout_with_handle(tick, schedule.get_value().delay()) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => leptos::logging::warn!("could not arm reveal timer: {:?}", err),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_revealed;
    }

    on_cleanup(move || {
        schedule.try_update_value(|s| s.cancel());
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AuthFlowError, Provider};
    use crate::ui::auth::credentials_form::{SignInTrigger, complete_sign_in};

    fn render_screen() -> String {
        view! {
            <EcoAuth
                on_back=Callback::new(|_: ()| {})
                on_auth_success=Callback::new(|_: AuthSuccess| {})
                is_dark_theme=Signal::from(false)
                on_toggle_theme=Callback::new(|_: ()| {})
            />
        }
        .to_html()
    }

    /// Callback that stores whatever it last received
    fn recorder() -> (RwSignal<Option<AuthSuccess>>, Callback<AuthSuccess>) {
        let received = RwSignal::new(None);
        let callback = Callback::new(move |success: AuthSuccess| received.set(Some(success)));
        (received, callback)
    }

    // ========================================================================
    // Initial render
    // ========================================================================

    #[test]
    fn test_mounts_on_role_picker() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render_screen();

            assert!(html.contains("Choose Your Role"), "{html}");
            for role in Role::ALL {
                assert!(
                    html.contains(&format!("data-role=\"{}\"", role.as_str())),
                    "missing card for {role}: {html}"
                );
            }
            assert!(!html.contains("<form"), "{html}");
        });
    }

    #[test]
    fn test_decorations_hidden_at_mount() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render_screen();
            assert!(!html.contains("floating-element"), "{html}");
            assert!(html.contains("EcoSplash"), "{html}");
        });
    }

    #[test]
    fn test_credentials_form_renders_for_selected_role() {
        let owner = Owner::new();
        owner.with(|| {
            let mut draft = AuthFlow::new();
            draft.select_role(Role::Teacher);
            let flow = RwSignal::new(draft);

            let html = view! {
                <CredentialsForm
                    role=Role::Teacher
                    flow=flow
                    on_auth_success=Callback::new(|_: AuthSuccess| {})
                />
            }
            .to_html();

            assert!(html.contains("<form"), "{html}");
            assert!(html.contains("Welcome Back"), "{html}");
            assert!(html.contains("Sign in as a Teacher"), "{html}");
            assert!(html.contains("Continue with Google"), "{html}");
        });
    }

    // ========================================================================
    // Sign-in handlers
    // ========================================================================

    #[test]
    fn test_google_reaches_on_auth_success() {
        let owner = Owner::new();
        owner.with(|| {
            let (received, on_auth_success) = recorder();
            let mut flow = AuthFlow::new();
            flow.select_role(Role::Ngo);

            let result = complete_sign_in(
                &flow,
                SignInTrigger::Provider(Provider::Google),
                on_auth_success,
            );

            assert_eq!(result, Ok(()));
            assert_eq!(received.get_untracked(), Some(AuthSuccess::mock(Role::Ngo)));
        });
    }

    #[test]
    fn test_email_submit_reaches_on_auth_success() {
        let owner = Owner::new();
        owner.with(|| {
            let (received, on_auth_success) = recorder();
            let mut flow = AuthFlow::new();
            flow.select_role(Role::Student);
            flow.toggle_mode();
            flow.set_email("anything");
            flow.set_password("x");

            assert_eq!(
                complete_sign_in(&flow, SignInTrigger::EmailForm, on_auth_success),
                Ok(())
            );
            let success = received.get_untracked();
            assert_eq!(success, Some(AuthSuccess::mock(Role::Student)));
            assert_eq!(
                success.map(|s| s.display_name),
                Some("Alex Student".to_string())
            );
        });
    }

    #[test]
    fn test_empty_email_does_not_call_back() {
        let owner = Owner::new();
        owner.with(|| {
            let (received, on_auth_success) = recorder();
            let mut flow = AuthFlow::new();
            flow.select_role(Role::Teacher);
            flow.set_password("x");

            assert_eq!(
                complete_sign_in(&flow, SignInTrigger::EmailForm, on_auth_success),
                Err(AuthFlowError::MissingEmail)
            );
            assert_eq!(received.get_untracked(), None);
        });
    }
}
