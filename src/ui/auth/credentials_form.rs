//! Email/password form plus the mock Google button
//!
//! Neither path verifies anything: both resolve the selected role to its
//! canned identity and hand it to `on_auth_success`.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::{AuthFlow, AuthFlowError, AuthMode, AuthSuccess, Provider, Role};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// Which control started the sign-in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInTrigger {
    EmailForm,
    Provider(Provider),
}

/// Resolves the flow to its canned identity and hands it to `on_auth_success`.
/// Failures are logged and swallowed; the form's own validation keeps them
/// out of reach in practice.
pub fn complete_sign_in(
    flow: &AuthFlow,
    trigger: SignInTrigger,
    on_auth_success: Callback<AuthSuccess>,
) -> Result<(), AuthFlowError> {
    let outcome = match trigger {
        SignInTrigger::EmailForm => {
            match serde_json::to_string(&flow.login_attempt()) {
                Ok(attempt) => log!("Email login: {}", attempt),
                Err(err) => log!("Email login (unserializable attempt): {}", err),
            }
            flow.submit()
        }
        SignInTrigger::Provider(provider) => {
            log!("{} login for role: {:?}", provider, flow.role());
            flow.continue_with(provider)
        }
    };

    match outcome {
        Ok(success) => {
            on_auth_success.run(success);
            Ok(())
        }
        Err(err) => {
            log!("sign-in not completed: {}", err);
            Err(err)
        }
    }
}

#[component]
pub fn CredentialsForm(
    /// Role the form was opened for
    role: Role,
    /// Shared flow state owned by the screen
    flow: RwSignal<AuthFlow>,
    #[prop(into)] on_auth_success: Callback<AuthSuccess>,
) -> impl IntoView {
    let palette = role.palette();
    let mode = Memo::new(move |_| flow.with(|f| f.mode()));

    let on_google = move |_: ()| {
        let _ = flow.with_untracked(|f| {
            complete_sign_in(f, SignInTrigger::Provider(Provider::Google), on_auth_success)
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let _ =
            flow.with_untracked(|f| complete_sign_in(f, SignInTrigger::EmailForm, on_auth_success));
    };

    view! {
        <div class="max-w-md mx-auto auth-stagger">
            <div class="text-center mb-8 auth-fade-in-up">
                <div class=format!(
                    "w-20 h-20 mx-auto mb-6 rounded-full bg-gradient-to-r {} flex items-center justify-center",
                    palette.gradient,
                )>
                    <Icon name=role.icon() class="w-8 h-8 icon-invert" />
                </div>

                <h1 class="text-emerald-800 dark:text-emerald-200 mb-2">
                    {move || mode.get().heading()}
                </h1>
                <p class="text-emerald-700 dark:text-emerald-300">
                    {move || format!("{} as a {}", mode.get().verb(), role.title())}
                </p>
            </div>

            <div class="border-2 border-emerald-200 dark:border-gray-600 rounded-xl bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm shadow-lg">
                <div class="p-8 auth-fade-in-up">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Large
                        on_click=on_google
                        class="w-full mb-6".to_string()
                    >
                        <GoogleMark />
                        "Continue with Google"
                    </Button>

                    <div class="relative mb-6">
                        <div class="absolute inset-0 flex items-center">
                            <div class="w-full border-t border-emerald-200 dark:border-gray-600"></div>
                        </div>
                        <div class="relative flex justify-center text-sm">
                            <span class="bg-white dark:bg-gray-800 px-4 text-emerald-600 dark:text-emerald-400">"or"</span>
                        </div>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                                "Email address"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                autocomplete="email"
                                placeholder="Email address"
                                required=true
                                class="auth-input"
                                prop:value=move || flow.with(|f| f.credentials().email.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    flow.update(|f| f.set_email(value));
                                }
                            />
                        </div>

                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                                "Password"
                            </label>
                            <input
                                type="password"
                                id="password"
                                name="password"
                                autocomplete=move || match mode.get() {
                                    AuthMode::SignIn => "current-password",
                                    AuthMode::SignUp => "new-password",
                                }
                                placeholder="Password"
                                required=true
                                class="auth-input"
                                prop:value=move || flow.with(|f| f.credentials().password.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    flow.update(|f| f.set_password(value));
                                }
                            />
                        </div>

                        <Button
                            button_type="submit"
                            size=ButtonSize::Large
                            icon=icons::MAIL
                            class="w-full".to_string()
                        >
                            {move || mode.get().submit_label()}
                        </Button>
                    </form>

                    <div class="text-center mt-6">
                        <Button
                            variant=ButtonVariant::Link
                            on_click=move |_: ()| flow.update(|f| f.toggle_mode())
                        >
                            {move || mode.get().switch_prompt()}
                        </Button>
                    </div>

                    <div class="text-center mt-4">
                        <Button
                            variant=ButtonVariant::Link
                            on_click=move |_: ()| flow.update(|f| f.change_role())
                            class="text-emerald-600 dark:text-emerald-400".to_string()
                        >
                            "Change Role"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Four-colour Google "G"
#[component]
fn GoogleMark() -> impl IntoView {
    view! {
        <svg class="w-5 h-5 mr-3" viewBox="0 0 24 24" aria-hidden="true">
            <path
                fill="#4285F4"
                d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"
            />
            <path
                fill="#34A853"
                d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"
            />
            <path
                fill="#FBBC05"
                d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"
            />
            <path
                fill="#EA4335"
                d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"
            />
        </svg>
    }
}
