//! Sign-in page
//!
//! Hosts the role picker / mock sign-in screen and wires its callbacks to the
//! router, the theme context and the session context.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::AuthSuccess;
use crate::ui::auth::EcoAuth;
use crate::ui::session::use_session_context;
use crate::ui::theme::use_theme_context;

#[component]
pub fn SignInPage() -> impl IntoView {
    let theme = use_theme_context();
    let session = use_session_context();

    let on_back = move |_: ()| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    let on_auth_success = move |success: AuthSuccess| {
        session.sign_in(success);
        let navigate = use_navigate();
        navigate("/dashboard", Default::default());
    };

    view! {
        <EcoAuth
            on_back=Callback::new(on_back)
            on_auth_success=Callback::new(on_auth_success)
            is_dark_theme=theme.is_dark
            on_toggle_theme=Callback::new(move |_: ()| theme.toggle())
        />
    }
}
