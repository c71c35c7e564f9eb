//! Session context owned by the application shell
//!
//! The sign-in screen reports an [`AuthSuccess`] through its callback; the
//! shell stores it here so later pages can read who is signed in.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::AuthSuccess;

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Identity of the signed-in visitor, if any
    pub current: RwSignal<Option<AuthSuccess>>,
}

impl SessionContext {
    pub fn is_signed_in(&self) -> bool {
        self.current.with(Option::is_some)
    }

    pub fn sign_in(&self, success: AuthSuccess) {
        log!("signed in as {} ({})", success.display_name, success.role);
        self.current.set(Some(success));
    }

    pub fn sign_out(&self) {
        self.current.set(None);
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        current: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    #[test]
    fn test_sign_in_then_out() {
        let owner = Owner::new();
        owner.with(|| {
            let session = provide_session_context();
            assert!(!session.is_signed_in());

            session.sign_in(AuthSuccess::mock(Role::Teacher));
            assert!(session.is_signed_in());
            assert_eq!(
                session.current.get_untracked().map(|s| s.display_name),
                Some("Dr. Green".to_string())
            );

            session.sign_out();
            assert!(!session.is_signed_in());
        });
    }
}
