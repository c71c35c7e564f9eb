//! Role selection and mock sign-in UI

mod credentials_form;
mod eco_auth;
mod floating_elements;
mod role_picker;

pub use credentials_form::CredentialsForm;
pub use eco_auth::EcoAuth;
pub use floating_elements::FloatingElements;
pub use role_picker::RolePicker;
