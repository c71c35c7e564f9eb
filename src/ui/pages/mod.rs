//! Application pages module
//!
//! - Landing page (home)
//! - Sign-in page (role picker and mock sign-in)
//! - Dashboard (signed-in greeting)
//! - Not found

mod dashboard;
mod landing;
mod not_found;
mod sign_in;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;
