//! Page components

mod home;
mod signin;

pub use home::Home;
pub use signin::SignIn;
