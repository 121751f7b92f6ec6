//! Client for the external authentication API

mod client;

pub use client::{api_base, init_api_base, ApiError, AuthClient, VerifyOtpResponse};
