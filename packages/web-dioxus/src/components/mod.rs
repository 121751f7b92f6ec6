//! Shared UI components

mod loading;

pub use loading::LoadingDots;
