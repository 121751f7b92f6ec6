//! Loading components

use dioxus::prelude::*;

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "loading-dots",
            span { class: "loading-dot" }
            span { class: "loading-dot", style: "animation-delay: 0.1s" }
            span { class: "loading-dot", style: "animation-delay: 0.2s" }
        }
    }
}
