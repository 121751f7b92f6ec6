//! Landing page component

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::routes::Route;

struct Feature {
    title: &'static str,
    desc: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Fast ordering",
        desc: "No apps to install. Scan, order, relax.",
    },
    Feature {
        title: "Secure login",
        desc: "Phone number + OTP with authorized devices.",
    },
    Feature {
        title: "Live updates",
        desc: "See when your order is being prepared and ready.",
    },
];

/// Landing page - marketing content with a call-to-action into the app
#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        main {
            section {
                class: "container-prose hero",
                div {
                    class: "hero-grid",
                    div {
                        h1 {
                            class: "hero-title",
                            "Dining, reimagined."
                        }
                        p {
                            class: "hero-lead",
                            "Order from your table with a clean, minimal interface. "
                            "Secure phone + OTP auth. Real-time status updates from the kitchen."
                        }
                        div {
                            class: "hero-actions",
                            Link {
                                to: Route::SignIn {},
                                class: "btn-primary",
                                if session.is_authenticated() {
                                    "Back to your table"
                                } else {
                                    "Start from your table"
                                }
                            }
                            a {
                                href: "#features",
                                class: "link-muted",
                                "Learn more \u{2192}"
                            }
                        }
                    }
                    div {
                        class: "card",
                        div { class: "hero-placeholder" }
                    }
                }
            }

            section {
                id: "features",
                class: "container-prose section",
                h2 { class: "section-title", "Features" }
                div {
                    class: "features-grid",
                    for feature in FEATURES {
                        div {
                            key: "{feature.title}",
                            class: "card",
                            h3 { class: "feature-title", "{feature.title}" }
                            p { class: "feature-desc", "{feature.desc}" }
                        }
                    }
                }
            }
        }
    }
}
