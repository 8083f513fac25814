use leptos::prelude::*;

use crate::reveal::Reveal;

const BRANDS: &[&str] = &[
    "Pinterest",
    "Google",
    "Twitter",
    "Instagram",
    "YouTube",
    "Spotify",
    "TikTok",
    "Airbnb",
];

/// Strip of client wordmarks, each entering with a small stagger.
#[component]
pub fn TrustedBy() -> impl IntoView {
    view! {
        <section class="trusted">
            <div class="container">
                <Reveal>
                    <p class="trusted-label">"Trusted by thousands of companies worldwide"</p>
                </Reveal>
                <div class="trusted-row">
                    {BRANDS
                        .iter()
                        .enumerate()
                        .map(|(i, brand)| {
                            view! {
                                <Reveal delay={i as f64 * 0.1}>
                                    <span class="trusted-mark">{*brand}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
