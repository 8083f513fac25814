use leptos::prelude::*;

use crate::scroll::{HERO_IMAGE_SHIFT, HERO_TEXT_SHIFT, parallax_shift};

/// Hero section. The text and image layers ride the scroll-progress
/// fraction in opposite directions for the parallax effect.
#[component]
pub fn Hero(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    let text_style = move || {
        format!(
            "transform: translateY({:.1}px)",
            parallax_shift(progress.get(), HERO_TEXT_SHIFT)
        )
    };
    let image_style = move || {
        format!(
            "transform: translateY({:.1}px)",
            parallax_shift(progress.get(), HERO_IMAGE_SHIFT)
        )
    };

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content" style=text_style>
                        <div class="hero-badge">"Digital Marketing Agency"</div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Boost"</span>
                            " Your Brand with Innovative "
                            <span class="hero-title-accent">"Digital Marketing"</span>
                        </h1>
                        <p class="hero-description">
                            "Drive engagement and conversions with advanced digital marketing "
                            "strategies tailored for your business."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary">"Start Today"</button>
                            <button class="btn btn-secondary btn-demo">
                                <span class="play-dot">"▶"</span>
                                "Watch Demo"
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual" style=image_style>
                        <div class="hero-glow"></div>
                        <div class="hero-frame">
                            <img src="assets/hero.png" alt="Digital Marketing Expert" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
