use leptos::prelude::*;

use crate::reveal::Reveal;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <p class="section-eyebrow">"Our Impact"</p>
                    </Reveal>
                    <Reveal delay=0.1>
                        <h2 class="section-title">"Driving Results That Matter"</h2>
                    </Reveal>
                    <Reveal delay=0.2>
                        <p class="section-description">
                            "Our track record speaks for itself with proven results across industries."
                        </p>
                    </Reveal>
                </div>
                <div class="stats-grid">
                    <StatCard icon="🎯" number="10,000+" text="Happy Clients Worldwide" delay=0.0 />
                    <StatCard icon="🚀" number="20,000+" text="Successful Campaigns" delay=0.2 />
                    <StatCard icon="⏱️" number="10+" text="Years of Excellence" delay=0.4 />
                </div>
            </div>
        </section>
    }
}

/// Stateless stat card. The headline number enters a beat after the card.
#[component]
pub fn StatCard(
    icon: &'static str,
    number: &'static str,
    text: &'static str,
    #[prop(optional)] delay: f64,
) -> impl IntoView {
    view! {
        <Reveal delay=delay>
            <div class="stat-card">
                <div class="stat-icon">{icon}</div>
                <Reveal delay={delay + 0.2}>
                    <h3 class="stat-number">{number}</h3>
                </Reveal>
                <p class="stat-text">{text}</p>
            </div>
        </Reveal>
    }
}
