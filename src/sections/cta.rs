use leptos::prelude::*;

use crate::reveal::Reveal;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <Reveal>
                    <div class="cta-panel">
                        <h2 class="cta-title">"Ready to Transform Your Digital Presence?"</h2>
                        <p class="cta-description">
                            "Join thousands of businesses that have elevated their online "
                            "presence with our expert digital marketing strategies."
                        </p>
                        <div class="cta-actions">
                            <button class="btn btn-light">"Schedule a Consultation"</button>
                            <button class="btn btn-outline">"View Case Studies"</button>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
