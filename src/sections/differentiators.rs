use leptos::prelude::*;

use crate::reveal::Reveal;

/// "Why Choose Us" — two alternating image/copy rows.
#[component]
pub fn Differentiators() -> impl IntoView {
    view! {
        <section class="differentiators">
            <div class="container">
                <Reveal>
                    <div class="section-eyebrow-row">
                        <span class="section-eyebrow">"Why Choose Us"</span>
                        <span class="eyebrow-rule"></span>
                    </div>
                </Reveal>

                <div class="feature-row">
                    <Reveal>
                        <div class="feature-visual">
                            <img src="assets/1.png" alt="Business Meeting" />
                        </div>
                    </Reveal>
                    <Reveal delay=0.2>
                        <div class="feature-copy">
                            <h3>"Solutions Tailored Specifically to Your Business Needs"</h3>
                            <p>
                                "We understand that every business is unique. Our team works "
                                "closely with you to develop customized strategies that align "
                                "with your goals and drive measurable results."
                            </p>
                            <button class="btn btn-primary">"Learn More"</button>
                        </div>
                    </Reveal>
                </div>

                <div class="feature-row reversed">
                    <Reveal>
                        <div class="feature-copy">
                            <h3>"Creative Excellence Elevates Every Project"</h3>
                            <p>
                                "Our award-winning creative team brings innovation and expertise "
                                "to every project, ensuring your brand stands out in today's "
                                "competitive digital landscape."
                            </p>
                            <button class="btn btn-primary">"Learn More"</button>
                        </div>
                    </Reveal>
                    <Reveal delay=0.2>
                        <div class="feature-visual">
                            <img src="assets/2.png" alt="Creative Team" />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
