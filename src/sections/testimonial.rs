use leptos::prelude::*;

use crate::reveal::Reveal;

#[component]
pub fn Testimonial() -> impl IntoView {
    view! {
        <section class="testimonial">
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <p class="section-eyebrow">"Testimonials"</p>
                    </Reveal>
                    <Reveal delay=0.1>
                        <h2 class="section-title">"What Our Clients Say"</h2>
                    </Reveal>
                    <Reveal delay=0.2>
                        <p class="section-description">
                            "Don't just take our word for it - hear what our clients have to say "
                            "about our work."
                        </p>
                    </Reveal>
                </div>

                <Reveal>
                    <div class="testimonial-card">
                        <div class="testimonial-avatar">
                            <img src="assets/avatar.png" alt="Client" />
                        </div>
                        <div class="testimonial-body">
                            <div class="testimonial-stars">
                                {(0..5)
                                    .map(|i| {
                                        view! {
                                            <Reveal delay={0.4 + i as f64 * 0.1}>
                                                <span class="star">"★"</span>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <p class="testimonial-quote">
                                "\"Working with this agency has been a game-changer for our "
                                "business. Their strategic approach and creative solutions have "
                                "significantly boosted our online presence and driven remarkable "
                                "results.\""
                            </p>
                            <p class="testimonial-author">"Jane Doe, CEO of Tech Innovations"</p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
