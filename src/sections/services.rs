use leptos::prelude::*;

use crate::reveal::Reveal;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🔍",
        title: "SEO Marketing",
        description: "Boost your visibility with our data-driven search engine optimization strategies.",
    },
    Service {
        icon: "📊",
        title: "Market Research",
        description: "Data-driven insights to understand your audience and market opportunities.",
    },
    Service {
        icon: "✉️",
        title: "Email Marketing",
        description: "Targeted campaigns that drive engagement and convert leads into customers.",
    },
    Service {
        icon: "📈",
        title: "Growth Strategy",
        description: "Comprehensive plans to scale your business and maximize ROI.",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services">
            <div class="container">
                <div class="section-header">
                    <Reveal>
                        <p class="section-eyebrow">"Our Services"</p>
                    </Reveal>
                    <Reveal delay=0.1>
                        <h2 class="section-title">"Comprehensive Digital Solutions"</h2>
                    </Reveal>
                    <Reveal delay=0.2>
                        <p class="section-description">
                            "Strategic services designed to elevate your business through "
                            "comprehensive digital approaches."
                        </p>
                    </Reveal>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            view! {
                                <ServiceCard
                                    icon=s.icon
                                    title=s.title
                                    description=s.description
                                    delay={i as f64 * 0.1}
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Stateless service card: glyph, title, body, entrance delay.
#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] delay: f64,
) -> impl IntoView {
    view! {
        <Reveal delay=delay>
            <article class="service-card">
                <div class="service-icon">{icon}</div>
                <h3 class="service-title">{title}</h3>
                <p class="service-description">{description}</p>
            </article>
        </Reveal>
    }
}
