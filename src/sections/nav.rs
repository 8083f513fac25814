use leptos::prelude::*;

use super::BRAND;

const NAV_LINKS: &[&str] = &["Home", "About", "Services", "Portfolio", "Pricing"];

/// Sticky navigation bar. Condenses once the page scrolls past the
/// threshold tracked by the page component.
#[component]
pub fn Nav(#[prop(into)] scrolled: Signal<bool>) -> impl IntoView {
    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">"N"</div>
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href="#" class="nav-link">
                                    {*item}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="nav-actions">
                    <a href="#" class="nav-link nav-login">"Login"</a>
                    <button class="btn btn-primary nav-cta">"Get Started"</button>
                </div>
            </div>
        </nav>
    }
}
