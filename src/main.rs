// Nexus Landing Page — Leptos 0.8 Edition

mod reveal;
mod scroll;
mod sections;

use leptos::prelude::*;
use log::Level;
use scroll::use_window_scroll;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    log::info!("mounting nexus landing");
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    // Page-lifecycle controller owns the scroll state; nav and hero read it.
    let scroll = use_window_scroll();

    view! {
        <Nav scrolled=scroll.scrolled />
        <main>
            <Hero progress=scroll.progress />
            <TrustedBy />
            <Services />
            <Differentiators />
            <Stats />
            <Testimonial />
            <CallToAction />
        </main>
        <Footer />
    }
}
