// Landing page sections

/// Brand name used across the landing page (single source of truth)
pub const BRAND: &str = "Nexus";

mod cta;
mod differentiators;
mod footer;
mod hero;
mod nav;
mod services;
mod stats;
mod testimonial;
mod trusted_by;

pub use cta::CallToAction;
pub use differentiators::Differentiators;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
pub use stats::Stats;
pub use testimonial::Testimonial;
pub use trusted_by::TrustedBy;
