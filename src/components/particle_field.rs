//! Floating particle backdrop for the hero section.

use dioxus::prelude::*;
use folio_core::particles::{generate, PARTICLE_COUNT};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[component]
pub fn ParticleField() -> Element {
    // Generated once per mount; seeded from the clock so each load differs
    let particles = use_hook(|| {
        let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
        generate(&mut rng, PARTICLE_COUNT)
    });

    rsx! {
        div { class: "particles", "aria-hidden": "true",
            for (i, particle) in particles.iter().enumerate() {
                div { key: "{i}", class: "particle", style: "{particle.style()}" }
            }
        }
    }
}
