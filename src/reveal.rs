//! One-shot entrance animations driven by viewport intersection.
//!
//! Each animated element walks a single path: not yet visible, then
//! animating in, then settled. Settled elements never replay.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Entrance transition duration, seconds.
pub const ENTRANCE_DURATION: f64 = 0.5;

/// How much of the element must be in view before the entrance plays.
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// Lifecycle of one animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Entering,
    Settled,
}

impl RevealPhase {
    /// Intersection signal arrived. Starts the entrance only from
    /// `Hidden`; returns whether a transition began.
    pub fn enter(&mut self) -> bool {
        match self {
            RevealPhase::Hidden => {
                *self = RevealPhase::Entering;
                true
            }
            _ => false,
        }
    }

    /// Entrance transition finished. Only meaningful while `Entering`.
    pub fn settle(&mut self) -> bool {
        match self {
            RevealPhase::Entering => {
                *self = RevealPhase::Settled;
                true
            }
            _ => false,
        }
    }

    /// CSS class carrying the fade/translate-in styling for this phase.
    pub fn class(self) -> &'static str {
        match self {
            RevealPhase::Hidden => "reveal",
            RevealPhase::Entering => "reveal is-visible",
            RevealPhase::Settled => "reveal is-visible is-settled",
        }
    }
}

/// Wraps children in a block that fades and translates in the first time
/// it scrolls into view. `delay` is the entrance delay in seconds; it is
/// not validated, a negative value just degrades the visual.
#[component]
pub fn Reveal(#[prop(optional)] delay: f64, children: Children) -> impl IntoView {
    let phase = RwSignal::new(RevealPhase::Hidden);
    let node = NodeRef::<Div>::new();

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let started = {
                        let mut p = phase.get_untracked();
                        let started = p.enter();
                        phase.set(p);
                        started
                    };
                    if started {
                        // One-shot: stop watching as soon as the entrance plays.
                        observer.unobserve(&entry.target());
                        set_timeout(
                            move || {
                                phase.update(|p| {
                                    p.settle();
                                })
                            },
                            Duration::from_secs_f64(ENTRANCE_DURATION + delay.max(0.0)),
                        );
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&el);
        }
        // Observers live for the page session; unobserve above caps their work.
        callback.forget();
    });

    view! {
        <div
            class=move || phase.get().class()
            style=format!("transition-delay: {delay}s")
            node_ref=node
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enters_only_from_hidden() {
        let mut phase = RevealPhase::Hidden;
        assert!(phase.enter());
        assert_eq!(phase, RevealPhase::Entering);

        // A second intersection while animating does nothing.
        assert!(!phase.enter());
        assert_eq!(phase, RevealPhase::Entering);
    }

    #[test]
    fn settles_only_while_entering() {
        let mut phase = RevealPhase::Hidden;
        assert!(!phase.settle(), "cannot settle before entering");

        phase.enter();
        assert!(phase.settle());
        assert_eq!(phase, RevealPhase::Settled);
    }

    #[test]
    fn never_replays_after_settling() {
        let mut phase = RevealPhase::Hidden;
        phase.enter();
        phase.settle();

        assert!(!phase.enter(), "settled elements must not replay");
        assert!(!phase.settle());
        assert_eq!(phase, RevealPhase::Settled);
    }

    #[test]
    fn class_per_phase() {
        assert_eq!(RevealPhase::Hidden.class(), "reveal");
        assert_eq!(RevealPhase::Entering.class(), "reveal is-visible");
        assert_eq!(RevealPhase::Settled.class(), "reveal is-visible is-settled");
    }
}
