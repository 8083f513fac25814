//! Window scroll tracking: the condensed-nav flag and the hero parallax.
//!
//! All the arithmetic lives in plain functions so it can be unit tested on
//! the host target; the DOM wiring is confined to [`use_window_scroll`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Scroll offset (px) past which the nav switches to its condensed style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of the document scroll over which the hero parallax plays out.
pub const PARALLAX_RANGE: f64 = 0.2;

/// Parallax endpoint for the hero image layer (moves up).
pub const HERO_IMAGE_SHIFT: f64 = -50.0;

/// Parallax endpoint for the hero text layer (moves down).
pub const HERO_TEXT_SHIFT: f64 = 50.0;

/// True once the viewport has scrolled past the nav threshold.
pub fn nav_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD
}

/// One observed scroll position: the vertical offset and the total
/// scrollable height of the document at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub max_scroll: f64,
}

impl ScrollSample {
    /// Offset normalized to `[0, 1]` across the full scrollable height.
    /// A document that cannot scroll reports progress 0.
    pub fn progress(&self) -> f64 {
        if self.max_scroll <= 0.0 {
            return 0.0;
        }
        (self.offset / self.max_scroll).clamp(0.0, 1.0)
    }
}

/// Linear map of `progress ∈ [0, PARALLAX_RANGE]` onto `[0, endpoint]`,
/// clamped to the nearest endpoint outside that sub-domain.
pub fn parallax_shift(progress: f64, endpoint: f64) -> f64 {
    endpoint * (progress.clamp(0.0, PARALLAX_RANGE) / PARALLAX_RANGE)
}

/// Handle returned by [`ScrollHub::subscribe`]; pass back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u32);

struct HubInner {
    next_id: u32,
    sinks: Vec<(u32, Box<dyn Fn(ScrollSample)>)>,
}

/// Single source of truth for scroll position. The page-lifecycle
/// controller owns one hub; dependent views subscribe read-only sinks.
/// Single-threaded by construction (UI thread only, like the DOM events
/// that feed it). Sinks must not subscribe or unsubscribe reentrantly.
#[derive(Clone)]
pub struct ScrollHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                sinks: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, sink: impl Fn(ScrollSample) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.sinks.push((id, Box::new(sink)));
        SubscriptionId(id)
    }

    /// Removes a sink; further publishes never reach it.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().sinks.retain(|(sid, _)| *sid != id.0);
    }

    pub fn publish(&self, sample: ScrollSample) {
        for (_, sink) in self.inner.borrow().sinks.iter() {
            sink(sample);
        }
    }
}

impl Default for ScrollHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only scroll state shared with dependent views.
#[derive(Clone, Copy)]
pub struct ScrollState {
    /// Past the nav threshold? `false` on mount until the first event.
    pub scrolled: ReadSignal<bool>,
    /// Scroll-progress fraction over the whole document.
    pub progress: ReadSignal<f64>,
}

/// Reads the live scroll offset and scrollable height from the window.
fn read_window_sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let doc_height = window.document()?.document_element()?.scroll_height() as f64;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some(ScrollSample {
        offset,
        max_scroll: doc_height - viewport,
    })
}

/// Attaches a window `"scroll"` listener for the lifetime of the calling
/// component and exposes the derived state as signals. The listener and
/// the hub subscription are both released in `on_cleanup`, so no callback
/// outlives the page.
pub fn use_window_scroll() -> ScrollState {
    let (scrolled, set_scrolled) = signal(false);
    let (progress, set_progress) = signal(0.0_f64);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        let hub = ScrollHub::new();
        let sub = hub.subscribe(move |sample: ScrollSample| {
            set_scrolled.set(nav_scrolled(sample.offset));
            set_progress.set(sample.progress());
        });

        let listener = {
            let hub = hub.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(sample) = read_window_sample() {
                    hub.publish(sample);
                }
            })
        };
        let _ = window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());

        // `on_cleanup` requires `Send + Sync`; park the single-threaded
        // handles in a local-storage arena slot and capture only its key.
        let cleanup_state = StoredValue::new_local((hub, sub, listener));
        on_cleanup(move || {
            cleanup_state.try_with_value(|(hub, sub, listener)| {
                hub.unsubscribe(*sub);
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            });
        });
    });

    ScrollState { scrolled, progress }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn nav_scrolled_flips_past_threshold() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(50.0));
        assert!(nav_scrolled(50.1));
        assert!(nav_scrolled(400.0));
    }

    #[test]
    fn progress_normalizes_and_clamps() {
        let mid = ScrollSample {
            offset: 500.0,
            max_scroll: 1000.0,
        };
        assert_eq!(mid.progress(), 0.5);

        let past_end = ScrollSample {
            offset: 1500.0,
            max_scroll: 1000.0,
        };
        assert_eq!(past_end.progress(), 1.0);

        let negative = ScrollSample {
            offset: -10.0,
            max_scroll: 1000.0,
        };
        assert_eq!(negative.progress(), 0.0);
    }

    #[test]
    fn progress_zero_for_unscrollable_document() {
        let flat = ScrollSample {
            offset: 100.0,
            max_scroll: 0.0,
        };
        assert_eq!(flat.progress(), 0.0);
    }

    #[test]
    fn parallax_at_rest() {
        assert_eq!(parallax_shift(0.0, HERO_IMAGE_SHIFT), 0.0);
        assert_eq!(parallax_shift(0.0, HERO_TEXT_SHIFT), 0.0);
    }

    #[test]
    fn parallax_midpoint() {
        assert_eq!(parallax_shift(0.1, HERO_IMAGE_SHIFT), -25.0);
        assert_eq!(parallax_shift(0.1, HERO_TEXT_SHIFT), 25.0);
    }

    #[test]
    fn parallax_at_range_end() {
        assert_eq!(parallax_shift(0.2, HERO_IMAGE_SHIFT), -50.0);
        assert_eq!(parallax_shift(0.2, HERO_TEXT_SHIFT), 50.0);
    }

    #[test]
    fn parallax_clamps_outside_range() {
        assert_eq!(parallax_shift(0.5, HERO_IMAGE_SHIFT), -50.0);
        assert_eq!(parallax_shift(0.5, HERO_TEXT_SHIFT), 50.0);
        assert_eq!(parallax_shift(-0.3, HERO_IMAGE_SHIFT), 0.0);
    }

    #[test]
    fn hub_delivers_to_all_sinks() {
        let hub = ScrollHub::new();
        let a = Rc::new(Cell::new(0.0));
        let b = Rc::new(Cell::new(0.0));
        let (a2, b2) = (a.clone(), b.clone());
        hub.subscribe(move |s| a2.set(s.offset));
        hub.subscribe(move |s| b2.set(s.offset * 2.0));

        hub.publish(ScrollSample {
            offset: 75.0,
            max_scroll: 1000.0,
        });
        assert_eq!(a.get(), 75.0);
        assert_eq!(b.get(), 150.0);
    }

    #[test]
    fn hub_unsubscribe_stops_delivery() {
        let hub = ScrollHub::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let sub = hub.subscribe(move |_| counter.set(counter.get() + 1));

        let sample = ScrollSample {
            offset: 120.0,
            max_scroll: 1000.0,
        };
        hub.publish(sample);
        assert_eq!(hits.get(), 1);

        hub.unsubscribe(sub);
        hub.publish(sample);
        hub.publish(sample);
        assert_eq!(hits.get(), 1, "sink must not fire after unsubscribe");
    }

    #[test]
    fn hub_unsubscribe_leaves_other_sinks_alone() {
        let hub = ScrollHub::new();
        let kept = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(0));
        let (k, d) = (kept.clone(), dropped.clone());
        hub.subscribe(move |_| k.set(k.get() + 1));
        let sub = hub.subscribe(move |_| d.set(d.get() + 1));
        hub.unsubscribe(sub);

        hub.publish(ScrollSample {
            offset: 60.0,
            max_scroll: 500.0,
        });
        assert_eq!(kept.get(), 1);
        assert_eq!(dropped.get(), 0);
    }
}
