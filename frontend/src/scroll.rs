use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::config::{NAV_SCROLL_DURATION_MS, TOP_SCROLL_DURATION_MS};

pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// A vertical scroll from one offset to another over a fixed time budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollPlan {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        ScrollPlan { from, to, duration_ms }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = ease_in_out_quad(elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Drives smooth scrolls on animation frames. Each command bumps a
/// generation counter; frames belonging to an older generation stop, so the
/// most recent command always wins.
#[derive(Clone, Debug, Default)]
pub struct SmoothScroller {
    generation: Rc<Cell<u64>>,
}

impl PartialEq for SmoothScroller {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generation, &other.generation)
    }
}

impl SmoothScroller {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Scrolls until the top of `#section_id` meets the top of the
    /// viewport. Returns false when there is no such element, so a link can
    /// fall back to its plain anchor.
    pub fn scroll_to_section(&self, section_id: &str) -> bool {
        let Some(window) = window() else { return false };
        let target = window
            .document()
            .and_then(|document| document.get_element_by_id(section_id));
        let Some(target) = target else {
            warn!("no section #{section_id} to scroll to");
            return false;
        };
        let current = window.scroll_y().unwrap_or(0.0);
        let top = target.get_bounding_client_rect().top() + current;
        debug!("scrolling to #{section_id} at {top}px");
        self.run(ScrollPlan::new(current, top, NAV_SCROLL_DURATION_MS));
        true
    }

    pub fn scroll_to_top(&self) {
        let Some(window) = window() else { return };
        let current = window.scroll_y().unwrap_or(0.0);
        debug!("scrolling to top from {current}px");
        self.run(ScrollPlan::new(current, 0.0, TOP_SCROLL_DURATION_MS));
    }

    fn run(&self, plan: ScrollPlan) {
        let generation = self.begin();
        let scroller = self.clone();
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next_frame = frame.clone();
        let mut started_at: Option<f64> = None;

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(window) = window() else { return };
            if !scroller.is_current(generation) {
                let _ = next_frame.borrow_mut().take();
                return;
            }
            let start = *started_at.get_or_insert(timestamp);
            let elapsed = timestamp - start;
            window.scroll_to_with_x_and_y(window.scroll_x().unwrap_or(0.0), plan.position_at(elapsed));
            if plan.is_done(elapsed) {
                let _ = next_frame.borrow_mut().take();
            } else if let Some(callback) = next_frame.borrow().as_ref() {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>));

        let Some(window) = window() else { return };
        let first = frame.borrow();
        if let Some(callback) = first.as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }
}
