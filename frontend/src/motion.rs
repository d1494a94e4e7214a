//! Entrance animations. An [`AnimationSpec`] describes where an element
//! starts, where it ends up and what triggers the move; the [`Motion`]
//! component plays it with a CSS transition.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Transition used for hover scaling.
const HOVER_TRANSITION_SECS: f64 = 0.2;
/// Gap between first paint of the start pose and the switch to the end pose.
const ON_LOAD_TICK_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0 };
    pub const HIDDEN: Pose = Pose { opacity: 0.0, ..Pose::REST };

    fn css(&self, scale: f64) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            fmt_num(self.opacity),
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(scale)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionKind {
    Fade,
    Slide,
    Scale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    OnLoad,
    /// First time the element intersects the viewport; never again after.
    OnViewportEnter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub kind: MotionKind,
    pub from: Pose,
    pub to: Pose,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub trigger: Trigger,
}

impl AnimationSpec {
    pub fn fade(duration: f64) -> Self {
        AnimationSpec {
            kind: MotionKind::Fade,
            from: Pose::HIDDEN,
            to: Pose::REST,
            duration,
            delay: 0.0,
            trigger: Trigger::OnLoad,
        }
    }

    pub fn slide_x(offset: f64, duration: f64) -> Self {
        AnimationSpec {
            kind: MotionKind::Slide,
            from: Pose { x: offset, ..Pose::HIDDEN },
            ..Self::fade(duration)
        }
    }

    pub fn slide_y(offset: f64, duration: f64) -> Self {
        AnimationSpec {
            kind: MotionKind::Slide,
            from: Pose { y: offset, ..Pose::HIDDEN },
            ..Self::fade(duration)
        }
    }

    pub fn scale(from: f64, duration: f64) -> Self {
        AnimationSpec {
            kind: MotionKind::Scale,
            from: Pose { scale: from, ..Pose::HIDDEN },
            ..Self::fade(duration)
        }
    }

    pub fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Delay of `index * step` seconds, for list entries revealed one by one.
    pub fn staggered(self, index: usize, step: f64) -> Self {
        self.delayed(index as f64 * step)
    }

    pub fn on_viewport_enter(mut self) -> Self {
        self.trigger = Trigger::OnViewportEnter;
        self
    }

    pub fn transition(&self) -> String {
        let duration = fmt_num(self.duration);
        let delay = fmt_num(self.delay);
        format!("opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s")
    }
}

/// Inline style for an element at a given point of its animation.
/// `hover_scale` is the scale to show while the pointer is over it, if any.
pub fn motion_style(spec: Option<&AnimationSpec>, entered: bool, hover_scale: Option<f64>) -> String {
    let pose = match spec {
        Some(spec) if !entered => spec.from,
        Some(spec) => spec.to,
        None => Pose::REST,
    };
    let scale = hover_scale.unwrap_or(pose.scale);
    let mut style = pose.css(scale);

    match (spec, hover_scale) {
        (_, Some(_)) => {
            let hover = fmt_num(HOVER_TRANSITION_SECS);
            style.push_str(&format!(" transition: transform {hover}s ease-out;"));
        }
        (Some(spec), None) if entered => {
            style.push_str(&format!(" transition: {};", spec.transition()));
        }
        _ => {}
    }
    style
}

/// Trims float noise such as `0.6000000000000001` down to `0.6`.
fn fmt_num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// One-shot flag owned by a single animated element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    fired: bool,
}

impl EntranceLatch {
    /// Feeds one visibility observation. Returns true only for the
    /// observation that fires the entrance.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub spec: Option<AnimationSpec>,
    #[prop_or_default]
    pub hover_scale: Option<f64>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or_default]
    pub rel: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let entered = use_state(|| false);
    let hovered = use_state(|| false);
    let latch = use_mut_ref(EntranceLatch::default);
    let node_ref = use_node_ref();

    {
        let entered = entered.clone();
        let node_ref = node_ref.clone();
        let trigger = props.spec.map(|spec| spec.trigger);
        use_effect_with_deps(
            move |trigger| {
                let mut timeout = None;
                let mut observer = None;
                match trigger {
                    Some(Trigger::OnLoad) => {
                        timeout = Some(Timeout::new(ON_LOAD_TICK_MS, move || {
                            if latch.borrow_mut().observe(true) {
                                entered.set(true);
                            }
                        }));
                    }
                    Some(Trigger::OnViewportEnter) => {
                        if let Some(element) = node_ref.cast::<Element>() {
                            observer = observe_first_entry(&element, latch, move || entered.set(true));
                        }
                    }
                    None => {}
                }
                move || {
                    drop(timeout);
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            trigger,
        );
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let hover_scale = props.hover_scale.filter(|_| *hovered);
    let style = motion_style(props.spec.as_ref(), *entered, hover_scale);

    html! {
        <@{props.tag.to_string()}
            ref={node_ref}
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
            data-motion="true"
            href={props.href.clone()}
            target={props.target.clone()}
            rel={props.rel.clone()}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </@>
    }
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches `element` until it first intersects the viewport, then calls
/// `on_enter` once and disconnects. The closure must outlive the observer,
/// so both are handed back to the caller.
fn observe_first_entry(
    element: &Element,
    latch: Rc<RefCell<EntranceLatch>>,
    on_enter: impl Fn() + 'static,
) -> Option<(IntersectionObserver, EntryCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });
        if latch.borrow_mut().observe(visible) {
            debug!("entrance fired on viewport enter");
            on_enter();
            observer.disconnect();
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_across_repeated_entries() {
        let mut latch = EntranceLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }

    #[test]
    fn stagger_is_index_times_step() {
        let spec = AnimationSpec::fade(0.5).on_viewport_enter().staggered(3, 0.2);
        assert!((spec.delay - 0.6).abs() < 1e-9);
        assert_eq!(spec.transition(), "opacity 0.5s ease-out 0.6s, transform 0.5s ease-out 0.6s");
        assert_eq!(spec.trigger, Trigger::OnViewportEnter);
    }

    #[test]
    fn hidden_until_entered() {
        let spec = AnimationSpec::fade(0.5);
        let before = motion_style(Some(&spec), false, None);
        assert!(before.starts_with("opacity: 0;"));
        assert!(!before.contains("transition"));

        let after = motion_style(Some(&spec), true, None);
        assert!(after.starts_with("opacity: 1;"));
        assert!(after.contains("transition: opacity 0.5s ease-out 0s"));
    }

    #[test]
    fn slides_start_offset() {
        let about = AnimationSpec::slide_x(-50.0, 1.0);
        assert_eq!(about.kind, MotionKind::Slide);
        assert!(motion_style(Some(&about), false, None).contains("translate(-50px, 0px)"));

        let contact = AnimationSpec::slide_y(50.0, 1.0);
        assert!(motion_style(Some(&contact), false, None).contains("translate(0px, 50px)"));
        assert!(motion_style(Some(&contact), true, None).contains("translate(0px, 0px) scale(1)"));
    }

    #[test]
    fn scale_starts_shrunk() {
        let spec = AnimationSpec::scale(0.9, 1.0);
        assert!(motion_style(Some(&spec), false, None).contains("scale(0.9)"));
    }

    #[test]
    fn hover_overrides_scale() {
        let style = motion_style(None, false, Some(1.1));
        assert!(style.contains("scale(1.1)"));
        assert!(style.contains("transition: transform 0.2s"));
        assert!(motion_style(None, false, None).starts_with("opacity: 1;"));
    }

    #[test]
    fn numbers_drop_float_noise() {
        assert_eq!(fmt_num(3.0 * 0.2), "0.6");
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(-50.0), "-50");
        assert_eq!(fmt_num(-0.0), "0");
    }
}
