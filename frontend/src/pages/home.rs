use yew::prelude::*;

use crate::components::section::{use_class, Section};
use crate::motion::{AnimationSpec, Motion};
use crate::sections::{descriptor, SectionId};
use crate::styles::StyleKey;

/// Rise-in for the hero copy; the heading itself only reacts to hover.
const RISE_SECS: f64 = 0.3;

#[function_component(Home)]
pub fn home() -> Html {
    let heading = use_class(StyleKey::HeroHeading);
    let text = use_class(StyleKey::HeroText);
    let cta = use_class(StyleKey::CtaButton);

    html! {
        <Section descriptor={descriptor(SectionId::Home)}>
            <Motion tag="h1" class={heading} hover_scale={1.1}>
                {"Grow Your Business Online"}
            </Motion>
            <Motion tag="p" class={text} spec={AnimationSpec::slide_y(20.0, RISE_SECS).delayed(0.5)}>
                {"Welcome to our Growth Studio IT!"}
                <br />
                {"We build solutions that elevate your online presence"}
                <br />
                {"and drive business growth."}
            </Motion>
            <Motion
                tag="a"
                href={AttrValue::from(SectionId::Contact.anchor())}
                class={cta}
                spec={AnimationSpec::slide_y(20.0, RISE_SECS).delayed(0.6)}
            >
                {"Get Started"}
            </Motion>
        </Section>
    }
}
