use yew::prelude::*;

use crate::components::section::{use_class, Section};
use crate::sections::{descriptor, SectionId};
use crate::styles::StyleKey;

#[function_component(About)]
pub fn about() -> Html {
    let heading = use_class(StyleKey::SectionHeading);
    let text = use_class(StyleKey::SectionText);

    html! {
        <Section descriptor={descriptor(SectionId::About)}>
            <h1 class={heading}>{"About"}</h1>
            <p class={text}>
                {"We are a passionate team of web developers, designers, and strategists \
                  committed to delivering cutting-edge digital solutions."}
            </p>
        </Section>
    }
}
