use yew::prelude::*;

use crate::components::section::{use_class, Section};
use crate::content::mailto_link;
use crate::motion::Motion;
use crate::sections::{descriptor, SectionId};
use crate::styles::StyleKey;

#[function_component(Contact)]
pub fn contact() -> Html {
    let heading = use_class(StyleKey::SectionHeading);
    let text = use_class(StyleKey::SectionText);
    let button = use_class(StyleKey::ContactButton);

    html! {
        <Section descriptor={descriptor(SectionId::Contact)}>
            <h1 class={heading}>{"Contact"}</h1>
            <p class={text}>
                {"Ready to take your business to the next level? Get in touch with us today!"}
            </p>
            <Motion
                tag="a"
                href={AttrValue::from(mailto_link())}
                target="_blank"
                rel="noopener noreferrer"
                class={button}
                hover_scale={1.1}
            >
                {"Contact Us"}
            </Motion>
        </Section>
    }
}
