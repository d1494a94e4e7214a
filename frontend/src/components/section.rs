use stylist::yew::use_style;
use yew::prelude::*;

use crate::motion::Motion;
use crate::sections::SectionDescriptor;
use crate::styles::{style_for, StyleKey};

/// Scoped stylist class for a registry entry.
#[hook]
pub fn use_class(key: StyleKey) -> Classes {
    let style = use_style(style_for(key).to_css());
    classes!(style.get_class_name().to_string())
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub descriptor: SectionDescriptor,
    #[prop_or_default]
    pub children: Children,
}

/// Full-height block anchored at the descriptor's id, playing its entrance.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let class = use_class(props.descriptor.style_key);

    html! {
        <Motion
            tag="section"
            id={props.descriptor.id.as_str()}
            class={class}
            spec={props.descriptor.entrance}
        >
            { for props.children.iter() }
        </Motion>
    }
}
