use yew::prelude::*;

use crate::components::section::use_class;
use crate::styles::StyleKey;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let section = use_class(StyleKey::Section);
    let heading = use_class(StyleKey::SectionHeading);
    let button = use_class(StyleKey::CtaButton);

    html! {
        <section class={section}>
            <h1 class={heading}>{"Page not found"}</h1>
            <a href="/" class={button}>{"Back to Growth Studio"}</a>
        </section>
    }
}
