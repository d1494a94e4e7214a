use yew::prelude::*;

use crate::components::section::use_class;
use crate::scroll::SmoothScroller;
use crate::sections::SectionId;
use crate::styles::StyleKey;

pub const NAV_LINKS: [(&str, SectionId); 4] = [
    ("Home", SectionId::Home),
    ("About", SectionId::About),
    ("Services", SectionId::Services),
    ("Contact", SectionId::Contact),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let scroller = use_context::<SmoothScroller>().unwrap_or_default();
    let nav_class = use_class(StyleKey::Nav);
    let link_class = use_class(StyleKey::NavLink);

    html! {
        <nav class={nav_class}>
            { for NAV_LINKS.iter().map(|&(label, target)| {
                let scroller = scroller.clone();
                // Plain anchor navigation stays in place when the section is missing.
                let onclick = Callback::from(move |e: MouseEvent| {
                    if scroller.scroll_to_section(target.as_str()) {
                        e.prevent_default();
                    }
                });
                html! {
                    <a
                        key={label}
                        href={target.anchor()}
                        class={link_class.clone()}
                        aria-label={format!("Go to {label}")}
                        {onclick}
                    >
                        {label}
                    </a>
                }
            }) }
        </nav>
    }
}
