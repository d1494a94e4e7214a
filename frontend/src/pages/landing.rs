use yew::prelude::*;

use crate::pages::about::About;
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::pages::listing::{Portfolio, Services};
use crate::pages::teams::Teams;
use crate::sections::{sections, SectionId};

fn render_section(id: SectionId) -> Html {
    match id {
        SectionId::Home => html! { <Home key={id.as_str()} /> },
        SectionId::About => html! { <About key={id.as_str()} /> },
        SectionId::Services => html! { <Services key={id.as_str()} /> },
        SectionId::Portfolio => html! { <Portfolio key={id.as_str()} /> },
        SectionId::Teams => html! { <Teams key={id.as_str()} /> },
        SectionId::Contact => html! { <Contact key={id.as_str()} /> },
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            { for sections().into_iter().map(|section| render_section(section.id)) }
        </>
    }
}
