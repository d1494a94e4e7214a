use yew::prelude::*;

use crate::components::section::{use_class, Section};
use crate::content::team;
use crate::motion::Motion;
use crate::pages::listing::entry_entrance;
use crate::sections::{descriptor, SectionId};
use crate::styles::StyleKey;

#[function_component(Teams)]
pub fn teams() -> Html {
    let heading = use_class(StyleKey::SectionHeading);
    let grid = use_class(StyleKey::TeamGrid);
    let item = use_class(StyleKey::ListItem);
    let image = use_class(StyleKey::TeamImage);
    let title = use_class(StyleKey::EntryTitle);

    html! {
        <Section descriptor={descriptor(SectionId::Teams)}>
            <h1 class={heading}>{"Teams"}</h1>
            <div class={grid}>
                { for team().iter().enumerate().map(|(index, member)| html! {
                    <Motion key={index} class={item.clone()} spec={entry_entrance(index)}>
                        <img src={member.image} alt={member.name} class={image.clone()} />
                        <h3 class={title.clone()}>{ member.name }</h3>
                        <p>{ member.description }</p>
                    </Motion>
                }) }
            </div>
        </Section>
    }
}
