use yew::prelude::*;

use crate::components::section::{use_class, Section};
use crate::content::{portfolio, services, ListEntry};
use crate::motion::{AnimationSpec, Motion};
use crate::sections::{descriptor, SectionId};
use crate::styles::StyleKey;

const ENTRY_FADE_SECS: f64 = 0.5;
const ENTRY_STAGGER_SECS: f64 = 0.2;

/// Fade-in for the `index`th entry of a list, played once on first view.
pub fn entry_entrance(index: usize) -> AnimationSpec {
    AnimationSpec::fade(ENTRY_FADE_SECS)
        .on_viewport_enter()
        .staggered(index, ENTRY_STAGGER_SECS)
}

#[derive(Properties, PartialEq)]
pub struct ListSectionProps {
    pub id: SectionId,
    pub heading: AttrValue,
    pub entries: Vec<ListEntry>,
}

#[function_component(ListSection)]
pub fn list_section(props: &ListSectionProps) -> Html {
    let heading = use_class(StyleKey::SectionHeading);
    let list = use_class(StyleKey::List);
    let item = use_class(StyleKey::ListItem);
    let title = use_class(StyleKey::EntryTitle);

    html! {
        <Section descriptor={descriptor(props.id)}>
            <h1 class={heading}>{ props.heading.clone() }</h1>
            <ul class={list}>
                { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <Motion key={index} tag="li" class={item.clone()} spec={entry_entrance(index)}>
                        <h3 class={title.clone()}>{ entry.title }</h3>
                        <p>{ entry.description }</p>
                    </Motion>
                }) }
            </ul>
        </Section>
    }
}

#[function_component(Services)]
pub fn services_section() -> Html {
    let entries = services().iter().map(ListEntry::from).collect::<Vec<_>>();
    html! { <ListSection id={SectionId::Services} heading="Services" {entries} /> }
}

#[function_component(Portfolio)]
pub fn portfolio_section() -> Html {
    let entries = portfolio().iter().map(ListEntry::from).collect::<Vec<_>>();
    html! { <ListSection id={SectionId::Portfolio} heading="Portfolio" {entries} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Trigger;

    #[test]
    fn entries_fade_in_half_a_second_apart_by_fifths() {
        let delays: Vec<f64> = (0..5).map(|i| entry_entrance(i).delay).collect();
        for (i, delay) in delays.iter().enumerate() {
            assert!((delay - i as f64 * 0.2).abs() < 1e-9);
        }
        let first = entry_entrance(0);
        assert_eq!(first.duration, 0.5);
        assert_eq!(first.trigger, Trigger::OnViewportEnter);
        assert_eq!(first.from.opacity, 0.0);
        assert_eq!(first.to.opacity, 1.0);
    }
}
