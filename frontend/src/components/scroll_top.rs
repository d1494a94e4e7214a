use yew::prelude::*;

use crate::components::section::use_class;
use crate::motion::Motion;
use crate::scroll::SmoothScroller;
use crate::styles::StyleKey;

#[function_component(ScrollTop)]
pub fn scroll_top() -> Html {
    let scroller = use_context::<SmoothScroller>().unwrap_or_default();
    let class = use_class(StyleKey::ScrollTopButton);

    let onclick = Callback::from(move |_: MouseEvent| scroller.scroll_to_top());

    html! {
        <Motion tag="button" class={class} hover_scale={1.2} aria_label="Scroll to top" {onclick}>
            {"^"}
        </Motion>
    }
}
