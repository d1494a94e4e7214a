use log::info;
use stylist::manager::StyleManager;
use stylist::yew::ManagerProvider;
use yew::prelude::*;
use yew_router::history::AnyHistory;
use yew_router::prelude::*;

pub mod color_mode;
pub mod config;
pub mod content;
pub mod motion;
pub mod scroll;
pub mod sections;
pub mod styles;
#[cfg(feature = "ssr")]
pub mod render;

pub mod components {
    pub mod footer;
    pub mod nav;
    pub mod scroll_top;
    pub mod section;
}
pub mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod landing;
    pub mod listing;
    pub mod not_found;
    pub mod teams;
}

use components::{footer::Footer, nav::Nav, scroll_top::ScrollTop};
use pages::{landing::Landing, not_found::NotFound};
use scroll::SmoothScroller;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

/// Everything inside the router: sticky nav, routed content, the
/// scroll-to-top control and the footer, sharing one scroller.
#[function_component(Shell)]
pub fn shell() -> Html {
    let scroller = use_memo(|_| SmoothScroller::new(), ());

    html! {
        <ContextProvider<SmoothScroller> context={(*scroller).clone()}>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <ScrollTop />
            <Footer />
        </ContextProvider<SmoothScroller>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub manager: StyleManager,
    pub history: AnyHistory,
}

/// Root component on both sides of hydration. The server passes a manager
/// writing to a static sheet and a memory history at the request path; the
/// browser passes the default manager and its own history, so the style data
/// shipped by `ManagerProvider` restores the server's class names.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ManagerProvider manager={props.manager.clone()}>
            <Router history={props.history.clone()}>
                <Shell />
            </Router>
        </ManagerProvider>
    }
}
