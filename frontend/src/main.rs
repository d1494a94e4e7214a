use frontend::config::{log_level, APP_ROOT_ID};
use frontend::{App, AppProps};
use log::{info, warn};
use stylist::manager::StyleManager;
use web_sys::window;
use yew_router::history::{AnyHistory, BrowserHistory};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log_level()).expect("error initializing log");

    let root = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(APP_ROOT_ID));

    let props = AppProps {
        manager: StyleManager::default(),
        history: AnyHistory::from(BrowserHistory::new()),
    };

    match root {
        Some(root) => {
            info!("Hydrating server-rendered page");
            yew::Renderer::<App>::with_root_and_props(root, props).hydrate();
        }
        None => {
            warn!("#{APP_ROOT_ID} missing, rendering into body");
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
