//! Server rendering. One render produces the page markup together with the
//! exact styles that markup uses, and [`HtmlTemplate`] splices both plus the
//! color-mode script into the document so first paint is already styled.

use std::sync::mpsc;

use stylist::manager::{render_static, StyleManager};
use thiserror::Error;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Routable;

use crate::color_mode::ColorModeConfig;
use crate::config::APP_ROOT_ID;
use crate::styles::global_stylesheet;
use crate::{App, AppProps, Route};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to collect styles: {0}")]
    Styles(String),
    #[error("template has no closing </head> tag")]
    MissingHead,
    #[error("template has no <body> tag after </head>")]
    MissingBody,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPage {
    /// `<style>` markup stylist collected while rendering `body`.
    pub styles: String,
    pub body: String,
}

impl RenderedPage {
    /// Everything that goes into `<head>`: the global sheet (reset and
    /// keyframes) followed by the scoped classes.
    pub fn head(&self) -> String {
        format!("<style data-growth-global>{}</style>{}", global_stylesheet(), self.styles)
    }
}

/// Whether `path` falls through to the not-found route.
pub fn is_not_found(path: &str) -> bool {
    matches!(Route::recognize(path), None | Some(Route::NotFound))
}

/// Renders the app at `url`. Props are built on the renderer's own thread
/// because a `StyleManager` cannot cross threads, so a failed build is
/// reported back over `failures` and turned into an error after the render.
pub async fn render_page(url: impl Into<String>) -> Result<RenderedPage, RenderError> {
    let url: String = url.into();
    let (writer, reader) = render_static();
    let (failures, failure) = mpsc::channel::<String>();

    let renderer = ServerRenderer::<App>::with_props(move || {
        let manager = StyleManager::builder().writer(writer).build().unwrap_or_else(|e| {
            let _ = failures.send(e.to_string());
            StyleManager::default()
        });
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(url);
        AppProps { manager, history }
    });
    let body = renderer.render().await;

    if let Ok(reason) = failure.try_recv() {
        return Err(RenderError::Styles(reason));
    }

    let mut styles = String::new();
    reader
        .read_style_data()
        .write_static_markup(&mut styles)
        .map_err(|e| RenderError::Styles(e.to_string()))?;

    Ok(RenderedPage { styles, body })
}

const FALLBACK_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Growth Studio</title>
</head>
<body>
</body>
</html>
"#;

/// Shows every animated element in its final pose. Entrances are rendered
/// in their start pose and only the wasm bundle moves them.
const REVEAL_STATIC: &str = "[data-motion] { opacity: 1 !important; transform: none !important; }";

/// Document shell split around the points where rendered output goes.
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlTemplate {
    head: String,
    body_open: String,
    rest: String,
    /// Whether the document loads a script that will hydrate the page.
    hydrates: bool,
}

impl HtmlTemplate {
    pub fn parse(template: &str) -> Result<Self, RenderError> {
        let head_end = template.find("</head>").ok_or(RenderError::MissingHead)?;
        let body_start = template[head_end..]
            .find("<body")
            .map(|offset| head_end + offset)
            .ok_or(RenderError::MissingBody)?;
        let body_open_end = template[body_start..]
            .find('>')
            .map(|offset| body_start + offset + 1)
            .ok_or(RenderError::MissingBody)?;

        Ok(HtmlTemplate {
            head: template[..head_end].to_string(),
            body_open: template[head_end..body_open_end].to_string(),
            rest: template[body_open_end..].to_string(),
            hydrates: template.contains("<script"),
        })
    }

    /// Minimal document used when no built `index.html` is available. Nothing
    /// hydrates it, so entrances are shown in their final pose.
    pub fn fallback() -> Self {
        Self::parse(FALLBACK_TEMPLATE).unwrap_or_else(|_| HtmlTemplate {
            head: String::from("<!DOCTYPE html><html lang=\"en\"><head>"),
            body_open: String::from("</head><body>"),
            rest: String::from("</body></html>"),
            hydrates: false,
        })
    }

    pub fn hydrates(&self) -> bool {
        self.hydrates
    }

    /// Static reveal sheet: only for visitors without scripts when the page
    /// hydrates, unconditional when it never will.
    fn reveal(&self) -> String {
        let sheet = format!("<style data-growth-reveal>{REVEAL_STATIC}</style>");
        if self.hydrates {
            format!("<noscript>{sheet}</noscript>")
        } else {
            sheet
        }
    }

    pub fn assemble(&self, page: &RenderedPage, color_mode: &ColorModeConfig) -> String {
        let head = page.head() + &self.reveal();
        let script = color_mode.script();
        let mut html = String::with_capacity(
            self.head.len() + head.len() + self.body_open.len() + script.len() + page.body.len() + self.rest.len() + 32,
        );
        html.push_str(&self.head);
        html.push_str(&head);
        html.push_str(&self.body_open);
        html.push_str(&script);
        html.push_str(&format!("<div id=\"{APP_ROOT_ID}\">"));
        html.push_str(&page.body);
        html.push_str("</div>");
        html.push_str(&self.rest);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist::yew::ManagerProvider;
    use yew::prelude::*;
    use crate::components::footer::{copyright_line, current_year};
    use crate::content::services;
    use crate::pages::listing::ListSection;
    use crate::sections::SectionId;
    use regex::Regex;

    fn page(body: &str) -> RenderedPage {
        RenderedPage { styles: "<style>.a{}</style>".to_string(), body: body.to_string() }
    }

    #[test]
    fn template_splices_styles_script_and_app() {
        let template = HtmlTemplate::parse(
            "<html><head><title>t</title></head><body class=\"x\"><script src=\"/app.js\"></script></body></html>",
        )
        .unwrap();
        let html = template.assemble(&page("<nav></nav>"), &ColorModeConfig::default());

        let styles_at = html.find("<style>.a{}</style>").unwrap();
        let head_end = html.find("</head>").unwrap();
        let script_at = html.find("growth-color-mode").unwrap();
        let app_at = html.find("<div id=\"app\"><nav></nav></div>").unwrap();
        let bundle_at = html.find("/app.js").unwrap();

        assert!(styles_at < head_end);
        assert!(html[head_end..].starts_with("</head><body class=\"x\">"));
        assert!(head_end < script_at && script_at < app_at && app_at < bundle_at);
    }

    #[test]
    fn template_without_body_is_rejected() {
        assert!(matches!(
            HtmlTemplate::parse("<html><head></head></html>"),
            Err(RenderError::MissingBody)
        ));
        assert!(matches!(HtmlTemplate::parse("<html></html>"), Err(RenderError::MissingHead)));
    }

    #[test]
    fn fallback_template_is_well_formed() {
        let html = HtmlTemplate::fallback().assemble(&page("x"), &ColorModeConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<div id=\"app\">x</div>"));
    }

    #[test]
    fn fallback_reveals_entrances_without_scripts() {
        let fallback = HtmlTemplate::fallback();
        assert!(!fallback.hydrates());
        let html = fallback.assemble(&page("x"), &ColorModeConfig::default());
        let head_end = html.find("</head>").unwrap();
        let reveal = html.find("<style data-growth-reveal>").unwrap();
        assert!(reveal < head_end);
        assert!(!html.contains("<noscript>"));
    }

    #[test]
    fn hydrating_template_reveals_only_under_noscript() {
        let template =
            HtmlTemplate::parse("<html><head></head><body><script type=\"module\">init()</script></body></html>").unwrap();
        assert!(template.hydrates());
        let html = template.assemble(&page("x"), &ColorModeConfig::default());
        assert!(html.contains("<noscript><style data-growth-reveal>"));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(!is_not_found("/"));
        assert!(is_not_found("/pricing"));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let page = render_page("/").await.unwrap();
        let positions: Vec<usize> = ["home", "about", "services", "portfolio", "teams", "contact"]
            .iter()
            .map(|id| {
                page.body
                    .find(&format!("id=\"{id}\""))
                    .unwrap_or_else(|| panic!("section {id} missing"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn services_render_every_entry_verbatim_in_order() {
        let page = render_page("/").await.unwrap();
        let start = page.body.find("id=\"services\"").unwrap();
        let end = page.body.find("id=\"portfolio\"").unwrap();
        let section = &page.body[start..end];

        assert_eq!(section.matches("<li").count(), services().len());
        let mut cursor = 0;
        for service in services() {
            let title = section[cursor..].find(service.title).expect("title rendered") + cursor;
            let description = section[title..].find(service.description).expect("description rendered") + title;
            cursor = description;
        }
    }

    #[tokio::test]
    async fn inlined_styles_cover_every_class_in_markup() {
        let page = render_page("/").await.unwrap();
        let class_attr = Regex::new(r#"class="([^"]*)""#).unwrap();
        let classes: Vec<&str> = class_attr
            .captures_iter(&page.body)
            .filter_map(|c| c.get(1))
            .flat_map(|m| m.as_str().split_whitespace())
            .collect();

        assert!(!classes.is_empty());
        for class in classes {
            assert!(page.styles.contains(class), "class {class} has no inlined style");
        }
    }

    #[tokio::test]
    async fn shell_renders_nav_footer_and_scroll_control() {
        let page = render_page("/").await.unwrap();
        for label in ["Home", "About", "Services", "Contact"] {
            assert!(page.body.contains(&format!("aria-label=\"Go to {label}\"")));
        }
        assert!(page.body.contains("aria-label=\"Scroll to top\""));
        assert!(page.body.contains(&copyright_line(current_year())));
        assert_eq!(page.body.matches("target=\"_blank\"").count(), 4);
        assert!(page.body.contains("href=\"mailto:studiogrowth2@gmail.com\""));
    }

    #[tokio::test]
    async fn entrances_render_in_their_start_pose() {
        let page = render_page("/").await.unwrap();
        assert!(page.body.contains("translate(-50px, 0px)"));
        assert!(page.body.contains("translate(0px, 50px)"));
        assert!(!page.body.contains("transition: opacity"));
    }

    #[tokio::test]
    async fn every_section_is_marked_for_the_reveal_sheet() {
        let page = render_page("/").await.unwrap();
        let marked = Regex::new(r#"<section[^>]*data-motion="true""#).unwrap();
        assert_eq!(marked.find_iter(&page.body).count(), 6);
    }

    #[tokio::test]
    async fn render_ships_style_data_for_hydration() {
        let page = render_page("/").await.unwrap();
        assert!(page.body.contains("application/x-yew-comp-state"));
    }

    #[tokio::test]
    async fn head_carries_hero_keyframes() {
        let page = render_page("/").await.unwrap();
        let head = page.head();
        assert!(head.starts_with("<style data-growth-global>"));
        assert!(head.contains("@keyframes bgAnimation"));
        assert!(page.styles.contains("bgAnimation 30s ease-in-out infinite"));
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found() {
        let page = render_page("/nowhere").await.unwrap();
        assert!(page.body.contains("Page not found"));
        assert!(!page.body.contains("id=\"services\""));
    }

    #[derive(Properties, PartialEq)]
    struct EmptyListProps {
        manager: StyleManager,
    }

    #[function_component(EmptyList)]
    fn empty_list(props: &EmptyListProps) -> Html {
        html! {
            <ManagerProvider manager={props.manager.clone()}>
                <ListSection id={SectionId::Services} heading="Services" entries={Vec::new()} />
            </ManagerProvider>
        }
    }

    #[tokio::test]
    async fn empty_list_renders_empty_section() {
        let (writer, _reader) = render_static();
        let body = ServerRenderer::<EmptyList>::with_props(move || EmptyListProps {
            manager: StyleManager::builder().writer(writer).build().unwrap(),
        })
        .render()
        .await;

        assert!(body.contains("id=\"services\""));
        assert!(body.contains("<ul"));
        assert!(!body.contains("<li"));
    }
}
