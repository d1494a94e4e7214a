//! Style registry: every styled element of the page mapped to plain style
//! data. Components turn a [`StyleDecl`] into a stylist class; keyframes and
//! the reset are emitted once as a global stylesheet.

use crate::config::{MOBILE_BREAKPOINT_PX, SMALL_BREAKPOINT_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Nav,
    NavLink,
    Section,
    HomeSection,
    AboutSection,
    ServicesSection,
    PortfolioSection,
    TeamsSection,
    ContactSection,
    HeroHeading,
    HeroText,
    CtaButton,
    SectionHeading,
    SectionText,
    List,
    ListItem,
    EntryTitle,
    TeamGrid,
    TeamImage,
    ContactButton,
    ScrollTopButton,
    Footer,
    FooterColumn,
    Copyright,
    SocialRow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaQuery {
    MaxWidth(u32),
    MinWidth(u32),
}

impl MediaQuery {
    pub fn condition(&self) -> String {
        match self {
            MediaQuery::MaxWidth(px) => format!("screen and (max-width: {px}px)"),
            MediaQuery::MinWidth(px) => format!("screen and (min-width: {px}px)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaOverride {
    pub query: MediaQuery,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Percentage through the cycle, 0..=100.
    pub offset: u8,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    pub frames: Vec<Keyframe>,
    pub duration_secs: u32,
    pub easing: &'static str,
    pub infinite: bool,
}

impl Keyframes {
    /// Value for the `animation` shorthand that plays this sequence.
    pub fn animation_value(&self) -> String {
        let repeat = if self.infinite { "infinite" } else { "1" };
        format!("{} {}s {} {}", self.name, self.duration_secs, self.easing, repeat)
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for frame in &self.frames {
            css.push_str(&format!("  {}% {{ {}}}\n", frame.offset, inline(&frame.declarations)));
        }
        css.push_str("}\n");
        css
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDecl {
    pub declarations: Vec<Declaration>,
    pub hover: Vec<Declaration>,
    pub media: Vec<MediaOverride>,
    pub keyframes: Option<Keyframes>,
}

impl StyleDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        set(&mut self.declarations, property, value.into());
        self
    }

    pub fn hover(mut self, property: &'static str, value: impl Into<String>) -> Self {
        set(&mut self.hover, property, value.into());
        self
    }

    pub fn media(mut self, query: MediaQuery, declarations: &[(&'static str, &str)]) -> Self {
        self.media.push(MediaOverride {
            query,
            declarations: declarations
                .iter()
                .map(|&(property, value)| Declaration { property, value: value.to_string() })
                .collect(),
        });
        self
    }

    /// Attaches a keyframe sequence and plays it through `animation`.
    pub fn animated(mut self, keyframes: Keyframes) -> Self {
        let value = keyframes.animation_value();
        self.keyframes = Some(keyframes);
        self.with("animation", value)
    }

    /// Layers `other` on top of `self`. A property already present keeps its
    /// position and takes the new value.
    pub fn merge(mut self, other: StyleDecl) -> Self {
        for decl in other.declarations {
            set(&mut self.declarations, decl.property, decl.value);
        }
        for decl in other.hover {
            set(&mut self.hover, decl.property, decl.value);
        }
        self.media.extend(other.media);
        if other.keyframes.is_some() {
            self.keyframes = other.keyframes;
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Sheet body for a stylist scoped class.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for decl in &self.declarations {
            css.push_str(&format!("{}: {};\n", decl.property, decl.value));
        }
        if !self.hover.is_empty() {
            css.push_str(&format!("&:hover {{ {}}}\n", inline(&self.hover)));
        }
        for media in &self.media {
            css.push_str(&format!(
                "@media {} {{ {}}}\n",
                media.query.condition(),
                inline(&media.declarations)
            ));
        }
        css
    }
}

fn set(declarations: &mut Vec<Declaration>, property: &'static str, value: String) {
    match declarations.iter_mut().find(|d| d.property == property) {
        Some(existing) => existing.value = value,
        None => declarations.push(Declaration { property, value }),
    }
}

fn inline(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}: {}; ", d.property, d.value))
        .collect()
}

const HERO_IMAGES: [&str; 5] = [
    "https://images.pexels.com/photos/8294650/pexels-photo-8294650.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/10926479/pexels-photo-10926479.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/10926480/pexels-photo-10926480.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/10926481/pexels-photo-10926481.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/10926482/pexels-photo-10926482.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
];

fn background_image(url: &str) -> String {
    format!("url('{url}')")
}

pub fn hero_background() -> Keyframes {
    let step = 100 / (HERO_IMAGES.len() as u8 - 1);
    Keyframes {
        name: "bgAnimation",
        frames: HERO_IMAGES
            .iter()
            .enumerate()
            .map(|(i, url)| Keyframe {
                offset: i as u8 * step,
                declarations: vec![Declaration {
                    property: "background-image",
                    value: background_image(url),
                }],
            })
            .collect(),
        duration_secs: 30,
        easing: "ease-in-out",
        infinite: true,
    }
}

fn section_base() -> StyleDecl {
    StyleDecl::new()
        .with("min-height", "100vh")
        .with("padding", "20px")
        .with("text-align", "center")
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("justify-content", "center")
        .with("align-items", "center")
}

fn heading_2xl() -> StyleDecl {
    StyleDecl::new()
        .with("font-size", "2.25rem")
        .with("font-weight", "700")
        .with("line-height", "1.2")
        .with("margin", "0 0 1rem 0")
        .media(MediaQuery::MinWidth(MOBILE_BREAKPOINT_PX), &[("font-size", "3rem")])
}

fn button_base() -> StyleDecl {
    StyleDecl::new()
        .with("display", "inline-flex")
        .with("align-items", "center")
        .with("justify-content", "center")
        .with("height", "2.5rem")
        .with("min-width", "2.5rem")
        .with("padding", "0 1rem")
        .with("font-size", "1rem")
        .with("font-weight", "600")
        .with("border", "none")
        .with("border-radius", "0.375rem")
        .with("text-decoration", "none")
        .with("cursor", "pointer")
}

pub fn style_for(key: StyleKey) -> StyleDecl {
    match key {
        StyleKey::Nav => StyleDecl::new()
            .with("display", "flex")
            .with("justify-content", "center")
            .with("gap", "20px")
            .with("padding", "10px")
            .with("background-color", "#282c34")
            .with("position", "sticky")
            .with("top", "0")
            .with("z-index", "1000"),
        StyleKey::NavLink => StyleDecl::new()
            .with("color", "white")
            .with("text-decoration", "none")
            .with("font-size", "18px")
            .with("cursor", "pointer"),
        StyleKey::Section => section_base(),
        StyleKey::HomeSection => section_base()
            .with("background-image", background_image(HERO_IMAGES[0]))
            .with("background-size", "cover")
            .with("background-position", "center")
            .animated(hero_background()),
        StyleKey::AboutSection => section_base()
            .with("background", "linear-gradient(120deg, #f7f7f7, #ececec)")
            .with("color", "black"),
        StyleKey::ServicesSection => section_base()
            .with("background", "linear-gradient(120deg, #f093fb 0%, #f5576c 100%)")
            .with("color", "white"),
        StyleKey::PortfolioSection => section_base().merge(
            StyleDecl::new()
                .with("background", "linear-gradient(to bottom, #333, #555)")
                .with("color", "#fff")
                .media(MediaQuery::MaxWidth(MOBILE_BREAKPOINT_PX), &[("background", "#333")]),
        ),
        StyleKey::TeamsSection => section_base(),
        StyleKey::ContactSection => section_base().merge(
            StyleDecl::new()
                .with("background", "linear-gradient(to top, #37ecba, #72afd3)")
                .with("padding", "20px")
                .with("display", "flex")
                .with("flex-direction", "column")
                .with("justify-content", "center")
                .with("align-items", "center")
                .media(MediaQuery::MaxWidth(MOBILE_BREAKPOINT_PX), &[("padding", "10px")]),
        ),
        StyleKey::HeroHeading => heading_2xl()
            .with("color", "white")
            .with("font-weight", "600")
            .with("text-align", "center")
            .with("letter-spacing", "0.05em")
            .with("cursor", "default"),
        StyleKey::HeroText => StyleDecl::new()
            .with("font-size", "1.125rem")
            .with("text-align", "center")
            .with("padding", "0.5rem 1rem")
            .with("background", "rgba(255, 255, 255, 0.7)")
            .with("border-radius", "0.5rem"),
        StyleKey::CtaButton => button_base()
            .with("height", "3rem")
            .with("min-width", "3rem")
            .with("padding", "0 1.5rem")
            .with("font-size", "1.125rem")
            .with("margin-top", "2rem")
            .with("background", "#3182ce")
            .with("color", "white")
            .hover("background", "#2b6cb0"),
        StyleKey::SectionHeading => heading_2xl(),
        StyleKey::SectionText => StyleDecl::new()
            .with("font-size", "1.125rem")
            .with("text-align", "center"),
        StyleKey::List => StyleDecl::new()
            .with("list-style", "none")
            .with("padding", "0")
            .with("margin", "0"),
        StyleKey::ListItem => StyleDecl::new()
            .with("border-bottom", "1px solid #ccc")
            .with("padding", "20px")
            .with("list-style", "none"),
        StyleKey::EntryTitle => StyleDecl::new()
            .with("font-size", "1rem")
            .with("font-weight", "bold")
            .with("margin", "0 0 0.5rem 0"),
        StyleKey::TeamGrid => StyleDecl::new()
            .with("display", "grid")
            .with("grid-template-columns", "repeat(1, minmax(0, 1fr))")
            .with("gap", "1.5rem")
            .media(
                MediaQuery::MinWidth(SMALL_BREAKPOINT_PX),
                &[("grid-template-columns", "repeat(2, minmax(0, 1fr))")],
            )
            .media(
                MediaQuery::MinWidth(MOBILE_BREAKPOINT_PX),
                &[("grid-template-columns", "repeat(3, minmax(0, 1fr))")],
            ),
        StyleKey::TeamImage => StyleDecl::new()
            .with("border-radius", "50%")
            .with("width", "200px")
            .with("height", "200px")
            .with("object-fit", "cover")
            .with("margin-bottom", "20px"),
        StyleKey::ContactButton => button_base()
            .with("background", "#EDF2F7")
            .with("color", "#1A202C")
            .with("margin-top", "1rem")
            .hover("background", "#E2E8F0"),
        StyleKey::ScrollTopButton => button_base()
            .with("position", "fixed")
            .with("bottom", "20px")
            .with("right", "20px")
            .with("background", "black")
            .with("color", "white")
            .hover("background", "#2D3748"),
        StyleKey::Footer => StyleDecl::new()
            .with("padding", "10px")
            .with("background-color", "#282c34")
            .with("color", "white")
            .with("text-align", "center"),
        StyleKey::FooterColumn => StyleDecl::new()
            .with("display", "flex")
            .with("flex-direction", "column")
            .with("align-items", "center")
            .with("gap", "10px"),
        StyleKey::Copyright => StyleDecl::new()
            .with("font-size", "0.875rem")
            .with("color", "#718096")
            .with("margin", "0"),
        StyleKey::SocialRow => StyleDecl::new()
            .with("display", "flex")
            .with("gap", "10px")
            .with("justify-content", "center"),
    }
}

const ALL_KEYS: [StyleKey; 25] = [
    StyleKey::Nav,
    StyleKey::NavLink,
    StyleKey::Section,
    StyleKey::HomeSection,
    StyleKey::AboutSection,
    StyleKey::ServicesSection,
    StyleKey::PortfolioSection,
    StyleKey::TeamsSection,
    StyleKey::ContactSection,
    StyleKey::HeroHeading,
    StyleKey::HeroText,
    StyleKey::CtaButton,
    StyleKey::SectionHeading,
    StyleKey::SectionText,
    StyleKey::List,
    StyleKey::ListItem,
    StyleKey::EntryTitle,
    StyleKey::TeamGrid,
    StyleKey::TeamImage,
    StyleKey::ContactButton,
    StyleKey::ScrollTopButton,
    StyleKey::Footer,
    StyleKey::FooterColumn,
    StyleKey::Copyright,
    StyleKey::SocialRow,
];

const RESET: &str = r#"*, *::before, *::after { box-sizing: border-box; }
html { -webkit-text-size-adjust: 100%; }
body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  line-height: 1.5;
  color: #1A202C;
  background: #ffffff;
}
[data-theme="dark"] body { color: rgba(255, 255, 255, 0.92); background: #1A202C; }
img { max-width: 100%; }
h1, h2, h3, p { margin: 0; }
"#;

/// Reset plus every keyframe sequence the registry declares. Keyframes are
/// global in CSS, so they live here rather than in a scoped class.
pub fn global_stylesheet() -> String {
    let mut css = String::from(RESET);
    for key in ALL_KEYS {
        if let Some(keyframes) = style_for(key).keyframes {
            css.push_str(&keyframes.to_css());
        }
    }
    css
}
