use crate::motion::AnimationSpec;
use crate::styles::StyleKey;

/// Seconds every section-level entrance takes.
const SECTION_ENTRANCE_SECS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Portfolio,
    Teams,
    Contact,
}

impl SectionId {
    /// DOM id and scroll anchor.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Teams => "teams",
            SectionId::Contact => "contact",
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub style_key: StyleKey,
    pub entrance: Option<AnimationSpec>,
}

/// Sections in page order.
pub fn sections() -> [SectionDescriptor; 6] {
    [
        SectionDescriptor {
            id: SectionId::Home,
            style_key: StyleKey::HomeSection,
            entrance: Some(AnimationSpec::fade(SECTION_ENTRANCE_SECS)),
        },
        SectionDescriptor {
            id: SectionId::About,
            style_key: StyleKey::AboutSection,
            entrance: Some(AnimationSpec::slide_x(-50.0, SECTION_ENTRANCE_SECS)),
        },
        SectionDescriptor {
            id: SectionId::Services,
            style_key: StyleKey::ServicesSection,
            entrance: Some(AnimationSpec::scale(0.9, SECTION_ENTRANCE_SECS)),
        },
        SectionDescriptor {
            id: SectionId::Portfolio,
            style_key: StyleKey::PortfolioSection,
            entrance: Some(AnimationSpec::scale(0.9, SECTION_ENTRANCE_SECS)),
        },
        SectionDescriptor {
            id: SectionId::Teams,
            style_key: StyleKey::TeamsSection,
            entrance: Some(AnimationSpec::scale(0.9, SECTION_ENTRANCE_SECS)),
        },
        SectionDescriptor {
            id: SectionId::Contact,
            style_key: StyleKey::ContactSection,
            entrance: Some(AnimationSpec::slide_y(50.0, SECTION_ENTRANCE_SECS)),
        },
    ]
}

pub fn descriptor(id: SectionId) -> SectionDescriptor {
    sections()
        .into_iter()
        .find(|section| section.id == id)
        .unwrap_or(SectionDescriptor { id, style_key: StyleKey::Section, entrance: None })
}
