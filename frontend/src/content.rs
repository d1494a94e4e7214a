//! Compiled-in page content. Everything here is read-only and rendered in
//! declaration order.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub description: &'static str,
    /// Local asset path or remote URL.
    pub image: &'static str,
}

/// Not rendered anywhere yet; kept as plain data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLinks {
    pub facebook: &'static str,
    pub twitter: &'static str,
    pub instagram: &'static str,
}

/// Title/description pair shared by the services and portfolio lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListEntry {
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&ServiceItem> for ListEntry {
    fn from(item: &ServiceItem) -> Self {
        ListEntry { title: item.title, description: item.description }
    }
}

impl From<&PortfolioItem> for ListEntry {
    fn from(item: &PortfolioItem) -> Self {
        ListEntry { title: item.title, description: item.description }
    }
}

const SERVICES: [ServiceItem; 5] = [
    ServiceItem { title: "Custom Web Development", description: "Build scalable websites." },
    ServiceItem { title: "UI/UX Design", description: "Enhance user experience." },
    ServiceItem { title: "E-Commerce Solutions", description: "Maximize online sales." },
    ServiceItem { title: "SEO Optimization", description: "Boost search engine visibility." },
    ServiceItem { title: "Maintenance and Support", description: "Keep websites updated." },
];

const PORTFOLIO: [PortfolioItem; 3] = [
    PortfolioItem {
        title: "Chapai Bar Association",
        description: "This is a website for Chapai Nawabganj Bar Association. ",
    },
    PortfolioItem {
        title: "Priyo Fruits",
        description: "This is a website for Priyo Fruits.",
    },
    PortfolioItem {
        title: "Kinder Garten School",
        description: "This is a website for Kinder Garten School.",
    },
];

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Mahafizur Rahman (Biplob)",
        description: "Software Engineer",
        image: "/assets/biplob.jpg",
    },
    TeamMember {
        name: "Sanjida Akther Bipa",
        description: "Designer",
        image: "/assets/Sanjida Akther.jpg",
    },
    TeamMember {
        name: "Asik",
        description: "SEO Specialist",
        image: "https://images.pexels.com/photos/30139862/pexels-photo-30139862.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    TeamMember {
        name: "Sudipto Paul",
        description: "UI/UX Designer",
        image: "/assets/sudipto.jpg",
    },
];

const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "studiogrowth2@gmail.com",
    phone: "+880 1906553275",
    address: "1216-mirpur, Dhaka, Bangladesh",
};

const SOCIAL_LINKS: SocialLinks = SocialLinks {
    facebook: "https://www.facebook.com/growthstudio2",
    twitter: "https://www.twitter.com",
    instagram: "https://www.instagram.com",
};

pub fn services() -> &'static [ServiceItem] {
    &SERVICES
}

pub fn portfolio() -> &'static [PortfolioItem] {
    &PORTFOLIO
}

pub fn team() -> &'static [TeamMember] {
    &TEAM
}

pub fn contact_info() -> &'static ContactInfo {
    &CONTACT_INFO
}

pub fn social_links() -> &'static SocialLinks {
    &SOCIAL_LINKS
}

pub fn mailto_link() -> String {
    format!("mailto:{}", contact_info().email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_keep_declared_order() {
        let titles: Vec<_> = services().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Custom Web Development",
                "UI/UX Design",
                "E-Commerce Solutions",
                "SEO Optimization",
                "Maintenance and Support",
            ]
        );
    }

    #[test]
    fn list_entries_copy_text_verbatim() {
        let entries: Vec<ListEntry> = portfolio().iter().map(ListEntry::from).collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "Chapai Bar Association");
        // trailing space is part of the content
        assert!(entries[0].description.ends_with(". "));
    }

    #[test]
    fn team_images_are_local_assets_or_absolute_urls() {
        for member in team() {
            assert!(
                member.image.starts_with("/assets/") || member.image.starts_with("https://"),
                "unexpected image reference for {}",
                member.name
            );
        }
    }

    #[test]
    fn mailto_uses_contact_email() {
        assert_eq!(mailto_link(), "mailto:studiogrowth2@gmail.com");
    }
}
