use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::section::use_class;
use crate::config::BRAND;
use crate::content::social_links;
use crate::styles::StyleKey;

const ICON_SIZE: u32 = 24;

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Facebook,
    Twitter,
    Instagram,
}

impl SocialIcon {
    pub fn label(&self) -> &'static str {
        match self {
            SocialIcon::Facebook => "Facebook",
            SocialIcon::Twitter => "Twitter",
            SocialIcon::Instagram => "Instagram",
        }
    }

    pub fn href(&self) -> &'static str {
        let links = social_links();
        match self {
            SocialIcon::Facebook => links.facebook,
            SocialIcon::Twitter => links.twitter,
            SocialIcon::Instagram => links.instagram,
        }
    }

    fn glyph(&self) -> Html {
        match self {
            SocialIcon::Facebook => html! {
                <path d="M22 12a10 10 0 1 0-11.56 9.88v-6.99H7.9V12h2.54V9.8c0-2.5 1.49-3.89 3.78-3.89 1.09 0 2.24.2 2.24.2v2.46h-1.26c-1.24 0-1.63.77-1.63 1.56V12h2.78l-.44 2.89h-2.34v6.99A10 10 0 0 0 22 12z" />
            },
            SocialIcon::Twitter => html! {
                <path d="M23.95 4.57a10 10 0 0 1-2.82.77 4.96 4.96 0 0 0 2.16-2.72 9.9 9.9 0 0 1-3.12 1.19 4.92 4.92 0 0 0-8.38 4.48A13.94 13.94 0 0 1 1.64 3.16a4.92 4.92 0 0 0 1.52 6.57 4.9 4.9 0 0 1-2.23-.61v.06a4.92 4.92 0 0 0 3.95 4.83 4.96 4.96 0 0 1-2.21.08 4.93 4.93 0 0 0 4.6 3.42A9.87 9.87 0 0 1 0 19.54a13.94 13.94 0 0 0 7.55 2.21c9.05 0 14-7.5 14-13.98 0-.21 0-.42-.02-.63A9.94 9.94 0 0 0 24 4.59z" />
            },
            SocialIcon::Instagram => html! {
                <>
                    <rect x="2" y="2" width="20" height="20" rx="5" fill="none" stroke="currentColor" stroke-width="2" />
                    <circle cx="12" cy="12" r="4.5" fill="none" stroke="currentColor" stroke-width="2" />
                    <circle cx="17.5" cy="6.5" r="1.2" />
                </>
            },
        }
    }
}

const SOCIAL_ICONS: [SocialIcon; 3] = [SocialIcon::Facebook, SocialIcon::Twitter, SocialIcon::Instagram];

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_class = use_class(StyleKey::Footer);
    let column_class = use_class(StyleKey::FooterColumn);
    let copyright_class = use_class(StyleKey::Copyright);
    let row_class = use_class(StyleKey::SocialRow);

    html! {
        <footer class={footer_class}>
            <div class={column_class}>
                <p class={copyright_class}>{ copyright_line(current_year()) }</p>
                <div class={row_class}>
                    { for SOCIAL_ICONS.iter().map(|icon| html! {
                        <a
                            key={icon.label()}
                            href={icon.href()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={icon.label()}
                        >
                            <svg
                                width={ICON_SIZE.to_string()}
                                height={ICON_SIZE.to_string()}
                                viewBox="0 0 24 24"
                                fill="white"
                                color="white"
                            >
                                { icon.glyph() }
                            </svg>
                        </a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
