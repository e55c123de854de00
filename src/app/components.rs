use leptos::{either::Either, ev::MouseEvent, html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{
    portfolio::PERSONAL_INFO,
    util::{merge_classes, Section},
};

/// Scrolls the section into view instead of jumping to the anchor.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section #{}", section.id());
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    opts.set_inline(web_sys::ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Anchor to an in-page section with smooth scrolling.
#[component]
pub fn SectionLink(
    section: Section,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] active_class: &'static str,
    #[prop(optional)] active: Option<Signal<bool>>,
    #[prop(optional)] on_nav: Option<Callback<Section>>,
    children: Children,
) -> impl IntoView {
    let is_active = move || active.map(|a| a.get()).unwrap_or(false);
    view! {
        <a
            href=section.href()
            class=move || {
                if is_active() { merge_classes([class, active_class]) } else { class.to_string() }
            }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                scroll_to_section(section);
                if let Some(cb) = on_nav {
                    cb.run(section);
                }
            }
        >
            {children()}
        </a>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn hidden_class(&self) -> &'static str {
        match self {
            Self::Below => "opacity-0 translate-y-8",
            Self::Left => "opacity-0 -translate-x-8",
            Self::Right => "opacity-0 translate-x-8",
        }
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (shown, set_shown) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_shown(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                merge_classes([
                    "transition-all duration-700 ease-out",
                    class,
                    if shown.get() { "opacity-100 translate-x-0 translate-y-0" } else { from.hidden_class() },
                ])
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn Heading(title: &'static str, #[prop(optional)] subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">
                {title}
                <span class="block mx-auto mt-3 h-1 w-20 rounded-full bg-orange-500"></span>
            </h2>
            {(!subtitle.is_empty())
                .then(|| {
                    view! {
                        <p class="max-w-3xl mx-auto text-lg text-gray-600 dark:text-gray-400">
                            {subtitle}
                        </p>
                    }
                })}
        </div>
    }
}

#[component]
pub fn Badge(#[prop(into)] text: String, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = merge_classes([
        "inline-block rounded-full px-3 py-1 text-xs font-medium bg-gray-100 text-gray-800 dark:bg-gray-800 dark:text-gray-200",
        class,
    ]);
    view! { <span class=class>{text}</span> }
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
    pub glyph: &'static str,
}

/// Email plus whichever profiles are set, in display order.
pub fn social_links(with_instagram: bool) -> Vec<SocialLink> {
    let social = PERSONAL_INFO.social;
    let mut links = vec![SocialLink {
        label: "Email",
        href: PERSONAL_INFO.mailto(),
        glyph: "✉️",
    }];
    let profiles = [
        ("LinkedIn", social.linkedin, "devicon-linkedin-plain"),
        ("GitHub", social.github, "devicon-github-original"),
    ];
    links.extend(profiles.into_iter().filter_map(|(label, href, glyph)| {
        href.map(|h| SocialLink {
            label,
            href: h.to_string(),
            glyph,
        })
    }));
    if with_instagram {
        if let Some(h) = social.instagram {
            links.push(SocialLink {
                label: "Instagram",
                href: h.to_string(),
                glyph: "devicon-instagram-plain",
            });
        }
    }
    links
}

#[component]
pub fn SocialIcons(
    #[prop(optional)] with_instagram: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=merge_classes(["flex gap-3", class])>
            {social_links(with_instagram)
                .into_iter()
                .map(|link| {
                    let is_icon = link.glyph.starts_with("devicon");
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.label
                            title=link.label
                            class="w-10 h-10 flex items-center justify-center rounded-full border border-gray-300 dark:border-gray-700 hover:text-orange-500 hover:border-orange-500 transition-colors text-xl"
                        >
                            {if is_icon {
                                Either::Left(view! { <i class=link.glyph></i> })
                            } else {
                                Either::Right(view! { <span>{link.glyph}</span> })
                            }}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
