use leptos::{ev, prelude::*};
use leptos_use::{use_debounce_fn, use_event_listener, use_window};

use crate::{portfolio::PERSONAL_INFO, util::Section};

use super::{
    components::{scroll_to_section, SectionLink},
    theme::ThemeToggle,
};

// Sections count as "in view" once their top passes below the fixed header.
const HEADER_OFFSET: f64 = 96.0;
const SCROLL_DEBOUNCE_MS: f64 = 100.0;

const LINK_CLASS: &str = "px-3 py-2 rounded-md text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-orange-500 transition-colors";
const ACTIVE_CLASS: &str = "text-orange-500 dark:text-orange-400";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(Section::Home);

    let update_active = use_debounce_fn(
        move || {
            let tops = Section::ALL
                .into_iter()
                .filter_map(|s| {
                    document()
                        .get_element_by_id(s.id())
                        .map(|el| (s, el.get_bounding_client_rect().top()))
                })
                .collect::<Vec<_>>();
            if let Some(s) = Section::in_view(&tops, HEADER_OFFSET) {
                set_active(s);
            }
        },
        SCROLL_DEBOUNCE_MS,
    );
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        update_active();
    });

    // deep links like /#projects start out highlighted
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(s) = Section::from_href(&hash) {
            set_active(s);
        }
    });

    let on_nav = Callback::new(move |section: Section| {
        set_active(section);
        set_menu_open(false);
    });

    let nav_links = move || {
        Section::NAV
            .into_iter()
            .map(|section| {
                view! {
                    <li>
                        <SectionLink
                            section
                            class=LINK_CLASS
                            active_class=ACTIVE_CLASS
                            active=Signal::derive(move || active.get() == section)
                            on_nav
                        >
                            {section.label()}
                        </SectionLink>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-50 backdrop-blur-md bg-white/80 dark:bg-gray-950/80 border-b border-gray-200 dark:border-gray-800">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-3">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="flex items-center gap-3"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(Section::Home);
                            set_active(Section::Home);
                        }
                    >
                        <span class="w-10 h-10 flex items-center justify-center rounded-lg bg-orange-500 text-white font-bold">
                            {PERSONAL_INFO.initials()}
                        </span>
                        <span class="hidden sm:block font-semibold">{PERSONAL_INFO.name}</span>
                    </a>
                    <nav class="hidden md:block">
                        <ul class="flex items-center gap-1">{nav_links()}</ul>
                    </nav>
                    <div class="flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="md:hidden w-9 h-9 flex items-center justify-center rounded-md border border-gray-300 dark:border-gray-700"
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden mt-3 pb-3 border-t border-gray-200 dark:border-gray-800">
                        <ul class="flex flex-col gap-1 pt-3">{nav_links()}</ul>
                        <div class="mt-3 px-3 text-sm text-gray-500 dark:text-gray-400">
                            <a href=PERSONAL_INFO.mailto()>{PERSONAL_INFO.email}</a>
                        </div>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
