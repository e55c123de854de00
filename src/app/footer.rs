use leptos::prelude::*;

use crate::{portfolio::PERSONAL_INFO, util::Section};

use super::{
    components::{SectionLink, SocialIcons},
    theme::ThemeContext,
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let quick_links = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-12 grid gap-8 md:grid-cols-3">
                <div>
                    <div class="flex items-center gap-3 mb-4">
                        <span class="w-10 h-10 flex items-center justify-center rounded-lg bg-orange-500 text-white font-bold">
                            {PERSONAL_INFO.initials()}
                        </span>
                        <div>
                            <h3 class="font-semibold text-white">{PERSONAL_INFO.name}</h3>
                            <p class="text-sm">{PERSONAL_INFO.title}</p>
                        </div>
                    </div>
                    <p class="text-sm leading-relaxed">
                        "Transforming data into actionable insights with expertise in AI & Machine Learning."
                    </p>
                </div>
                <div>
                    <h4 class="font-semibold text-white mb-4">"Quick Links"</h4>
                    <nav class="flex flex-col gap-2 text-sm">
                        {quick_links
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <SectionLink section class="hover:text-orange-400 transition-colors">
                                        {section.label()}
                                    </SectionLink>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <div>
                    <h4 class="font-semibold text-white mb-4">"Get in Touch"</h4>
                    <a
                        href=PERSONAL_INFO.mailto()
                        class="text-sm hover:text-orange-400 transition-colors break-all"
                    >
                        {PERSONAL_INFO.email}
                    </a>
                    <p class="text-sm mt-1">{PERSONAL_INFO.location}</p>
                    <SocialIcons class="mt-4" />
                </div>
            </div>
            <div class="border-t border-gray-800">
                <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm">
                    <span>
                        {format!("© {BUILD_YEAR} {}. All rights reserved.", PERSONAL_INFO.name)}
                    </span>
                    <div class="flex items-center gap-4">
                        <span>"Made with ❤️ using Rust, Leptos & Tailwind CSS"</span>
                        <button
                            type="button"
                            class="underline decoration-dotted hover:text-orange-400"
                            title="Forget the saved theme and follow the system setting"
                            on:click=move |_| theme.reset()
                        >
                            "Reset theme"
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
