use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    portfolio::{HERO_ROLES, PERSONAL_INFO},
    util::Section,
};

use super::components::{Reveal, SectionLink, SocialIcons};

const ROLE_INTERVAL_MS: u64 = 2500;

#[component]
pub fn HeroSection() -> impl IntoView {
    let (role, set_role) = signal(0usize);
    let _ = use_interval_fn(
        move || set_role.update(|i| *i = (*i + 1) % HERO_ROLES.len()),
        ROLE_INTERVAL_MS,
    );

    view! {
        <div class="relative min-h-[90vh] flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 -z-10 bg-gradient-to-br from-orange-50 via-white to-blue-50 dark:from-gray-950 dark:via-gray-900 dark:to-gray-950"></div>
            <div class="max-w-4xl mx-auto px-4 text-center">
                <Reveal>
                    <span class="inline-block mb-6 px-4 py-2 rounded-full bg-orange-100 text-orange-700 dark:bg-orange-900/30 dark:text-orange-300 text-sm font-medium">
                        {format!("नमस्ते, I'm {}", PERSONAL_INFO.name)}
                    </span>
                </Reveal>
                <Reveal delay_ms=150>
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 min-h-[1.2em]">
                        <span class="text-orange-500">{move || HERO_ROLES[role.get()]}</span>
                        <span class="animate-pulse">"|"</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms=300>
                    <p class="text-lg md:text-xl text-gray-600 dark:text-gray-400 mb-10 max-w-2xl mx-auto">
                        {format!("{} based in {}.", PERSONAL_INFO.title, PERSONAL_INFO.location)}
                        " Turning data into decisions with Machine Learning, Deep Learning and Generative AI."
                    </p>
                </Reveal>
                <Reveal delay_ms=450>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-10">
                        <SectionLink
                            section=Section::Projects
                            class="px-8 py-3 rounded-full bg-orange-500 hover:bg-orange-600 text-white font-medium shadow-lg shadow-orange-500/25 transition-colors"
                        >
                            "View My Work"
                        </SectionLink>
                        <a
                            href=PERSONAL_INFO.resume_url
                            download=""
                            class="px-8 py-3 rounded-full border border-gray-300 dark:border-gray-700 hover:border-orange-500 font-medium transition-colors"
                        >
                            "⬇ Download Resume"
                        </a>
                    </div>
                </Reveal>
                <Reveal delay_ms=600>
                    <SocialIcons class="justify-center" />
                </Reveal>
                <div class="mt-16">
                    <SectionLink
                        section=Section::About
                        class="inline-block animate-bounce text-2xl text-gray-400 hover:text-orange-500"
                    >
                        "⌄"
                    </SectionLink>
                </div>
            </div>
        </div>
    }
}
