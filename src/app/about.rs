use leptos::prelude::*;

use crate::{
    portfolio::{HIGHLIGHT_STATS, PERSONAL_INFO},
    util::Section,
};

use super::components::{Badge, Heading, Reveal, RevealFrom, SectionLink, SocialIcons};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4">
            <Reveal>
                <Heading
                    title="About Me"
                    subtitle="Passionate about transforming complex data into actionable insights that drive business innovation and success."
                />
            </Reveal>
            <div class="grid lg:grid-cols-5 gap-12 items-center">
                <Reveal from=RevealFrom::Left class="lg:col-span-2 flex justify-center">
                    <img
                        src=PERSONAL_INFO.profile_image
                        alt=format!("{} - {}", PERSONAL_INFO.name, PERSONAL_INFO.title)
                        class="w-72 h-72 object-cover rounded-2xl shadow-xl ring-4 ring-orange-500/20"
                    />
                </Reveal>
                <Reveal from=RevealFrom::Right delay_ms=150 class="lg:col-span-3">
                    <h3 class="text-2xl font-bold mb-2">{PERSONAL_INFO.name}</h3>
                    <Badge
                        text=PERSONAL_INFO.title
                        class="bg-orange-100 text-orange-700 dark:bg-orange-900/30 dark:text-orange-300"
                    />
                    <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                        "📍 " {PERSONAL_INFO.location}
                    </p>
                    <p class="mt-6 leading-relaxed text-gray-700 dark:text-gray-300">
                        {PERSONAL_INFO.bio}
                    </p>
                    <div class="grid grid-cols-3 gap-4 my-8">
                        {HIGHLIGHT_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center p-4 rounded-xl bg-gray-50 dark:bg-gray-900">
                                        <div class="text-2xl font-bold text-orange-500">
                                            {stat.value}
                                        </div>
                                        <div class="text-xs text-gray-500 dark:text-gray-400">
                                            {stat.label}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap items-center gap-4">
                        <a
                            href=PERSONAL_INFO.resume_url
                            download=""
                            class="px-6 py-2 rounded-full bg-orange-500 hover:bg-orange-600 text-white font-medium transition-colors"
                        >
                            "⬇ Resume"
                        </a>
                        <SectionLink
                            section=Section::Contact
                            class="px-6 py-2 rounded-full border border-gray-300 dark:border-gray-700 hover:border-orange-500 font-medium transition-colors"
                        >
                            "Get in Touch"
                        </SectionLink>
                        <SocialIcons with_instagram=true />
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
