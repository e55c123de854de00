use leptos::prelude::*;

use crate::{
    listing::ItemPreview,
    portfolio::{Skill, SKILLS},
};

use super::components::{Badge, Heading, Reveal};

// Card accents cycle by position.
const ACCENTS: [(&str, &str); 6] = [
    ("from-orange-500 to-red-500", "bg-orange-500"),
    ("from-blue-500 to-cyan-500", "bg-blue-500"),
    ("from-purple-500 to-pink-500", "bg-purple-500"),
    ("from-green-500 to-emerald-500", "bg-green-500"),
    ("from-yellow-500 to-orange-500", "bg-yellow-500"),
    ("from-indigo-500 to-blue-500", "bg-indigo-500"),
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4">
            <Reveal>
                <Heading
                    title="Skills & Expertise"
                    subtitle="A comprehensive toolkit spanning machine learning, data engineering and cloud platforms."
                />
            </Reveal>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <Reveal delay_ms={i as u32 * 100}>
                                <SkillCard skill accent=ACCENTS[i % ACCENTS.len()] />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, accent: (&'static str, &'static str)) -> impl IntoView {
    let (gradient, bar) = accent;
    let preview = RwSignal::new(ItemPreview::default());
    let len = skill.items.len();

    view! {
        <article class="h-full rounded-2xl bg-white dark:bg-gray-900 shadow-md hover:shadow-xl transition-shadow p-6 border border-gray-100 dark:border-gray-800">
            <div class="flex items-center gap-4 mb-4">
                <span
                    class=format!(
                        "w-12 h-12 flex items-center justify-center rounded-xl bg-gradient-to-br {gradient} text-2xl",
                    )
                    title=skill.icon.name()
                >
                    {skill.icon.glyph()}
                </span>
                <h3 class="text-lg font-bold">{skill.category}</h3>
            </div>
            <div class="flex justify-between text-sm mb-1">
                <span class="text-gray-500 dark:text-gray-400">"Proficiency"</span>
                <span class="font-medium">{format!("{}%", skill.progress)}</span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-800 mb-4 overflow-hidden">
                <div
                    class=format!("h-full rounded-full {bar}")
                    style=format!("width: {}%", skill.progress)
                ></div>
            </div>
            <div class="flex flex-wrap gap-2">
                {move || {
                    preview
                        .get()
                        .visible(skill.items)
                        .iter()
                        .map(|item| view! { <Badge text={*item} /> })
                        .collect_view()
                }}
            </div>
            {preview
                .get_untracked()
                .has_more(len)
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="mt-4 text-sm font-medium text-orange-500 hover:text-orange-600"
                            on:click=move |_| preview.update(|p| p.toggle())
                        >
                            {move || preview.get().toggle_label(len)}
                        </button>
                    }
                })}
        </article>
    }
}
