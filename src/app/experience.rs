use leptos::prelude::*;

use crate::portfolio::{Experience, EXPERIENCES};

use super::components::{Badge, Heading, Reveal, RevealFrom};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <div class="max-w-5xl mx-auto px-4">
            <Reveal>
                <Heading
                    title="Professional Experience"
                    subtitle="My journey in data science and AI, building solutions that create real business impact."
                />
            </Reveal>
            <ol class="relative border-l-2 border-orange-500/30 ml-3">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(i, exp)| {
                        let from = if i % 2 == 0 { RevealFrom::Left } else { RevealFrom::Right };
                        view! {
                            <li class="mb-10 ml-8">
                                <span class="absolute -left-[9px] mt-2 w-4 h-4 rounded-full bg-orange-500 ring-4 ring-white dark:ring-gray-950"></span>
                                <Reveal from delay_ms={i as u32 * 150}>
                                    <ExperienceCard exp />
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn ExperienceCard(exp: &'static Experience) -> impl IntoView {
    view! {
        <article class="rounded-2xl bg-white dark:bg-gray-900 shadow-md hover:shadow-xl transition-shadow p-6 border border-gray-100 dark:border-gray-800">
            <div class="flex flex-wrap items-start justify-between gap-2 mb-4">
                <div>
                    <h3 class="text-xl font-bold">{exp.position}</h3>
                    <p class="text-orange-500 font-medium">{exp.company}</p>
                </div>
                {exp
                    .is_current()
                    .then(|| {
                        view! {
                            <Badge
                                text="Current Position"
                                class="bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-300"
                            />
                        }
                    })}
            </div>
            <div class="flex flex-wrap gap-4 text-sm text-gray-500 dark:text-gray-400 mb-4">
                <span>"📅 " {exp.duration}</span>
                <span>"📍 " {exp.location}</span>
            </div>
            <h4 class="font-semibold mb-2">"Key Responsibilities"</h4>
            <ul class="space-y-2 mb-4">
                {exp
                    .responsibilities
                    .iter()
                    .map(|r| {
                        view! {
                            <li class="flex gap-2 text-gray-700 dark:text-gray-300">
                                <span class="text-orange-500">"▹"</span>
                                <span>{*r}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h4 class="font-semibold mb-2">"Technologies Used"</h4>
            <div class="flex flex-wrap gap-2">
                {exp.technologies.iter().map(|t| view! { <Badge text={*t} /> }).collect_view()}
            </div>
        </article>
    }
}
