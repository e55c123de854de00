use leptos::prelude::*;

use crate::{
    listing::{ProjectFilter, ProjectListing},
    portfolio::{Project, PROJECTS},
};

use super::components::{Badge, Heading, Reveal};

const SHOWN_TECH: usize = 4;

const FILTER_CLASS: &str = "px-4 py-2 rounded-full text-sm font-medium transition-colors";
const FILTER_ACTIVE: &str = "bg-orange-500 text-white shadow-md";
const FILTER_IDLE: &str = "bg-white dark:bg-gray-900 border border-gray-300 dark:border-gray-700 hover:border-orange-500";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let listing = RwSignal::new(ProjectListing::new(PROJECTS));

    let filters = ProjectFilter::options()
        .into_iter()
        .map(|filter| {
            let label = filter.label().to_string();
            let selected = Signal::derive({
                let filter = filter.clone();
                move || listing.with(|l| l.is_selected(&filter))
            });
            view! {
                <button
                    type="button"
                    class=move || {
                        format!(
                            "{FILTER_CLASS} {}",
                            if selected.get() { FILTER_ACTIVE } else { FILTER_IDLE },
                        )
                    }
                    aria-pressed=move || selected.get().to_string()
                    on:click=move |_| listing.update(|l| l.set_filter(filter.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="max-w-6xl mx-auto px-4">
            <Reveal>
                <Heading
                    title="Featured Projects"
                    subtitle="A showcase of my technical expertise across AI, machine learning and cloud solutions that drive real-world impact."
                />
            </Reveal>
            <div class="flex flex-wrap justify-center gap-3 mb-10">{filters}</div>
            <Show
                when=move || !listing.with(|l| l.is_empty())
                fallback=move || {
                    view! {
                        <div class="text-center py-16">
                            <p class="text-gray-600 dark:text-gray-400 mb-4">
                                {move || {
                                    listing
                                        .with(|l| {
                                            format!(
                                                "No projects found for \"{}\". Try a different filter or view all projects.",
                                                l.filter().label(),
                                            )
                                        })
                                }}
                            </p>
                            <button
                                type="button"
                                class=format!("{FILTER_CLASS} {FILTER_ACTIVE}")
                                on:click=move |_| listing.update(|l| l.set_filter(ProjectFilter::All))
                            >
                                "View All Projects"
                            </button>
                        </div>
                    }
                }
            >
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || listing.with(|l| l.visible_projects())
                        key=|p| p.id
                        children=|project| view! { <ProjectCard project /> }
                    />
                </div>
                <div class="text-center mt-10 space-y-3">
                    <Show when=move || listing.with(|l| l.can_expand())>
                        <button
                            type="button"
                            class="px-8 py-3 rounded-full border border-orange-500 text-orange-500 hover:bg-orange-500 hover:text-white font-medium transition-colors"
                            on:click=move |_| listing.update(|l| l.toggle())
                        >
                            {move || listing.with(|l| l.toggle_label())}
                        </button>
                    </Show>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {move || listing.with(|l| l.summary())}
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let extra = project.technologies.len().saturating_sub(SHOWN_TECH);
    view! {
        <article class="group h-full flex flex-col rounded-2xl overflow-hidden bg-white dark:bg-gray-900 shadow-md hover:shadow-xl hover:-translate-y-1 transition-all border border-gray-100 dark:border-gray-800">
            <div class="relative overflow-hidden h-48">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <Badge
                                text="Featured"
                                class="absolute top-3 right-3 bg-orange-500 text-white dark:bg-orange-500 dark:text-white"
                            />
                        }
                    })}
            </div>
            <div class="flex-1 flex flex-col p-6">
                <h3 class="text-lg font-bold mb-2 group-hover:text-orange-500 transition-colors">
                    {project.title}
                </h3>
                <p class="flex-1 text-sm text-gray-600 dark:text-gray-400 mb-4">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .take(SHOWN_TECH)
                        .map(|t| view! { <Badge text={*t} /> })
                        .collect_view()}
                    {(extra > 0).then(|| view! { <Badge text=format!("+{extra}") /> })}
                </div>
                <div class="flex gap-4 text-sm font-medium">
                    {project
                        .link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-orange-500 hover:text-orange-600"
                                >
                                    "Live Demo ↗"
                                </a>
                            }
                        })}
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-orange-500"
                                >
                                    <i class="devicon-github-original"></i>
                                    " Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
