use leptos::prelude::*;

use crate::{
    listing::VisibleCount,
    portfolio::{Certification, CERTIFICATIONS},
    util::format_date,
};

use super::components::{Badge, Heading, Reveal};

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let shown = RwSignal::new(VisibleCount::default());
    let total = CERTIFICATIONS.len();

    view! {
        <div class="max-w-6xl mx-auto px-4">
            <Reveal>
                <Heading
                    title="Certifications"
                    subtitle="Professional credentials validating expertise in cloud, machine learning and data engineering."
                />
            </Reveal>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    CERTIFICATIONS
                        .iter()
                        .take(shown.get().visible(total))
                        .map(|cert| view! { <CertificationCard cert /> })
                        .collect_view()
                }}
            </div>
            {shown
                .get_untracked()
                .can_expand(total)
                .then(|| {
                    view! {
                        <div class="text-center mt-10">
                            <button
                                type="button"
                                class="px-8 py-3 rounded-full border border-orange-500 text-orange-500 hover:bg-orange-500 hover:text-white font-medium transition-colors"
                                on:click=move |_| shown.update(|s| s.toggle(total))
                            >
                                {move || shown.get().toggle_label(total)}
                            </button>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification) -> impl IntoView {
    let date = format_date(cert.date).unwrap_or_else(|| cert.date.to_string());
    let skills = cert.validated_skills();

    view! {
        <article class="h-full flex flex-col rounded-2xl overflow-hidden bg-white dark:bg-gray-900 shadow-md hover:shadow-xl transition-shadow border border-gray-100 dark:border-gray-800">
            <div class="relative h-40 overflow-hidden">
                <img src=cert.image alt=cert.title loading="lazy" class="w-full h-full object-cover" />
                <div class="absolute top-3 left-3 flex gap-2">
                    <Badge text="✓ Certified" class="bg-green-500 text-white dark:bg-green-500 dark:text-white" />
                    <Badge text=date class="bg-white/90 text-gray-800 dark:bg-gray-900/90" />
                </div>
            </div>
            <div class="flex-1 flex flex-col p-6">
                <h3 class="text-lg font-bold mb-1">{cert.title}</h3>
                <p class="text-sm text-orange-500 font-medium mb-4">{cert.issuer}</p>
                {(!skills.is_empty())
                    .then(|| {
                        view! {
                            <div class="mb-4">
                                <h4 class="text-xs uppercase tracking-wide text-gray-500 dark:text-gray-400 mb-2">
                                    "Skills Validated"
                                </h4>
                                <div class="flex flex-wrap gap-2">
                                    {skills
                                        .into_iter()
                                        .map(|s| view! { <Badge text=s /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })}
                <div class="mt-auto">
                    {cert
                        .credential_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm font-medium text-orange-500 hover:text-orange-600"
                                >
                                    "Verify ↗"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
