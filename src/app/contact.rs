use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};

#[cfg(feature = "ssr")]
use crate::mailer::Mailer;
use crate::{
    contact::{ContactError, ContactForm, ContactFormState, Delivery, Field, SubmitStatus},
    portfolio::PERSONAL_INFO,
};

use super::components::{Heading, Reveal, RevealFrom};

#[server]
pub async fn send_message(form: ContactForm) -> Result<Delivery, ServerFnError> {
    let mailer = use_context::<std::sync::Arc<Mailer>>()
        .ok_or(ServerFnError::new("Mailer not configured"))?;
    mailer
        .deliver(&form, &PERSONAL_INFO)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-white dark:bg-gray-950 border focus:outline-none focus:ring-2 focus:ring-orange-500 disabled:opacity-60";

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(form)) = state.try_update(|s| s.begin_submit()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let res = send_message(form).await.map_err(|e| {
                log::error!("contact form submission failed: {e}");
                ContactError::Server(e.to_string())
            });
            state.update(|s| s.finish(res));
        });
    };

    view! {
        <div class="max-w-6xl mx-auto px-4">
            <Reveal>
                <Heading
                    title="Let's Connect"
                    subtitle="Have a project in mind or want to discuss opportunities in data science and AI? I'd love to hear from you."
                />
            </Reveal>
            <div class="grid lg:grid-cols-5 gap-10">
                <Reveal from=RevealFrom::Left class="lg:col-span-2 space-y-4">
                    <ContactMethods />
                </Reveal>
                <Reveal from=RevealFrom::Right delay_ms=150 class="lg:col-span-3">
                    <form
                        class="rounded-2xl bg-white dark:bg-gray-900 shadow-md p-6 md:p-8 border border-gray-100 dark:border-gray-800 space-y-5"
                        novalidate=true
                        on:submit=on_submit
                    >
                        <div>
                            <h3 class="text-xl font-bold">"Send a Message"</h3>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Fill out the form below and I'll get back to you within 24 hours."
                            </p>
                        </div>
                        <div class="grid md:grid-cols-2 gap-5">
                            <FormField state field=Field::Name placeholder="Your Name *" />
                            <FormField state field=Field::Email placeholder="Your Email *" />
                        </div>
                        <FormField state field=Field::Subject placeholder="Subject *" />
                        <FormField state field=Field::Message placeholder="Your Message *" />
                        {move || {
                            let status = state.with(|s| s.status());
                            state
                                .with(|s| s.acknowledgment())
                                .map(|msg| {
                                    let tone = if matches!(status, SubmitStatus::Success(_)) {
                                        "bg-green-50 text-green-700 dark:bg-green-900/30 dark:text-green-300"
                                    } else {
                                        "bg-red-50 text-red-700 dark:bg-red-900/30 dark:text-red-300"
                                    };
                                    view! {
                                        <p role="status" class=format!("rounded-lg px-4 py-3 text-sm {tone}")>
                                            {msg}
                                        </p>
                                    }
                                })
                        }}
                        <div class="flex gap-3">
                            <button
                                type="submit"
                                class="flex-1 px-6 py-3 rounded-lg bg-orange-500 hover:bg-orange-600 text-white font-medium transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                                disabled=move || state.with(|s| s.is_submitting())
                            >
                                {move || {
                                    if state.with(|s| s.is_submitting()) {
                                        "Sending..."
                                    } else {
                                        "Send Message ✈"
                                    }
                                }}
                            </button>
                            <button
                                type="button"
                                class="px-6 py-3 rounded-lg border border-gray-300 dark:border-gray-700 hover:border-orange-500 font-medium transition-colors disabled:opacity-60"
                                disabled=move || state.with(|s| s.is_submitting() || s.is_pristine())
                                on:click=move |_| state.update(|s| s.clear())
                            >
                                "Clear"
                            </button>
                        </div>
                    </form>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    state: RwSignal<ContactFormState>,
    field: Field,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || state.with(|s| s.error(field));
    let class = move || {
        let border = if error().is_some() {
            "border-red-500"
        } else {
            "border-gray-300 dark:border-gray-700"
        };
        format!("{INPUT_CLASS} {border}")
    };
    let value = move || state.with(|s| s.value(field).to_string());
    let disabled = move || state.with(|s| s.is_submitting());
    let on_input = move |ev: Event| state.update(|s| s.edit(field, event_target_value(&ev)));

    let input = if field == Field::Message {
        view! {
            <textarea
                name=field.name()
                rows=6
                placeholder=placeholder
                class=class
                prop:value=value
                disabled=disabled
                aria-invalid=move || error().is_some().to_string()
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        view! {
            <input
                type=kind
                name=field.name()
                placeholder=placeholder
                class=class
                prop:value=value
                disabled=disabled
                aria-invalid=move || error().is_some().to_string()
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div>
            {input}
            {move || error().map(|msg| view! { <p class="mt-1 text-sm text-red-500">{msg}</p> })}
        </div>
    }
}

#[component]
fn ContactMethods() -> impl IntoView {
    let social = PERSONAL_INFO.social;
    let methods = [
        ("✉️", "Email", PERSONAL_INFO.email.to_string(), Some(PERSONAL_INFO.mailto())),
        ("💼", "LinkedIn", "Connect professionally".to_string(), social.linkedin.map(str::to_string)),
        ("🐙", "GitHub", "Check out my code".to_string(), social.github.map(str::to_string)),
    ];

    view! {
        {methods
            .into_iter()
            .filter_map(|(glyph, label, detail, href)| href.map(|h| (glyph, label, detail, h)))
            .map(|(glyph, label, detail, href)| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-4 p-5 rounded-2xl bg-white dark:bg-gray-900 shadow-md hover:shadow-xl transition-shadow border border-gray-100 dark:border-gray-800"
                    >
                        <span class="w-12 h-12 flex items-center justify-center rounded-xl bg-orange-100 dark:bg-orange-900/30 text-2xl">
                            {glyph}
                        </span>
                        <div>
                            <h4 class="font-semibold">{label}</h4>
                            <p class="text-sm text-gray-500 dark:text-gray-400 break-all">{detail}</p>
                        </div>
                    </a>
                }
            })
            .collect_view()}
        <div class="p-5 rounded-2xl bg-orange-50 dark:bg-orange-900/20 text-sm">
            <p class="font-semibold mb-1">"📍 " {PERSONAL_INFO.location}</p>
            <p class="text-gray-600 dark:text-gray-400">
                "Open to remote opportunities and collaborations worldwide."
            </p>
        </div>
    }
}
