use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::theme::{ThemePreference, ThemeState};

/// Handle to the page-wide theme, provided once by `ThemeProvider`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
    prefers_dark: Signal<bool>,
}

impl ThemeContext {
    pub fn preference(&self) -> ThemePreference {
        self.state.with(|s| s.preference())
    }

    pub fn cycle(&self) {
        self.state.update(|s| {
            s.cycle();
        });
    }

    pub fn reset(&self) {
        self.state.update(ThemeState::reset);
    }

    pub fn is_dark(&self) -> bool {
        self.preference().resolve(self.prefers_dark.get()).is_dark()
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(ThemeState::default());
    let ctx = ThemeContext {
        state,
        prefers_dark: use_preferred_dark(),
    };
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        use codee::string::JsonSerdeWasmCodec;
        use leptos_use::storage::use_local_storage;

        use crate::theme::THEME_STORAGE_KEY;

        let (stored, set_stored, _) =
            use_local_storage::<String, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

        Effect::watch(
            || (),
            move |_, _, _| {
                let persisted = stored.get_untracked();
                state.set(ThemeState::init(Some(&persisted)));
            },
            true,
        );

        Effect::watch(
            move || state.get().preference(),
            move |pref, _, _| set_stored.set(pref.as_str().to_string()),
            false,
        );

        Effect::new(move |_| {
            let dark = ctx.is_dark();
            if let Some(root) = document().document_element() {
                let _ = root.class_list().toggle_with_force("dark", dark);
            }
        });
    }

    children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            class="w-9 h-9 flex items-center justify-center rounded-md border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            title=move || theme.preference().toggle_title()
            aria-label=move || theme.preference().toggle_title()
            on:click=move |_| theme.cycle()
        >
            <span aria-hidden="true">{move || theme.preference().icon()}</span>
        </button>
    }
}
