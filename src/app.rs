mod about;
mod certifications;
mod components;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{PERSONAL_INFO, SITE_CONFIG};

use footer::Footer;
use header::Header;
use homepage::HomePage;
use theme::ThemeProvider;

// Applies the stored theme before hydration so the page doesn't flash.
const THEME_BOOTSTRAP: &str = r#"try{var t=JSON.parse(localStorage.getItem("theme"))||"system";var d=t==="dark"||(t==="system"&&matchMedia("(prefers-color-scheme: dark)").matches);document.documentElement.classList.toggle("dark",d)}catch(e){}"#;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <script inner_html=THEME_BOOTSTRAP></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let title = format!("{} - {}", SITE_CONFIG.name, PERSONAL_INFO.title);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=SITE_CONFIG.description />
        <Meta name="keywords" content=SITE_CONFIG.keywords.join(", ") />
        <Meta name="author" content=SITE_CONFIG.name />
        <Meta name="robots" content="index, follow" />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=SITE_CONFIG.description />
        <Meta property="og:url" content=SITE_CONFIG.url />
        <Meta property="og:site_name" content=format!("{} Portfolio", SITE_CONFIG.name) />
        <Meta property="og:image" content=SITE_CONFIG.og_image />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=title />

        <ThemeProvider>
            <Router>
                <div class="flex flex-col min-h-screen">
                    <Header />
                    <main class="flex-grow">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </Router>
        </ThemeProvider>
    }
}
