mod about;
mod ambient;
mod contact;
mod experience;
mod hero;
mod navbar;
mod projects;
mod skills;
mod typing;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_size;

use crate::content::Portfolio;
use crate::effects::is_mobile;

use about::About;
use ambient::{CustomCursor, LoadingScreen, ParticleBackground};
use contact::{Contact, Footer};
use experience::Experience;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-dark-950 text-dark-200 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let name = Portfolio::load()
        .map(|p| p.personal.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || !is_loading.get()
            fallback=move || {
                view! { <LoadingScreen on_complete=Callback::new(move |_| set_is_loading.set(false)) /> }
            }
        >
            {match Portfolio::load() {
                Ok(portfolio) => view! { <Site portfolio /> }.into_any(),
                Err(e) => {
                    view! {
                        <main class="min-h-screen flex items-center justify-center">
                            <pre class="text-red">{format!("Couldn't load site content: {e}")}</pre>
                        </main>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}

#[component]
fn Site(portfolio: &'static Portfolio) -> impl IntoView {
    let window_size = use_window_size();
    let desktop = move || !is_mobile(window_size.width.get());

    view! {
        <div class="min-h-screen bg-dark-950 relative">
            <Show when=desktop>
                <CustomCursor />
            </Show>
            <ParticleBackground />
            <div class="fixed inset-0 pointer-events-none z-[1] noise-overlay" />

            <Navbar personal=&portfolio.personal />

            <main class="relative z-10">
                <Hero personal=&portfolio.personal hero=&portfolio.hero />
                <About personal=&portfolio.personal about=&portfolio.about />
                <Skills skills=portfolio.skills.as_slice() />
                <Experience jobs=portfolio.experience.as_slice() />
                <Projects portfolio />
                <Contact contact=&portfolio.contact personal=&portfolio.personal />
            </main>

            <Footer personal=&portfolio.personal />
        </div>
    }
}
