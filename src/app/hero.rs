use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size};

use crate::content::{HeroContent, Personal};
use crate::effects::parallax_offset;

use super::typing::TypedText;

#[component]
pub fn Hero(personal: &'static Personal, hero: &'static HeroContent) -> impl IntoView {
    let mouse = use_mouse();
    let window_size = use_window_size();
    let offset = Memo::new(move |_| {
        parallax_offset(
            mouse.x.get(),
            mouse.y.get(),
            window_size.width.get(),
            window_size.height.get(),
        )
    });
    let blob_style = move |factor: f64| {
        move || {
            let (x, y) = offset.get();
            format!("transform: translate({}px, {}px)", x * factor, y * factor)
        }
    };

    let typed_role = match hero.typewriter_config() {
        Ok(config) => Some(view! { <TypedText config /> }),
        Err(e) => {
            log::error!("hero roles disabled: {e}");
            None
        }
    };

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden">
                <div
                    class="absolute -top-40 -right-40 w-80 h-80 bg-primary-500/30 rounded-full blur-[100px] animate-blob"
                    style=blob_style(1.0)
                />
                <div
                    class="absolute top-1/2 -left-40 w-96 h-96 bg-purple-500/20 rounded-full blur-[120px] animate-blob animation-delay-2000"
                    style=blob_style(-1.0)
                />
                <div
                    class="absolute -bottom-40 right-1/3 w-72 h-72 bg-cyan-500/20 rounded-full blur-[100px] animate-blob animation-delay-4000"
                    style=blob_style(0.5)
                />
            </div>

            <div class="section-container relative z-10 text-center py-20">
                <div class="animate-fade-in">
                    <div class="inline-flex items-center gap-2 px-4 py-2 bg-primary-500/10 border border-primary-500/20 rounded-full mb-6 animate-pulse-slow">
                        <span class="text-primary-400 font-mono text-sm">"Available for opportunities"</span>
                    </div>
                    <p class="text-primary-400 font-mono text-sm sm:text-base mb-4">"Hi, my name is"</p>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold text-white mb-4 relative">
                        <span class="relative">{personal.name.clone()}</span>
                        <span class="text-primary-500 animate-pulse">"."</span>
                    </h1>
                    <h2 class="text-2xl sm:text-3xl md:text-4xl font-semibold text-dark-400 mb-6 h-12 sm:h-14">
                        {typed_role}
                    </h2>
                    <p class="text-dark-400 text-lg sm:text-xl max-w-2xl mx-auto mb-8">
                        {personal.tagline.clone()}
                    </p>

                    <div class="flex flex-wrap items-center justify-center gap-8 mb-10">
                        {hero
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center group">
                                        <div class="text-3xl font-bold text-white group-hover:text-primary-400 transition-colors">
                                            {stat.value.clone()}
                                        </div>
                                        <div class="text-sm text-dark-500">{stat.label.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center justify-center gap-4 mb-10">
                        {personal
                            .social_links()
                            .into_iter()
                            .map(|(platform, url)| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="group relative p-3 text-dark-400 hover:text-white rounded-lg transition-all duration-300 text-2xl"
                                        aria-label=platform.label()
                                    >
                                        <i class=platform.icon_class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href="#projects"
                            class="group relative inline-flex items-center gap-2 px-8 py-4 bg-gradient-to-r from-primary-600 to-primary-500 text-white font-medium rounded-lg transition-all duration-300 hover:-translate-y-0.5"
                        >
                            "View My Work"
                        </a>
                        {personal
                            .mailto()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        class="group relative inline-flex items-center gap-2 px-8 py-4 border border-dark-700 hover:border-primary-500/50 text-dark-200 hover:text-white font-medium rounded-lg transition-all duration-300 hover:-translate-y-0.5"
                                    >
                                        "Get In Touch"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <a
                    href="#about"
                    class="flex flex-col items-center gap-2 text-dark-500 hover:text-primary-400 transition-colors group"
                    aria-label="Scroll down"
                >
                    <span class="text-xs font-mono opacity-0 group-hover:opacity-100 transition-opacity">
                        "scroll"
                    </span>
                    <div class="w-6 h-10 border-2 border-current rounded-full flex justify-center p-1">
                        <div class="w-1 h-2 bg-current rounded-full animate-scroll-down" />
                    </div>
                </a>
            </div>
        </section>
    }
}
