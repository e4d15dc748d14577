use leptos::prelude::*;

use crate::content::{Contact as ContactContent, Personal};
use crate::effects::build_year;

use super::ambient::Reveal;

#[component]
pub fn Contact(contact: &'static ContactContent, personal: &'static Personal) -> impl IntoView {
    view! {
        <section id="contact" class="py-20 sm:py-32 relative">
            <div class="section-container max-w-2xl text-center">
                <Reveal>
                    <p class="text-primary-400 font-mono text-sm mb-4">"What's next?"</p>
                    <h2 class="section-title">
                        {contact.heading.clone()} <span class="text-primary-500">"."</span>
                    </h2>
                    <p class="text-dark-400 text-lg mb-10">{contact.message.clone()}</p>
                    {personal
                        .mailto()
                        .map(|href| {
                            view! {
                                <a href=href class="btn-primary inline-flex items-center gap-2 text-lg px-8 py-4">
                                    <i class="extra-mail" />
                                    {personal.email.clone()}
                                </a>
                            }
                        })}
                    {(!personal.location.is_empty())
                        .then(|| {
                            view! {
                                <p class="mt-6 text-dark-500 font-mono text-sm">
                                    <i class="extra-location mr-2" />
                                    {personal.location.clone()}
                                </p>
                            }
                        })}
                    <div class="flex items-center justify-center gap-6 mt-10">
                        {personal
                            .social_links()
                            .into_iter()
                            .map(|(platform, url)| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-dark-400 hover:text-primary-400 hover:-translate-y-1 transition-all text-2xl"
                                        aria-label=platform.label()
                                    >
                                        <i class=platform.icon_class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(personal: &'static Personal) -> impl IntoView {
    let year = build_year(env!("BUILD_TIME"))
        .map(|y| format!("© {y} "))
        .unwrap_or_else(|| "© ".to_string());

    view! {
        <footer class="relative z-10 py-8 border-t border-dark-800">
            <div class="section-container flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-dark-500">
                <p>{year}{personal.name.clone()}</p>
                <p class="font-mono">
                    "Built with " <span class="text-primary-400">"Rust"</span> " & "
                    <span class="text-primary-400">"Leptos"</span>
                </p>
                <div class="flex items-center gap-4">
                    {personal
                        .social_links()
                        .into_iter()
                        .map(|(platform, url)| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-dark-500 hover:text-primary-400 transition-colors"
                                    aria-label=platform.label()
                                >
                                    <i class=platform.icon_class() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a href="#" class="hover:text-primary-400 transition-colors">
                    "Back to top ↑"
                </a>
            </div>
        </footer>
    }
}
