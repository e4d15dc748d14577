use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::Personal;
use crate::effects::navbar_scrolled;

const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar(personal: &'static Personal) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| navbar_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);
    let resume = personal.resume_url.clone();
    let mobile_resume = resume.clone();

    view! {
        <nav class=move || {
            if is_scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-dark-950/90 backdrop-blur-md shadow-lg shadow-dark-950/50"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="section-container">
                <div class="flex items-center justify-between h-16 sm:h-20">
                    <a href="#" class="text-xl font-bold text-white hover:text-primary-400 transition-colors">
                        {personal.first_name()}
                        <span class="text-primary-500">"."</span>
                    </a>
                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a href=*href class="text-dark-300 hover:text-white transition-colors text-sm font-medium">
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        {resume
                            .map(|url| {
                                view! {
                                    <a href=url download="resume.pdf" class="btn-primary text-sm py-2 px-4">
                                        "Resume"
                                    </a>
                                }
                            })}
                    </div>
                    <button
                        class="md:hidden text-dark-300 hover:text-white p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || if menu_open.get() { "extra-close" } else { "extra-menu" } />
                    </button>
                </div>
            </div>
            <div class=move || {
                if menu_open.get() {
                    "md:hidden transition-all duration-300 overflow-hidden max-h-96"
                } else {
                    "md:hidden transition-all duration-300 overflow-hidden max-h-0"
                }
            }>
                <div class="bg-dark-900/95 backdrop-blur-md border-t border-dark-800 px-4 py-4 space-y-2">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="block py-2 text-dark-300 hover:text-white transition-colors"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}
                    {mobile_resume
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    download="resume.pdf"
                                    class="block btn-primary text-center mt-4"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Resume"
                                </a>
                            }
                        })}
                </div>
            </div>
        </nav>
    }
}
