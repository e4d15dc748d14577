use leptos::{either::*, html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::{About as AboutContent, Personal};
use crate::effects::{terminal_lines, TerminalLine, TerminalReveal};

use super::ambient::Reveal;

#[component]
pub fn About(personal: &'static Personal, about: &'static AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="py-20 sm:py-32 relative overflow-hidden">
            <div class="section-container relative z-10">
                <Reveal>
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <div class="inline-flex items-center gap-2 px-3 py-1 bg-primary-500/10 border border-primary-500/20 rounded-full text-primary-400 text-sm font-mono mb-4">
                                <span>"whoami"</span>
                            </div>
                            <h2 class="section-title">
                                "Get to know me" <span class="text-primary-500">"."</span>
                            </h2>
                            <p class="text-dark-300 text-lg leading-relaxed mb-8">{about.bio.clone()}</p>
                            <ul class="space-y-3">
                                {about
                                    .highlights
                                    .iter()
                                    .enumerate()
                                    .map(|(i, highlight)| {
                                        view! {
                                            <li
                                                class="flex items-start gap-3 group"
                                                style=format!("animation-delay: {}ms", i * 100)
                                            >
                                                <span class="text-primary-500 mt-0.5">"✓"</span>
                                                <span class="text-dark-300 group-hover:text-dark-200 transition-colors">
                                                    {highlight.clone()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <div class="mt-8 flex flex-wrap gap-2">
                                {about
                                    .tech
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-3 py-1 bg-dark-800 text-dark-300 text-sm rounded-lg border border-dark-700 hover:border-primary-500/50 hover:text-primary-400 transition-all cursor-default">
                                                {tech.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="relative">
                            <AnimatedTerminal personal about />
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn AnimatedTerminal(personal: &'static Personal, about: &'static AboutContent) -> impl IntoView {
    let lines = terminal_lines(personal, about);
    let (reveal, set_reveal) = signal(TerminalReveal::new(lines.len()));
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);

    #[cfg(feature = "hydrate")]
    {
        use crate::effects::TERMINAL_LINE_INTERVAL;

        let interval = StoredValue::new(None::<IntervalHandle>);
        let clear = move || {
            interval.update_value(|h| {
                if let Some(h) = h.take() {
                    h.clear();
                }
            });
        };
        Effect::new(move |_| {
            if !visible.get() || interval.with_value(Option::is_some) {
                return;
            }
            if reveal.get_untracked().is_done() {
                return;
            }
            let handle = set_interval_with_handle(
                move || {
                    if set_reveal.try_update(|r| r.tick()) != Some(true) {
                        clear();
                    }
                },
                TERMINAL_LINE_INTERVAL,
            );
            match handle {
                Ok(h) => interval.set_value(Some(h)),
                Err(e) => log::error!("couldn't start terminal timer: {e:?}"),
            }
        });
        on_cleanup(clear);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_reveal, visible);

    let rendered = move || {
        let shown = reveal.get().visible();
        lines
            .iter()
            .take(shown)
            .map(|line| view! { <TerminalRow line=line.clone() /> })
            .collect_view()
    };

    view! {
        <div node_ref=target class="code-block overflow-hidden rounded-xl shadow-2xl">
            <div class="code-block-header">
                <div class="code-block-dot bg-red-500" />
                <div class="code-block-dot bg-yellow-500" />
                <div class="code-block-dot bg-green-500" />
                <span class="ml-2 text-dark-500 text-sm font-mono">"about.js"</span>
            </div>
            <div class="p-4 font-mono text-sm sm:text-base min-h-[280px]">
                {rendered}
                {move || {
                    if reveal.get().is_done() {
                        Either::Left(
                            view! {
                                <div class="mt-2 flex items-center gap-2 text-dark-500">
                                    <span class="text-green-400">"$"</span>
                                    <span class="inline-block w-2 h-4 bg-primary-400 animate-blink" />
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! { <span class="inline-block w-2 h-4 bg-primary-400 animate-blink ml-1" /> },
                        )
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn TerminalRow(line: TerminalLine) -> impl IntoView {
    let row = match line {
        TerminalLine::Comment(text) => EitherOf4::A(view! { <span class="text-dark-500">{text}</span> }),
        TerminalLine::Declaration(name) => {
            EitherOf4::B(
                view! {
                    <span class="text-purple-400">"const "</span>
                    <span class="text-cyan-400">{name}</span>
                    <span class="text-dark-400">" = {"</span>
                },
            )
        }
        TerminalLine::Property { key, value, literal } => {
            EitherOf4::C(
                view! {
                    <span class="pl-5 text-dark-300">{key}</span>
                    <span class="text-dark-500">": "</span>
                    <span class=if literal { "text-orange-400" } else { "text-green-400" }>{value}</span>
                    <span class="text-dark-500">","</span>
                },
            )
        }
        TerminalLine::Close => EitherOf4::D(view! { <span class="text-dark-400">"};"</span> }),
    };
    view! { <div class="animate-fade-in">{row}</div> }
}
