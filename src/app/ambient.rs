use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_element_visibility, use_event_listener, use_mouse, use_window};

use crate::effects::{is_clickable, particle_field, LoadingProgress};
#[cfg(feature = "hydrate")]
use crate::effects::{LoadingTick, LOADING_FINISH_DELAY, LOADING_TICK};

const PARTICLE_COUNT: usize = 40;
const PARTICLE_SEED: u64 = 0x5eed_1e55;

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let (progress, set_progress) = signal(LoadingProgress::default());

    #[cfg(feature = "hydrate")]
    {
        let interval = StoredValue::new(None::<IntervalHandle>);
        Effect::new(move |_| {
            let handle = set_interval_with_handle(
                move || {
                    if let Some(LoadingTick::Finished) = set_progress.try_update(|p| p.tick()) {
                        interval.update_value(|h| {
                            if let Some(h) = h.take() {
                                h.clear();
                            }
                        });
                        set_timeout(move || on_complete.run(()), LOADING_FINISH_DELAY);
                    }
                },
                LOADING_TICK,
            );
            match handle {
                Ok(h) => interval.set_value(Some(h)),
                Err(e) => {
                    log::error!("couldn't start loading timer: {e:?}");
                    on_complete.run(());
                }
            }
        });
        on_cleanup(move || {
            interval.update_value(|h| {
                if let Some(h) = h.take() {
                    h.clear();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_progress, on_complete);

    let percent = move || progress.get().percent();

    view! {
        <div class="fixed inset-0 bg-dark-950 z-[10000] flex items-center justify-center">
            <div class="text-center">
                <div class="mb-8">
                    <span class="text-4xl font-bold text-white">
                        "Loading" <span class="text-primary-500">"."</span>
                    </span>
                </div>
                <div class="w-48 h-1 bg-dark-800 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-primary-500 to-purple-500 transition-all duration-100"
                        style=move || format!("width: {}%", percent())
                    />
                </div>
                <div class="mt-4 text-dark-500 font-mono text-sm">{move || format!("{}%", percent())}</div>
            </div>
        </div>
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let mouse = use_mouse();
    let (mouse_x, mouse_y) = (mouse.x, mouse.y);
    let (is_pointer, set_is_pointer) = signal(false);
    let (is_hidden, set_is_hidden) = signal(false);

    let _ = use_event_listener(use_window(), ev::mousemove, move |e: ev::MouseEvent| {
        use wasm_bindgen::JsCast;

        let Some(el) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let inside = matches!(el.closest("a, button"), Ok(Some(_)));
        let cursor = window()
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("cursor").ok())
            .unwrap_or_default();
        set_is_pointer.set(is_clickable(&el.tag_name(), inside, &cursor));
    });
    let _ = use_event_listener(use_document(), ev::mouseleave, move |_| {
        set_is_hidden.set(true)
    });
    let _ = use_event_listener(use_document(), ev::mouseenter, move |_| {
        set_is_hidden.set(false)
    });

    let scale = move |grown: &'static str| if is_pointer.get() { grown } else { "1" };

    view! {
        <Show when=move || !is_hidden.get()>
            <div
                class="fixed pointer-events-none z-[9999] mix-blend-difference transition-transform duration-75"
                style=move || {
                    format!(
                        "left: {}px; top: {}px; transform: scale({})",
                        mouse_x.get() - 4.0,
                        mouse_y.get() - 4.0,
                        scale("2"),
                    )
                }
            >
                <div class="w-2 h-2 bg-white rounded-full" />
            </div>
            <div
                class="fixed pointer-events-none z-[9998] transition-all duration-300 ease-out"
                style=move || {
                    format!(
                        "left: {}px; top: {}px; transform: scale({})",
                        mouse_x.get() - 20.0,
                        mouse_y.get() - 20.0,
                        scale("1.5"),
                    )
                }
            >
                <div class="w-10 h-10 border border-primary-500/50 rounded-full" />
            </div>
        </Show>
    }
}

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let particles = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; animation-delay: {}ms; animation-duration: {}ms",
                        p.left_pct,
                        p.top_pct,
                        p.size_px,
                        p.size_px,
                        p.opacity,
                        p.delay_ms,
                        p.duration_ms,
                    );
                    view! { <span class="particle absolute rounded-full bg-primary-400" style=style /> }
                })
                .collect_view()}
        </div>
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || if revealed.get() { "animate-on-scroll visible" } else { "animate-on-scroll" }
        >
            {children()}
        </div>
    }
}
