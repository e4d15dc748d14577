use leptos::{html, prelude::*};

use crate::content::SkillCategory;
use crate::effects::{category_gradient, glow_origin, SKILL_GLOW_SIZE};

use super::ambient::Reveal;

#[component]
pub fn Skills(skills: &'static [SkillCategory]) -> impl IntoView {
    if skills.is_empty() {
        return None;
    }

    Some(view! {
        <section id="skills" class="py-20 sm:py-32 relative">
            <div class="section-container">
                <Reveal>
                    <h2 class="section-title text-center">
                        "Skills & Technologies" <span class="text-primary-500">"."</span>
                    </h2>
                    <p class="section-subtitle text-center mx-auto">
                        "The tools I reach for when building things."
                    </p>
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {skills
                            .iter()
                            .enumerate()
                            .map(|(i, category)| {
                                let delay_ms = i * 100;
                                view! { <SkillCard category delay_ms /> }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    })
}

#[component]
fn SkillCard(category: &'static SkillCategory, delay_ms: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let (hovered, set_hovered) = signal(false);
    let (glow, set_glow) = signal((0.0, 0.0));

    let on_move = move |e: leptos::ev::MouseEvent| {
        let Some(el) = card.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_glow.set(glow_origin(
            f64::from(e.client_x()) - rect.left(),
            f64::from(e.client_y()) - rect.top(),
            SKILL_GLOW_SIZE,
        ));
    };

    view! {
        <div
            node_ref=card
            class="relative group"
            style=format!("animation-delay: {delay_ms}ms")
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:mousemove=on_move
        >
            <Show when=move || hovered.get()>
                <div
                    class="absolute w-32 h-32 rounded-full pointer-events-none transition-opacity duration-300 blur-xl"
                    style=move || {
                        let (left, top) = glow.get();
                        format!(
                            "background: radial-gradient(circle, rgba(99, 102, 241, 0.3) 0%, transparent 70%); left: {left}px; top: {top}px"
                        )
                    }
                />
            </Show>
            <div class="card relative overflow-hidden hover:border-primary-500/50 transition-all duration-500 hover:-translate-y-1">
                <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500">
                    <div class=format!(
                        "absolute inset-[-1px] bg-gradient-to-r {} rounded-xl opacity-20",
                        category_gradient(&category.category),
                    ) />
                </div>
                <div class="relative z-10">
                    <h3 class="text-lg font-semibold text-white mb-4 group-hover:text-primary-400 transition-colors">
                        {category.category.clone()}
                    </h3>
                    <div class="flex flex-wrap gap-2">
                        {category
                            .items
                            .iter()
                            .map(|item| {
                                view! {
                                    <span class="px-3 py-1 bg-dark-800 text-dark-300 text-sm rounded-full border border-dark-700 hover:border-primary-500/50 hover:text-primary-400 transition-all cursor-default">
                                        {item.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
