use leptos::{html, prelude::*};

use crate::content::{Portfolio, Project};
use crate::effects::{card_tilt, glow_origin, tilt_transform, visible_tech, PROJECT_GLOW_SIZE};

use super::ambient::Reveal;

#[component]
pub fn Projects(portfolio: &'static Portfolio) -> impl IntoView {
    let featured = portfolio
        .featured_projects()
        .map(|project| view! { <ProjectCard project featured=true /> })
        .collect_view();
    let others = portfolio.other_projects().collect::<Vec<_>>();
    let others = (!others.is_empty()).then(|| {
        view! {
            <h3 class="text-xl font-semibold text-white text-center mt-16 mb-8">"Other Noteworthy Projects"</h3>
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {others
                    .into_iter()
                    .map(|project| view! { <ProjectCard project featured=false /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <section id="projects" class="py-20 sm:py-32 relative">
            <div class="section-container">
                <Reveal>
                    <h2 class="section-title text-center">
                        "Things I've built" <span class="text-primary-500">"."</span>
                    </h2>
                    <div class="grid md:grid-cols-2 gap-8">{featured}</div>
                    {others}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, featured: bool) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal((0.0, 0.0));
    let (glow, set_glow) = signal((0.0, 0.0));

    let on_move = move |e: leptos::ev::MouseEvent| {
        let Some(el) = card.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = f64::from(e.client_x()) - rect.left();
        let y = f64::from(e.client_y()) - rect.top();
        set_tilt.set(card_tilt(x, y, rect.width(), rect.height()));
        set_glow.set(glow_origin(x, y, PROJECT_GLOW_SIZE));
    };

    let (shown, hidden) = visible_tech(&project.tech, featured);
    let class = if featured {
        "card group relative p-6 overflow-hidden transition-transform duration-100 ease-out"
    } else {
        "card group relative p-5 overflow-hidden transition-transform duration-100 ease-out"
    };

    view! {
        <div
            node_ref=card
            class=class
            style=move || {
                let (x, y) = tilt.get();
                format!("transform: {}", tilt_transform(x, y))
            }
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt.set((0.0, 0.0))
        >
            <div
                class="absolute w-40 h-40 rounded-full pointer-events-none opacity-0 group-hover:opacity-100 transition-opacity duration-300 blur-2xl -z-10"
                style=move || {
                    let (left, top) = glow.get();
                    format!(
                        "background: radial-gradient(circle, rgba(99, 102, 241, 0.4) 0%, transparent 70%); left: {left}px; top: {top}px"
                    )
                }
            />
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-3">
                    <i class="extra-folder text-3xl text-primary-400" />
                    {featured
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 bg-primary-500/20 border border-primary-500/30 rounded-full text-primary-400 text-xs">
                                    "Featured"
                                </span>
                            }
                        })}
                </div>
                <div class="flex items-center gap-3">
                    {project
                        .github
                        .clone()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-dark-400 hover:text-white transition-colors"
                                    aria-label="Source code"
                                >
                                    <i class="devicon-github-original" />
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .clone()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-dark-400 hover:text-white transition-colors"
                                    aria-label="Live demo"
                                >
                                    <i class="extra-external" />
                                </a>
                            }
                        })}
                </div>
            </div>
            <h3 class="text-xl font-semibold text-white mb-2 group-hover:text-primary-400 transition-colors">
                {project.title.clone()}
            </h3>
            <p class="text-dark-400 mb-6">{project.description.clone()}</p>
            <ul class="flex flex-wrap gap-2 font-mono text-xs text-dark-500">
                {shown.iter().map(|tech| view! { <li>{tech.clone()}</li> }).collect_view()}
                {(hidden > 0).then(|| view! { <li class="text-primary-400">{format!("+{hidden}")}</li> })}
            </ul>
        </div>
    }
}
