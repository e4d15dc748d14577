use leptos::prelude::*;

use crate::content::Job;

use super::ambient::Reveal;

#[component]
pub fn Experience(jobs: &'static [Job]) -> impl IntoView {
    if jobs.is_empty() {
        return None;
    }
    let (active, set_active) = signal(0usize);

    let tabs = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let class = move || {
                if active.get() == i {
                    "text-left px-4 py-3 font-mono text-sm whitespace-nowrap border-b-2 md:border-b-0 md:border-l-2 border-primary-500 text-primary-400 bg-primary-500/5"
                } else {
                    "text-left px-4 py-3 font-mono text-sm whitespace-nowrap border-b-2 md:border-b-0 md:border-l-2 border-dark-800 text-dark-400 hover:text-white hover:bg-dark-800/50"
                }
            };
            view! {
                <button class=class on:click=move |_| set_active.set(i)>
                    {job.company.clone()}
                </button>
            }
        })
        .collect_view();

    let details = move || {
        // active only ever holds indexes of rendered tabs
        let job = &jobs[active.get().min(jobs.len() - 1)];
        view! {
            <div class="animate-fade-in">
                <h3 class="text-xl font-semibold text-white">
                    {job.role.clone()} <span class="text-primary-400">" @ "{job.company.clone()}</span>
                </h3>
                <p class="font-mono text-sm text-dark-500 mt-1 mb-4">{job.period.clone()}</p>
                <p class="text-dark-300 mb-4">{job.description.clone()}</p>
                <ul class="space-y-2">
                    {job
                        .highlights
                        .iter()
                        .map(|h| {
                            view! {
                                <li class="flex items-start gap-3 text-dark-300">
                                    <span class="text-primary-500 mt-1">"▹"</span>
                                    <span>{h.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    };

    Some(view! {
        <section id="experience" class="py-20 sm:py-32 relative">
            <div class="section-container max-w-4xl">
                <Reveal>
                    <h2 class="section-title">
                        "Where I've worked" <span class="text-primary-500">"."</span>
                    </h2>
                    <div class="flex flex-col md:flex-row gap-8 mt-8">
                        <div class="flex md:flex-col overflow-x-auto md:overflow-visible">{tabs}</div>
                        <div class="flex-1 min-h-[260px]">{details}</div>
                    </div>
                </Reveal>
            </div>
        </section>
    })
}
