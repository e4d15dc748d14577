use leptos::prelude::*;

use crate::typewriter::TypewriterConfig;

/// Reactive text driven by a [`crate::typewriter::Typewriter`].
///
/// The engine only runs in the browser; server rendering sees the initial
/// empty text. The engine is stopped when the owning component unmounts.
pub fn use_typewriter(config: TypewriterConfig) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::typewriter::{BrowserScheduler, Typewriter};

        let engine = StoredValue::new(None::<Typewriter<BrowserScheduler>>);
        Effect::new(move |_| {
            let started = Typewriter::start_with_listener(
                config.clone(),
                BrowserScheduler,
                move |s: &str| set_text.set(s.to_string()),
            );
            match started {
                Ok(tw) => engine.set_value(Some(tw)),
                Err(e) => log::error!("couldn't start typewriter: {e}"),
            }
        });
        on_cleanup(move || {
            engine.update_value(|tw| {
                if let Some(tw) = tw.take() {
                    tw.stop();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, set_text);

    text
}

#[component]
pub fn TypedText(config: TypewriterConfig) -> impl IntoView {
    let text = use_typewriter(config);
    view! {
        <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary-400 via-purple-400 to-cyan-400">
            {text}
        </span>
        <span class="animate-blink text-primary-400">"|"</span>
    }
}
