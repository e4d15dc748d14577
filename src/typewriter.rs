//! Cyclic typewriter text animation.
//!
//! A [`Typewriter`] types each configured phrase one character at a time,
//! holds it, deletes it one character at a time, then moves on to the next
//! phrase, forever. Every transition runs as its own callback on a
//! [`Scheduler`], so the same engine drives browser timers in the hydrated app
//! and a [`VirtualScheduler`] in tests.

mod scheduler;

#[cfg(feature = "hydrate")]
pub use scheduler::BrowserScheduler;
pub use scheduler::{Scheduler, Task, VirtualScheduler, VirtualToken};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("invalid typewriter config: {0}")]
    InvalidConfig(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub typing_interval: Duration,
    pub deleting_interval: Duration,
    pub pause_duration: Duration,
}

impl TypewriterConfig {
    pub fn new<I, S>(
        phrases: I,
        typing_interval: Duration,
        deleting_interval: Duration,
        pause_duration: Duration,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            typing_interval,
            deleting_interval,
            pause_duration,
        }
    }

    /// Builds a config from signed millisecond values, as they come out of
    /// content files, rejecting anything negative.
    pub fn from_millis<I, S>(
        phrases: I,
        typing_ms: i64,
        deleting_ms: i64,
        pause_ms: i64,
    ) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let to_duration = |ms: i64| {
            u64::try_from(ms)
                .map(Duration::from_millis)
                .map_err(|_| TypewriterError::InvalidConfig("durations must not be negative"))
        };
        let config = Self::new(
            phrases,
            to_duration(typing_ms)?,
            to_duration(deleting_ms)?,
            to_duration(pause_ms)?,
        );
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TypewriterError> {
        if self.phrases.is_empty() {
            return Err(TypewriterError::InvalidConfig("phrase list is empty"));
        }
        if self.typing_interval.is_zero() {
            return Err(TypewriterError::InvalidConfig(
                "typing interval must be positive",
            ));
        }
        if self.deleting_interval.is_zero() {
            return Err(TypewriterError::InvalidConfig(
                "deleting interval must be positive",
            ));
        }
        Ok(())
    }

    /// Delay before the transition that leaves `phase`.
    fn delay_for(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Typing => self.typing_interval,
            Phase::Paused => self.pause_duration,
            Phase::Deleting => self.deleting_interval,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    phrase_index: usize,
    displayed_text: String,
    phase: Phase,
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self {
            phrase_index: 0,
            displayed_text: String::new(),
            phase: Phase::Typing,
        }
    }
}

impl TypewriterState {
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn text(&self) -> &str {
        &self.displayed_text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Applies exactly one transition and returns the phase it lands in.
    ///
    /// `phrases` must be the non-empty list this state was started with.
    fn step(&mut self, phrases: &[String]) -> Phase {
        let phrase = &phrases[self.phrase_index];
        match self.phase {
            Phase::Typing => {
                // displayed_text is a prefix, so its length is a char boundary
                if let Some(c) = phrase[self.displayed_text.len()..].chars().next() {
                    self.displayed_text.push(c);
                }
                if self.displayed_text.len() == phrase.len() {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.displayed_text.pop();
                if self.displayed_text.is_empty() {
                    self.phrase_index = (self.phrase_index + 1) % phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.phase
    }
}

type Listener = Box<dyn Fn(&str) + Send + Sync>;

struct Inner<T> {
    config: TypewriterConfig,
    state: TypewriterState,
    pending: Option<T>,
    running: bool,
    transitions: u64,
}

struct Core<S: Scheduler> {
    scheduler: S,
    listener: Option<Listener>,
    inner: Mutex<Inner<S::Token>>,
}

impl<S: Scheduler> Core<S> {
    fn lock(&self) -> MutexGuard<'_, Inner<S::Token>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn schedule_step<S: Scheduler>(core: &Arc<Core<S>>, delay: Duration) -> S::Token {
    let weak = Arc::downgrade(core);
    core.scheduler.schedule(delay, Box::new(move || fire(&weak)))
}

fn fire<S: Scheduler>(weak: &Weak<Core<S>>) {
    let Some(core) = weak.upgrade() else {
        return;
    };
    let text = {
        let mut guard = core.lock();
        if !guard.running {
            return;
        }
        let inner = &mut *guard;
        inner.pending = None;
        let phase = inner.state.step(&inner.config.phrases);
        inner.transitions += 1;
        log::trace!(
            "typewriter step {}: phrase {} {:?} {:?}",
            inner.transitions,
            inner.state.phrase_index,
            phase,
            inner.state.displayed_text
        );
        let delay = inner.config.delay_for(phase);
        inner.pending = Some(schedule_step(&core, delay));
        inner.state.displayed_text.clone()
    };
    if let Some(listener) = &core.listener {
        listener(&text);
    }
}

/// Handle to a running typewriter animation.
///
/// Dropping the handle stops the animation and releases its pending timer.
pub struct Typewriter<S: Scheduler> {
    core: Arc<Core<S>>,
}

impl<S: Scheduler> Typewriter<S> {
    pub fn start(config: TypewriterConfig, scheduler: S) -> Result<Self, TypewriterError> {
        Self::start_inner(config, scheduler, None)
    }

    /// Like [`Typewriter::start`], calling `listener` with the new text after
    /// every transition.
    pub fn start_with_listener<F>(
        config: TypewriterConfig,
        scheduler: S,
        listener: F,
    ) -> Result<Self, TypewriterError>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self::start_inner(config, scheduler, Some(Box::new(listener)))
    }

    fn start_inner(
        config: TypewriterConfig,
        scheduler: S,
        listener: Option<Listener>,
    ) -> Result<Self, TypewriterError> {
        config.validate()?;
        log::debug!(
            "starting typewriter with {} phrase(s)",
            config.phrases.len()
        );
        let first_delay = config.delay_for(Phase::Typing);
        let core = Arc::new(Core {
            scheduler,
            listener,
            inner: Mutex::new(Inner {
                config,
                state: TypewriterState::default(),
                pending: None,
                running: true,
                transitions: 0,
            }),
        });
        let token = schedule_step(&core, first_delay);
        core.lock().pending = Some(token);
        Ok(Self { core })
    }

    pub fn text(&self) -> String {
        self.core.lock().state.displayed_text.clone()
    }

    pub fn snapshot(&self) -> TypewriterState {
        self.core.lock().state.clone()
    }

    pub fn is_running(&self) -> bool {
        self.core.lock().running
    }

    /// Number of transitions applied since start.
    pub fn transitions(&self) -> u64 {
        self.core.lock().transitions
    }

    /// Cancels the pending transition. Safe to call any number of times.
    pub fn stop(&self) {
        let pending = {
            let mut inner = self.core.lock();
            if !inner.running {
                return;
            }
            inner.running = false;
            inner.pending.take()
        };
        if let Some(token) = pending {
            self.core.scheduler.cancel(token);
        }
        log::debug!("typewriter stopped");
    }
}

impl<S: Scheduler> Drop for Typewriter<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn config(phrases: &[&str], typing: u64, deleting: u64, pause: u64) -> TypewriterConfig {
        TypewriterConfig::new(
            phrases.iter().copied(),
            Duration::from_millis(typing),
            Duration::from_millis(deleting),
            Duration::from_millis(pause),
        )
    }

    fn assert_prefix(tw: &Typewriter<VirtualScheduler>, phrases: &[&str]) {
        let state = tw.snapshot();
        assert!(
            phrases[state.phrase_index()].starts_with(state.text()),
            "{:?} is not a prefix of {:?}",
            state.text(),
            phrases[state.phrase_index()]
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let scheduler = VirtualScheduler::new();
        let empty: [&str; 0] = [];
        assert!(matches!(
            Typewriter::start(config(&empty, 10, 5, 100), scheduler.clone()),
            Err(TypewriterError::InvalidConfig(_))
        ));
        assert!(Typewriter::start(config(&["a"], 0, 5, 100), scheduler.clone()).is_err());
        assert!(Typewriter::start(config(&["a"], 10, 0, 100), scheduler.clone()).is_err());
        assert!(TypewriterConfig::from_millis(["a"], 10, 5, -1).is_err());
        assert!(TypewriterConfig::from_millis(["a"], -10, 5, 100).is_err());
        // nothing was left behind by the failed starts
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_pause_is_valid() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["ab"], 10, 5, 0), scheduler.clone()).unwrap();
        // the zero-length pause comes due inside the same window
        scheduler.advance_millis(20);
        assert_eq!(tw.snapshot().phase(), Phase::Deleting);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.transitions(), 3);
        scheduler.advance_millis(5);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_initial_state() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["Engineer"], 10, 5, 100), scheduler.clone()).unwrap();
        let state = tw.snapshot();
        assert_eq!(state.phrase_index(), 0);
        assert_eq!(state.text(), "");
        assert_eq!(state.phase(), Phase::Typing);
        assert!(tw.is_running());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_engineer_solver_scenario() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["Engineer", "Solver"], 10, 5, 100), scheduler.clone())
            .unwrap();

        scheduler.advance_millis(8 * 10);
        let state = tw.snapshot();
        assert_eq!(state.text(), "Engineer");
        assert_eq!(state.phase(), Phase::Paused);
        assert_eq!(state.phrase_index(), 0);

        // a pause that has not elapsed yet changes nothing
        scheduler.advance_millis(99);
        assert_eq!(tw.snapshot().phase(), Phase::Paused);
        scheduler.advance_millis(1);
        assert_eq!(tw.snapshot().phase(), Phase::Deleting);
        assert_eq!(tw.text(), "Engineer");

        scheduler.advance_millis(8 * 5);
        let state = tw.snapshot();
        assert_eq!(state.text(), "");
        assert_eq!(state.phrase_index(), 1);
        assert_eq!(state.phase(), Phase::Typing);

        scheduler.advance_millis(6 * 10);
        let state = tw.snapshot();
        assert_eq!(state.text(), "Solver");
        assert_eq!(state.phase(), Phase::Paused);
    }

    #[test]
    fn test_full_cycle_transition_count() {
        for phrase in ["a", "Engineer", "Problem Solver"] {
            let scheduler = VirtualScheduler::new();
            let tw = Typewriter::start(config(&[phrase], 3, 2, 7), scheduler.clone()).unwrap();
            let len = phrase.chars().count() as u64;

            let mut steps = 0;
            loop {
                assert!(scheduler.run_next());
                steps += 1;
                let state = tw.snapshot();
                if state.text().is_empty() && state.phase() == Phase::Typing {
                    break;
                }
            }
            assert_eq!(steps, 2 * len + 1, "cycle length for {phrase:?}");
            assert_eq!(tw.transitions(), steps);
            assert_eq!(tw.snapshot().phrase_index(), 0);
        }
    }

    #[test]
    fn test_prefix_invariant_and_index_order() {
        let phrases = ["Software Engineer", "", "SaaS Hunter", "x"];
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&phrases, 4, 2, 9), scheduler.clone()).unwrap();

        let mut seen = vec![0];
        let mut previous = tw.snapshot();
        for _ in 0..500 {
            assert!(scheduler.run_next());
            assert_prefix(&tw, &phrases);
            let state = tw.snapshot();
            let index = state.phrase_index();
            if index != previous.phrase_index() {
                assert_eq!(index, (previous.phrase_index() + 1) % phrases.len());
                // the index moves only on the delete that empties the text
                assert_eq!(previous.phase(), Phase::Deleting);
                assert!(previous.text().chars().count() <= 1, "{previous:?}");
                assert_eq!(state.text(), "");
                assert_eq!(state.phase(), Phase::Typing);
                seen.push(index);
            }
            previous = state;
        }
        assert!(seen.len() > phrases.len(), "should wrap around: {seen:?}");
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&[""], 10, 5, 100), scheduler.clone()).unwrap();

        let expected = [Phase::Paused, Phase::Deleting, Phase::Typing];
        for round in 0..5 {
            for phase in expected {
                assert!(scheduler.run_next());
                let state = tw.snapshot();
                assert_eq!(state.phase(), phase, "round {round}");
                assert_eq!(state.text(), "");
                assert_eq!(scheduler.pending(), 1);
            }
        }

        // one cycle is 10 + 100 + 5 ms, so a second holds at most 27 transitions
        let before = tw.transitions();
        let ran = scheduler.advance_millis(1000);
        assert_eq!(tw.transitions() - before, ran as u64);
        assert!(ran <= 27, "ran {ran} transitions in one second");
        assert!(ran >= 24);
    }

    #[test]
    fn test_huge_pause_does_not_overflow() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(
            TypewriterConfig::new(
                ["a"],
                Duration::from_millis(10),
                Duration::from_millis(5),
                Duration::MAX,
            ),
            scheduler.clone(),
        )
        .unwrap();

        assert_eq!(scheduler.advance_millis(10), 1);
        assert_eq!(tw.snapshot().phase(), Phase::Paused);
        assert_eq!(tw.text(), "a");
        assert_eq!(scheduler.pending(), 1);

        // still holding the phrase a long time later
        assert_eq!(scheduler.advance(Duration::from_secs(60 * 60 * 24 * 365)), 0);
        assert_eq!(tw.text(), "a");

        tw.stop();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_single_phrase_retypes() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["hi"], 10, 5, 20), scheduler.clone()).unwrap();
        // type 2, pause, delete 2: 20 + 20 + 10
        scheduler.advance_millis(50);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.snapshot().phrase_index(), 0);
        scheduler.advance_millis(10);
        assert_eq!(tw.text(), "h");
    }

    #[test]
    fn test_multibyte_phrase() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["héllo✓"], 1, 1, 1), scheduler.clone()).unwrap();
        let mut typed = Vec::new();
        for _ in 0..6 {
            scheduler.run_next();
            typed.push(tw.text());
        }
        assert_eq!(typed, vec!["h", "hé", "hél", "héll", "héllo", "héllo✓"]);
        scheduler.run_next();
        scheduler.run_next();
        assert_eq!(tw.text(), "héllo");
    }

    #[test]
    fn test_stop_freezes_and_releases_timer() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["Engineer"], 10, 5, 100), scheduler.clone()).unwrap();
        scheduler.advance_millis(35);
        assert_eq!(tw.text(), "Eng");

        tw.stop();
        assert!(!tw.is_running());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance_millis(10_000);
        assert_eq!(tw.text(), "Eng");

        tw.stop();
        assert_eq!(tw.text(), "Eng");
        assert_eq!(tw.transitions(), 3);
    }

    #[test]
    fn test_stop_during_pause() {
        let scheduler = VirtualScheduler::new();
        let tw = Typewriter::start(config(&["ab"], 10, 5, 100), scheduler.clone()).unwrap();
        scheduler.advance_millis(20);
        assert_eq!(tw.snapshot().phase(), Phase::Paused);
        tw.stop();
        scheduler.advance_millis(1000);
        let state = tw.snapshot();
        assert_eq!(state.phase(), Phase::Paused);
        assert_eq!(state.text(), "ab");
    }

    #[test]
    fn test_drop_releases_timer() {
        let scheduler = VirtualScheduler::new();
        {
            let _tw = Typewriter::start(config(&["abc"], 10, 5, 100), scheduler.clone()).unwrap();
            scheduler.advance_millis(15);
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.advance_millis(1000), 0);
    }

    #[test]
    fn test_listener_notified_per_transition() {
        let scheduler = VirtualScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let tw = {
            let seen = seen.clone();
            let calls = calls.clone();
            Typewriter::start_with_listener(
                config(&["ok"], 10, 5, 100),
                scheduler.clone(),
                move |text: &str| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    seen.lock().unwrap().push(text.to_string());
                },
            )
            .unwrap()
        };

        scheduler.advance_millis(20 + 100 + 10);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        assert_eq!(*seen.lock().unwrap(), vec!["o", "ok", "ok", "o", ""]);
        assert_eq!(tw.transitions(), 5);
    }

    #[test]
    fn test_listener_can_read_handle() {
        let scheduler = VirtualScheduler::new();
        let slot: Arc<Mutex<Option<Typewriter<VirtualScheduler>>>> = Arc::new(Mutex::new(None));
        let echoed = Arc::new(Mutex::new(String::new()));
        let tw = {
            let slot = slot.clone();
            let echoed = echoed.clone();
            Typewriter::start_with_listener(config(&["xy"], 1, 1, 1), scheduler.clone(), move |_| {
                if let Some(tw) = slot.lock().unwrap().as_ref() {
                    *echoed.lock().unwrap() = tw.text();
                }
            })
            .unwrap()
        };
        *slot.lock().unwrap() = Some(tw);
        scheduler.advance_millis(1);
        assert_eq!(*echoed.lock().unwrap(), "x");
        slot.lock().unwrap().take();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_independent_instances() {
        let scheduler = VirtualScheduler::new();
        let a = Typewriter::start(config(&["aaaa"], 10, 5, 100), scheduler.clone()).unwrap();
        let b = Typewriter::start(config(&["bbbb"], 20, 5, 100), scheduler.clone()).unwrap();
        scheduler.advance_millis(40);
        assert_eq!(a.text(), "aaaa");
        assert_eq!(b.text(), "bb");

        a.stop();
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance_millis(40);
        assert_eq!(a.text(), "aaaa");
        assert_eq!(b.text(), "bbbb");
    }
}
