//! Shared handle around the edition state.
//!
//! `EditionStore` is the one object screens receive to read snapshots and
//! dispatch intents. `dispatch` is the only writer: it runs the reducer,
//! swaps the snapshot, then notifies subscribers and effect sinks outside the
//! lock so they are free to read the store again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::config::Config;
use crate::edition::{AppState, EditionIntent, EditionReducer, Story};
use crate::effects::{self, Effect, EffectSink};
use crate::mvi::Reducer;

pub type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Cloneable handle to the single edition state.
#[derive(Clone)]
pub struct EditionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    sinks: RwLock<Vec<Arc<dyn EffectSink>>>,
    next_subscription: AtomicU64,
}

impl EditionStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                listeners: Mutex::new(Vec::new()),
                sinks: RwLock::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Store seeded from configuration: seed stories plus configured defaults.
    pub fn from_config(config: &Config, stories: Vec<Story>) -> Self {
        let mut state = AppState::with_stories(stories);
        state.clarity_settings = config.clarity;
        state.edition_settings = config.schedule;
        Self::new(state)
    }

    /// Current snapshot. Later dispatches never mutate a returned value.
    pub fn snapshot(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Read the current snapshot without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.inner.state.read())
    }

    /// Apply one intent and return the resulting snapshot.
    pub fn dispatch(&self, intent: EditionIntent) -> AppState {
        let name = intent.name();
        if matches!(intent, EditionIntent::Unknown) {
            tracing::warn!("Ignoring unknown intent");
        }

        let (prev, next) = {
            let mut guard = self.inner.state.write();
            let prev = guard.clone();
            let next = EditionReducer::reduce(prev.clone(), intent);
            *guard = next.clone();
            (prev, next)
        };

        if prev == next {
            tracing::debug!(intent = name, "Intent left state unchanged");
            return next;
        }

        tracing::debug!(
            intent = name,
            cursor = next.current_story_index(),
            stories = next.stories.len(),
            saved = next.saved_stories.len(),
            "Applied intent"
        );

        self.notify(&next);
        self.emit(&effects::diff(&prev, &next));
        next
    }

    /// Register a callback run with every changed snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&AppState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(listener);
        self.inner.listeners.lock().push((id, listener));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn add_effect_sink(&self, sink: Arc<dyn EffectSink>) {
        self.inner.sinks.write().push(sink);
    }

    /// Forward effects that do not come from a state change (e.g. opening an
    /// article) to the registered sinks.
    pub fn emit(&self, effects: &[Effect]) {
        if effects.is_empty() {
            return;
        }
        let sinks = self.inner.sinks.read().clone();
        for effect in effects {
            for sink in &sinks {
                sink.handle(effect);
            }
        }
    }

    fn notify(&self, state: &AppState) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

impl Default for EditionStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
