//! State container owning the current state of one reducer.
//!
//! The store is the only owner of mutable state. Views read snapshots with
//! [`Store::get_state`], request changes with [`Store::dispatch`] and learn
//! about new states through [`Store::subscribe`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use super::action::Action;
use super::reducer::Reducer;
use super::state::UiState;

/// Number of dispatched actions kept for inspection by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;
type ListenerList<S> = Mutex<Vec<(u64, Listener<S>)>>;

/// A dispatched action as recorded in the store history.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord<A> {
    /// Position of the action in dispatch order, starting at 0.
    pub sequence: u64,
    /// The action kind tag at dispatch time.
    pub kind: &'static str,
    pub action: A,
}

/// Thread-safe store handle.
///
/// Cloning is cheap and every clone refers to the same state. Dispatches
/// are serialized: each action is applied to the result of the previous
/// one, and every listener sees the resulting states in that same order.
///
/// Listeners run in registration order and may read the state or dispatch
/// again. A dispatch made from inside a listener is queued and applied once
/// the current notification round has reached every listener. Dispatches
/// from other threads wait until the running round and its queue are done.
pub struct Store<R: Reducer> {
    core: Arc<Mutex<StoreCore<R>>>,
    listeners: Arc<ListenerList<R::State>>,
    queue: Arc<ReentrantMutex<RefCell<DispatchQueue<R::Action>>>>,
}

struct DispatchQueue<A> {
    pending: VecDeque<A>,
    draining: bool,
}

/// Resets the queue when a drain ends, including by a listener panic.
struct DrainGuard<'a, A>(&'a RefCell<DispatchQueue<A>>);

impl<A> Drop for DrainGuard<'_, A> {
    fn drop(&mut self) {
        let mut queue = self.0.borrow_mut();
        queue.draining = false;
        queue.pending.clear();
    }
}

struct StoreCore<R: Reducer> {
    state: R::State,
    history: VecDeque<ActionRecord<R::Action>>,
    history_limit: usize,
    next_sequence: u64,
    next_listener_id: u64,
}

impl<R: Reducer> StoreCore<R> {
    fn record(&mut self, kind: &'static str, action: &R::Action) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        if self.history_limit == 0 {
            return;
        }
        while self.history.len() >= self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(ActionRecord {
            sequence,
            kind,
            action: action.clone(),
        });
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` with the default history limit.
    pub fn new(initial: R::State) -> Self {
        Self::with_history_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a store that remembers at most `history_limit` actions.
    ///
    /// A limit of zero disables the history.
    pub fn with_history_limit(initial: R::State, history_limit: usize) -> Self {
        Self {
            core: Arc::new(Mutex::new(StoreCore {
                state: initial,
                history: VecDeque::with_capacity(history_limit.min(DEFAULT_HISTORY_LIMIT)),
                history_limit,
                next_sequence: 0,
                next_listener_id: 0,
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
            queue: Arc::new(ReentrantMutex::new(RefCell::new(DispatchQueue {
                pending: VecDeque::new(),
                draining: false,
            }))),
        }
    }

    /// Get a snapshot of the current state.
    pub fn get_state(&self) -> R::State {
        self.core.lock().state.clone()
    }

    /// Apply `action` to the current state and notify listeners.
    ///
    /// Called from a listener, the action is queued and this returns before
    /// it is applied.
    pub fn dispatch(&self, action: R::Action) {
        let lock = self.queue.lock();
        {
            let mut queue = lock.borrow_mut();
            queue.pending.push_back(action);
            if queue.draining {
                tracing::trace!(pending = queue.pending.len(), "Nested dispatch queued");
                return;
            }
            queue.draining = true;
        }

        let _drain = DrainGuard(&*lock);
        loop {
            let next = lock.borrow_mut().pending.pop_front();
            match next {
                Some(action) => self.apply(action),
                None => break,
            }
        }
    }

    fn apply(&self, action: R::Action) {
        let kind = action.kind();
        let (next, changed) = {
            let mut core = self.core.lock();
            core.record(kind, &action);
            let current = std::mem::take(&mut core.state);
            let previous = current.clone();
            core.state = R::reduce(current, action);
            (core.state.clone(), core.state.changed_from(&previous))
        };

        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!(
            action = kind,
            changed,
            listeners = listeners.len(),
            "Action dispatched"
        );

        for listener in listeners {
            listener(&next);
        }
    }

    /// Register a listener called with every new state.
    ///
    /// The listener stays registered until [`Subscription::unsubscribe`]
    /// is called; dropping the handle does not unsubscribe.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = {
            let mut core = self.core.lock();
            let id = core.next_listener_id;
            core.next_listener_id += 1;
            id
        };
        let listener: Listener<R::State> = Arc::new(listener);
        self.listeners.lock().push((id, listener));
        tracing::trace!(listener = id, "Listener subscribed");

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Most recent dispatched actions, oldest first.
    pub fn history(&self) -> Vec<ActionRecord<R::Action>> {
        self.core.lock().history.iter().cloned().collect()
    }

    /// Total number of actions dispatched since creation.
    pub fn dispatch_count(&self) -> u64 {
        self.core.lock().next_sequence
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            listeners: Arc::clone(&self.listeners),
            queue: Arc::clone(&self.queue),
        }
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.lock();
        f.debug_struct("Store")
            .field("state", &core.state)
            .field("dispatched", &core.next_sequence)
            .finish()
    }
}

/// Handle returned by [`Store::subscribe`].
pub struct Subscription<S> {
    id: u64,
    listeners: Weak<ListenerList<S>>,
}

impl<S> Subscription<S> {
    /// Remove the listener from its store.
    ///
    /// Harmless if the store has already been dropped.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().retain(|(id, _)| *id != self.id);
            tracing::trace!(listener = self.id, "Listener unsubscribed");
        }
    }
}

impl<S> fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
