use std::collections::VecDeque;
use std::fmt;

/// Default maximum number of undo levels to keep
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// What can be dispatched through an [`UndoableReducer`]
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction<A> {
    Undo,
    Redo,
    /// Drops every past and future entry, keeping the present state
    ClearHistory,
    /// Any action understood by the wrapped reducer
    Apply(A),
}

/// The history triple: past states, the present state and undone states.
///
/// `past` is ordered oldest first, `future` nearest first.
#[derive(Debug, Clone, PartialEq)]
pub struct History<S> {
    past: VecDeque<S>,
    present: S,
    future: VecDeque<S>,
    /// Group of the action that produced the newest past entry
    group: Option<u64>,
}

impl<S: Default> Default for History<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> History<S> {
    /// Creates a history with no past and no future
    pub fn new(present: S) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
            group: None,
        }
    }

    pub fn present(&self) -> &S {
        &self.present
    }

    pub fn past(&self) -> impl Iterator<Item = &S> {
        self.past.iter()
    }

    pub fn future(&self) -> impl Iterator<Item = &S> {
        self.future.iter()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Returns true if there are states that can be restored by undo
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if there are states that can be restored by redo
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Replaces the present state and forgets all history
    pub fn reset(&mut self, present: S) {
        self.past.clear();
        self.future.clear();
        self.present = present;
        self.group = None;
    }

    fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        self.group = None;
        true
    }

    fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        self.group = None;
        true
    }

    fn clear(&mut self) -> bool {
        let had_entries = !self.past.is_empty() || !self.future.is_empty();
        self.past.clear();
        self.future.clear();
        self.group = None;
        had_entries
    }
}

type ReduceFn<S, A> = Box<dyn Fn(&S, &A) -> Option<S>>;
type FilterFn<A> = Box<dyn Fn(&A) -> bool>;
type GroupFn<A> = Box<dyn Fn(&A) -> Option<u64>>;

/// Wraps a plain reducer with undo/redo.
///
/// The inner reducer returns `None` when an action leaves the state
/// untouched; such results never touch the history. Actions rejected by the
/// filter update only the present. Consecutive tracked actions that report
/// the same group are merged into one history entry.
pub struct UndoableReducer<S, A> {
    reduce: ReduceFn<S, A>,
    filter: Option<FilterFn<A>>,
    group_by: Option<GroupFn<A>>,
    limit: Option<usize>,
}

impl<S, A> fmt::Debug for UndoableReducer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoableReducer")
            .field("filter", &self.filter.is_some())
            .field("group_by", &self.group_by.is_some())
            .field("limit", &self.limit)
            .finish()
    }
}

impl<S: Clone + PartialEq, A> UndoableReducer<S, A> {
    pub fn new(reduce: impl Fn(&S, &A) -> Option<S> + 'static) -> Self {
        Self {
            reduce: Box::new(reduce),
            filter: None,
            group_by: None,
            limit: None,
        }
    }

    /// Caps the number of past entries; the oldest are dropped first.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only actions for which `filter` returns true create history entries.
    pub fn with_filter(mut self, filter: impl Fn(&A) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Merges consecutive tracked actions that share a group key.
    pub fn with_group_by(mut self, group_by: impl Fn(&A) -> Option<u64> + 'static) -> Self {
        self.group_by = Some(Box::new(group_by));
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Dispatches one action against `history`.
    ///
    /// Returns `true` if the present state or the history changed.
    pub fn dispatch(&self, history: &mut History<S>, action: &HistoryAction<A>) -> bool {
        match action {
            HistoryAction::Undo => history.undo(),
            HistoryAction::Redo => history.redo(),
            HistoryAction::ClearHistory => history.clear(),
            HistoryAction::Apply(inner) => self.apply(history, inner),
        }
    }

    fn apply(&self, history: &mut History<S>, action: &A) -> bool {
        let Some(next) = (self.reduce)(&history.present, action) else {
            return false;
        };

        let tracked = self.filter.as_ref().is_none_or(|filter| filter(action));
        if !tracked {
            history.present = next;
            return true;
        }

        let group = self.group_by.as_ref().and_then(|group_by| group_by(action));
        if group.is_some() && group == history.group {
            history.present = next;
            history.future.clear();
            // A gesture that returned to where it started leaves no entry
            if history.past.back() == Some(&history.present) {
                history.past.pop_back();
                history.group = None;
            }
            return true;
        }

        let previous = std::mem::replace(&mut history.present, next);
        history.past.push_back(previous);
        if let Some(limit) = self.limit {
            while history.past.len() > limit {
                history.past.pop_front();
            }
        }
        history.future.clear();
        history.group = group;
        true
    }
}
