use crate::core::GameState;

/// Stack of pre-move snapshots backing single-step rollback. Unbounded for
/// the lifetime of a level run; cleared when a level is entered or restarted.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    states: Vec<GameState>,
}

impl UndoHistory {
    pub fn new() -> UndoHistory {
        UndoHistory { states: Vec::new() }
    }

    pub fn record(&mut self, state: GameState) {
        self.states.push(state);
    }

    pub fn pop(&mut self) -> Option<GameState> {
        self.states.pop()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{GameState, Status};

    fn state_with_status(status: Status) -> GameState {
        GameState {
            actors: Vec::new(),
            status,
        }
    }

    #[test]
    fn test_pop_returns_most_recent_first() {
        let mut history = UndoHistory::new();
        history.record(state_with_status(Status::Playing));
        history.record(state_with_status(Status::Finished));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.status), Some(Status::Finished));
        assert_eq!(history.pop().map(|s| s.status), Some(Status::Playing));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_clear_empties_the_stack() {
        let mut history = UndoHistory::new();
        history.record(state_with_status(Status::Playing));
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
