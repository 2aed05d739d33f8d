//! Three-state result of a remote query.

/// Observable state of one query: pending, failed, or ready with data.
///
/// The only transitions are `Pending -> Failed` and `Pending -> Ready`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Pending,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Returns the data if the load succeeded.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Settles a pending load with `result`.
    ///
    /// Returns false and leaves the state untouched if it was already settled.
    pub fn settle(&mut self, result: Result<T, String>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match result {
            Ok(data) => LoadState::Ready(data),
            Err(error) => LoadState::Failed(error),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_to_ready() {
        let mut state: LoadState<u32> = LoadState::default();
        assert!(state.is_pending());

        assert!(state.settle(Ok(3)));
        assert_eq!(state.ready(), Some(&3));
    }

    #[test]
    fn test_pending_to_failed() {
        let mut state: LoadState<u32> = LoadState::Pending;

        assert!(state.settle(Err("offline".to_string())));
        assert!(state.is_failed());
        assert_eq!(state.ready(), None);
    }

    #[test]
    fn test_settled_state_is_terminal() {
        let mut state: LoadState<u32> = LoadState::Pending;
        state.settle(Err("offline".to_string()));

        assert!(!state.settle(Ok(1)));
        assert_eq!(state, LoadState::Failed("offline".to_string()));
    }
}
