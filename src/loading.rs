/// Loading, data and error state for an async action.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingState<T> {
    pub is_loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    initial_loading: bool,
    initial_data: Option<T>,
}

impl<T: Clone> LoadingState<T> {
    pub fn new(initial_data: Option<T>, initial_loading: bool) -> Self {
        Self {
            is_loading: initial_loading,
            data: initial_data.clone(),
            error: None,
            initial_loading,
            initial_data,
        }
    }

    /// Starting a load clears any previous error.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        if loading {
            self.error = None;
        }
    }

    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
        self.is_loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.is_loading = false;
    }

    pub fn reset(&mut self) {
        self.is_loading = self.initial_loading;
        self.data = self.initial_data.clone();
        self.error = None;
    }
}

impl<T: Clone> Default for LoadingState<T> {
    fn default() -> Self {
        Self::new(None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state = LoadingState::<String>::default();
        assert!(!state.is_loading);

        state.set_loading(true);
        assert!(state.is_loading);

        state.set_data("done".to_string());
        assert!(!state.is_loading);
        assert_eq!(state.data.as_deref(), Some("done"));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_cleared_on_next_load() {
        let mut state = LoadingState::<u32>::default();
        state.set_loading(true);
        state.set_error("boom");
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.set_loading(true);
        assert!(state.error.is_none());

        // Stopping doesn't clear anything
        state.set_error("again");
        state.set_loading(false);
        assert_eq!(state.error.as_deref(), Some("again"));
    }

    #[test]
    fn test_reset() {
        let mut state = LoadingState::new(Some(1), true);
        state.set_data(5);
        state.set_error("x");
        state.reset();
        assert_eq!(state, LoadingState::new(Some(1), true));
    }
}
