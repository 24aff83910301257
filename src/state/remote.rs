/// View state shared by every screen: the fetched data, a loading flag, and
/// a fixed error message. Screens never branch on the fields directly; they
/// go through `view()`, which yields exactly one of the three render states
/// in priority order (loading beats error beats data).
#[derive(Clone, PartialEq, Debug)]
pub struct RemoteState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

/// What the presenter renders. Borrowing keeps presenters from mutating the
/// state they display.
#[derive(PartialEq, Debug)]
pub enum RemoteView<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a T),
}

impl<T> Default for RemoteState<T> {
    /// Screens mount straight into the loading state.
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> RemoteState<T> {
    /// A fetch is in flight. The loading indicator suppresses both the error
    /// and the data view for the duration.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Fetch settled with data: replaces prior data and clears any error.
    pub fn resolve(&mut self, value: T) {
        self.data = Some(value);
        self.error = None;
        self.loading = false;
    }

    /// Fetch settled with a failure. Previous data is preserved (form
    /// selectors keep working) but the error wins the render.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn view(&self) -> RemoteView<'_, T> {
        if self.loading {
            return RemoteView::Loading;
        }
        if let Some(message) = &self.error {
            return RemoteView::Failed(message);
        }
        match &self.data {
            Some(value) => RemoteView::Ready(value),
            // Settled with neither data nor error cannot happen through the
            // accessors above; render it as still loading.
            None => RemoteView::Loading,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_loading() {
        let state = RemoteState::<Vec<u32>>::default();
        assert_eq!(state.view(), RemoteView::Loading);
    }

    #[test]
    fn loading_suppresses_error_and_data() {
        let mut state = RemoteState::default();
        state.resolve(vec![1, 2]);
        state.fail("Failed to load products");
        state.begin();
        assert_eq!(state.view(), RemoteView::Loading);
    }

    #[test]
    fn error_wins_over_stale_data() {
        let mut state = RemoteState::default();
        state.resolve(vec![1, 2]);
        state.fail("Failed to load products");

        // The error view is shown; no stale "no data" alongside it
        assert_eq!(state.view(), RemoteView::Failed("Failed to load products"));
        // ...but the previous data survives for anything that needs it
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn failed_empty_screen_shows_error_not_no_data() {
        let mut state = RemoteState::<Vec<u32>>::default();
        state.fail("Failed to load purchases data");
        assert_eq!(
            state.view(),
            RemoteView::Failed("Failed to load purchases data")
        );
    }

    #[test]
    fn resolve_clears_a_previous_error() {
        let mut state = RemoteState::default();
        state.fail("Failed to load sales data");
        state.begin();
        state.resolve(vec![3]);
        assert_eq!(state.view(), RemoteView::Ready(&vec![3]));
    }
}
