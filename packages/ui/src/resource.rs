//! # Async resource state
//!
//! Every page loads something from the API and renders one of three things
//! while it does: a spinner, an inline error, or the data. [`AsyncState`] is
//! that render state and [`use_async_resource`] is the hook that drives it.
//!
//! The hook wraps Dioxus' `use_resource`: signals read inside `fetch` become
//! the dependency key, so a detail page keyed on a route parameter refetches
//! when the parameter changes. A rerun drops the previous future, so a slow
//! response for an old key never overwrites the new one.
//!
//! The state lives in a plain `Signal`, which lets a page patch loaded data in
//! place (e.g. drop a cancelled booking) without refetching.

use std::future::Future;

use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AsyncState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> AsyncState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => AsyncState::Success(value),
            Err(message) => AsyncState::Failure(message),
        }
    }

    /// Idle counts as loading: nothing has been fetched yet.
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncState::Idle | AsyncState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            AsyncState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Run `fetch` on mount and whenever a signal it reads changes, exposing the
/// outcome as an [`AsyncState`]. Errors arrive already mapped to the text the
/// page should show.
pub fn use_async_resource<T, F, Fut>(mut fetch: F) -> Signal<AsyncState<T>>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let mut state = use_signal(|| AsyncState::Loading);

    let _ = use_resource(move || {
        let pending = fetch();
        async move {
            state.set(AsyncState::Loading);
            state.set(AsyncState::from_result(pending.await));
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_render_state() {
        let loading: AsyncState<u8> = AsyncState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());
        assert!(loading.error().is_none());

        let done = AsyncState::from_result(Ok::<_, String>(3u8));
        assert!(!done.is_loading());
        assert_eq!(done.data(), Some(&3));
        assert!(done.error().is_none());

        let failed = AsyncState::<u8>::from_result(Err("Error loading hotels".into()));
        assert!(!failed.is_loading());
        assert!(failed.data().is_none());
        assert_eq!(failed.error(), Some("Error loading hotels"));
    }

    #[test]
    fn test_idle_is_loading() {
        assert!(AsyncState::<()>::default().is_loading());
    }

    #[test]
    fn test_data_mut_patches_in_place() {
        let mut state = AsyncState::Success(vec![1, 2, 3]);
        if let Some(items) = state.data_mut() {
            items.retain(|i| *i != 2);
        }
        assert_eq!(state, AsyncState::Success(vec![1, 3]));

        let mut failed: AsyncState<Vec<i32>> = AsyncState::Failure("x".into());
        assert!(failed.data_mut().is_none());
    }
}
