//! Load lifecycle for a fetched collection and its list rendering.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

/// Lifecycle of one section's data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// The load failed; the message is for logs, not for display.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Idle => LoadState::Idle,
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Fixed placeholder texts for one list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListTexts {
    pub loading: &'static str,
    pub empty: &'static str,
    pub error: &'static str,
}

/// What a list region shows: either a single placeholder or the items.
#[derive(Clone, Debug, PartialEq)]
pub enum ListBody<T> {
    Placeholder(&'static str),
    Items(Vec<T>),
}

impl<T> ListBody<T> {
    /// Select the body for a loaded slice of items.
    pub fn from_items(items: Vec<T>, empty: &'static str) -> Self {
        if items.is_empty() { Self::Placeholder(empty) } else { Self::Items(items) }
    }

    /// Select the body for a whole load lifecycle.
    pub fn from_load(state: &LoadState<Vec<T>>, texts: ListTexts) -> Self
    where
        T: Clone,
    {
        match state {
            LoadState::Idle | LoadState::Loading => Self::Placeholder(texts.loading),
            LoadState::Failed(_) => Self::Placeholder(texts.error),
            LoadState::Loaded(items) => Self::from_items(items.clone(), texts.empty),
        }
    }
}
