use logistica_core::pagination::Page;

use crate::error::ClientError;

/// What a page section shows while its data loads.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Loaded fine but nothing to show.
    Empty,
    /// User-facing error text.
    Failed(String),
}

/// Collections that can be empty, so a load can resolve to [`LoadState::Empty`].
pub trait Emptiness {
    fn is_empty_result(&self) -> bool;
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Page<T> {
    fn is_empty_result(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> LoadState<T> {
    /// A single value: `Ready` or `Failed`.
    pub fn from_value(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => Self::failed(&e),
        }
    }

    fn failed(err: &ClientError) -> Self {
        tracing::warn!(error = %err, "Load failed");
        LoadState::Failed(err.user_message())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Emptiness> LoadState<T> {
    /// A collection: `Empty` when there are no rows.
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(rows) if rows.is_empty_result() => LoadState::Empty,
            Ok(rows) => LoadState::Ready(rows),
            Err(e) => Self::failed(&e),
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_empty_state() {
        assert_eq!(LoadState::<Vec<u8>>::from_result(Ok(vec![])), LoadState::Empty);
        assert_eq!(LoadState::from_result(Ok(vec![1u8])), LoadState::Ready(vec![1]));
    }

    #[test]
    fn errors_use_user_facing_text() {
        let state: LoadState<Vec<u8>> =
            LoadState::from_result(Err(ClientError::Forbidden(
                "Access restricted to modules: monitoreo, administracion".into(),
            )));
        assert_eq!(
            state.error(),
            Some("Access restricted to modules: monitoreo, administracion")
        );

        let state: LoadState<u8> = LoadState::from_value(Err(ClientError::Decode("bad".into())));
        assert_eq!(state.error(), Some("Unexpected response from the server"));
    }

    #[test]
    fn defaults_to_loading() {
        let state: LoadState<u8> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
    }
}
