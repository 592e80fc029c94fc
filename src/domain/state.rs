// src/domain/state.rs

/// Render state of a page that loads remote data.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}
