use mostra_core::WorkStore;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub store: WorkStore,
}
