pub mod model;
pub mod rest;
pub mod store;

use store::HabitStore;

/// Shared application state passed to every REST handler.
///
/// Constructed once at startup (or per test) and handed to the router as
/// `Arc<AppContext>` — there is no global store.
#[derive(Default)]
pub struct AppContext {
    pub store: HabitStore,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }
}
