use std::sync::Arc;

use cookbook_gate::EntryGate;
use cookbook_resolver::{Resolver, ResolverConfig};
use cookbook_store::{EntryStore, InMemoryEntryStore};

/// Shared state behind every handler.
///
/// The store starts empty and lives as long as the server. Its own lock
/// serializes writers against readers; the gate and resolver hold no state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    pub gate: Arc<EntryGate>,
    pub resolver_config: ResolverConfig,
}

impl AppState {
    pub fn new(resolver_config: ResolverConfig) -> Self {
        Self::with_store(Arc::new(InMemoryEntryStore::new()), resolver_config)
    }

    pub fn with_store(store: Arc<dyn EntryStore>, resolver_config: ResolverConfig) -> Self {
        Self {
            store,
            gate: Arc::new(EntryGate::with_default_stages()),
            resolver_config,
        }
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.store.as_ref(), self.resolver_config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
