use std::sync::Arc;

use crate::auth::AuthSession;
use crate::config::{BypassCredentials, StoreConfig};
use crate::content::ContentCache;
use crate::error::Result;
use crate::modals::Modals;
use crate::nav::Navigator;
use crate::remote::{HttpStore, OfflineStore, RemoteStore};

/// Root composition: the four state holders over one shared store handle.
///
/// The holders know nothing of each other; the embedding view layer reads
/// state from all four and routes callbacks back down.
pub struct Site {
    pub content: ContentCache,
    pub nav: Navigator,
    pub modals: Modals,
    pub auth: AuthSession,
}

impl Site {
    #[must_use]
    pub fn new(store: Arc<dyn RemoteStore>, bypass: Option<BypassCredentials>) -> Self {
        Self {
            content: ContentCache::new(store.clone()),
            nav: Navigator::new(),
            modals: Modals::new(),
            auth: AuthSession::new(store, bypass),
        }
    }

    /// Site over an HTTP store. Call [`Site::start`] afterwards to populate
    /// content and adopt any existing session.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let store = Arc::new(HttpStore::new(config)?);
        Ok(Self::new(store, config.bypass.clone()))
    }

    /// Site with no backend at all: every collection serves bundled content
    /// and nothing persists. The admin area stays reachable only through a
    /// configured bypass login.
    #[must_use]
    pub fn offline(bypass: Option<BypassCredentials>) -> Self {
        Self::new(Arc::new(OfflineStore), bypass)
    }

    pub async fn start(&mut self) {
        self.auth.init().await;
        self.content.load().await;
    }
}
