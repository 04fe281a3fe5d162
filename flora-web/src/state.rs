//! Application-wide state: the admin session and the in-memory admin stores.
use flora_core::{
    Account, AdminSession, AdminStore, Blog, Catalog, Category, DashboardStats, Product,
    SESSION_STORAGE_KEY,
};
use yew::prelude::*;

/// Session handed down through context. Login and logout are the only ways
/// to change it.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Option<AdminSession>,
    pub login: Callback<AdminSession>,
    pub logout: Callback<()>,
}

impl SessionContext {
    /// A context with a fixed session and no-op transitions.
    #[must_use]
    pub fn fixed(session: Option<AdminSession>) -> Self {
        Self {
            session,
            login: Callback::noop(),
            logout: Callback::noop(),
        }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.username.as_str())
    }
}

/// Own the session for the whole app, restoring it from storage once.
#[hook]
pub fn use_session_provider() -> SessionContext {
    let session = use_state(load_session);

    let login = {
        let session = session.clone();
        Callback::from(move |next: AdminSession| {
            save_session(&next);
            log::info!("admin {} logged in", next.username);
            session.set(Some(next));
        })
    };
    let logout = {
        let session = session.clone();
        Callback::from(move |()| {
            clear_session();
            session.set(None);
        })
    };

    SessionContext {
        session: (*session).clone(),
        login,
        logout,
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::fixed(None))
}

#[cfg(target_arch = "wasm32")]
fn load_session() -> Option<AdminSession> {
    let storage = crate::dom::local_storage().ok()?;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match AdminSession::from_json(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding stored admin session: {err}");
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
const fn load_session() -> Option<AdminSession> {
    None
}

#[cfg(target_arch = "wasm32")]
fn save_session(session: &AdminSession) {
    let stored = session
        .to_json()
        .map_err(|err| err.to_string())
        .and_then(|json| {
            crate::dom::local_storage()
                .and_then(|storage| storage.set_item(SESSION_STORAGE_KEY, &json))
                .map_err(|err| crate::dom::js_error_message(&err))
        });
    if let Err(message) = stored {
        crate::dom::console_error(&format!("could not persist admin session: {message}"));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_session(session: &AdminSession) {
    log::debug!("session for {} kept in memory ({SESSION_STORAGE_KEY})", session.username);
}

#[cfg(target_arch = "wasm32")]
fn clear_session() {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
const fn clear_session() {}

/// Records the admin pages edit. Changes live until the tab is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminData {
    pub products: AdminStore<Product>,
    pub blogs: AdminStore<Blog>,
    pub accounts: AdminStore<Account>,
    pub categories: Vec<Category>,
}

impl AdminData {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            products: AdminStore::new(catalog.products.clone()),
            blogs: AdminStore::new(catalog.blogs.clone()),
            accounts: AdminStore::new(catalog.accounts.clone()),
            categories: catalog.categories.clone(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_parts(
            self.products.list(),
            self.blogs.len(),
            self.categories.len(),
            self.accounts.len(),
        )
    }
}

impl Default for AdminData {
    fn default() -> Self {
        Self::from_catalog(Catalog::bundled())
    }
}

#[hook]
pub fn use_admin_data() -> UseStateHandle<AdminData> {
    use_state(AdminData::default)
}
