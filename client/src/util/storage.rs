//! `localStorage`-backed session store.
//!
//! TRADE-OFFS
//! ==========
//! Native builds have no storage: loads report an empty slot and writes
//! succeed without effect, which keeps unit tests and tooling deterministic.

use hotel::StoreError;
use hotel::store::SessionStore;
#[cfg(feature = "csr")]
use hotel::store::TOKEN_KEY;

/// The browser's persisted token slot (`localStorage["token"]`).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(TOKEN_KEY).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(TOKEN_KEY, token).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(TOKEN_KEY).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{err:?}"))
}
