use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, Document, FileReader, HtmlAnchorElement, ProgressEvent, Url, Window,
};

use roughboard_shared::{Storage, StorageError, EXPORT_MIME_TYPE};

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}

/// `window.localStorage`. Private browsing modes may deny access, in which
/// case every call reports the storage as unavailable.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let inner = match window.local_storage() {
            Ok(storage) => storage,
            Err(error) => {
                log::warn!("localStorage is not accessible: {}", describe(&error));
                None
            }
        };
        Self { inner }
    }

    fn inner(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner()?
            .get_item(key)
            .map_err(|error| StorageError::Unavailable(describe(&error)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner()?
            .set_item(key, value)
            .map_err(|error| StorageError::Write {
                key: key.to_string(),
                reason: describe(&error),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner()?
            .remove_item(key)
            .map_err(|error| StorageError::Write {
                key: key.to_string(),
                reason: describe(&error),
            })
    }
}

/// Offers `json` to the user as a file download.
pub fn download_json(document: &Document, file_name: &str, json: &str) -> Result<(), JsValue> {
    let parts = Array::of1(&JsValue::from_str(json));
    let options = BlobPropertyBag::new();
    options.set_type(EXPORT_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

pub fn read_import_text(event: &ProgressEvent) -> Option<String> {
    let reader: FileReader = event.target()?.dyn_into().ok()?;
    reader.result().ok()?.as_string()
}
