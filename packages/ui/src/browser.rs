//! Thin wrappers over the browser APIs pages need: timers, navigation outside the
//! router, and file downloads. Native builds log instead.

use std::time::Duration;

use api::export::{ExportFile, CSV_MIME};

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Leave the app for an external page (OAuth consent).
pub fn redirect_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Would navigate to {url}");
}

pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::error!("Failed to open {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Would open {url}");
}

/// Hand an export to the browser as a file download.
pub fn download(file: &ExportFile) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = download_blob(file) {
            tracing::error!("Download of {} failed: {e:?}", file.file_name);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Would download {} ({} rows, {CSV_MIME})", file.file_name, file.rows);
}

#[cfg(target_arch = "wasm32")]
fn download_blob(file: &ExportFile) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&file.file_name);
    link.style().set_property("visibility", "hidden")?;

    let body = document.body().ok_or("no body")?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    web_sys::Url::revoke_object_url(&url)
}
