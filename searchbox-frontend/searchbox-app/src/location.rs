use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;

use crate::query_string::{query_param, replace_query_param};

/// The parts of the page the controller touches besides the panels.
pub trait PageEnv: Send + Sync {
    /// `q` parameter of the current address, if any.
    fn current_query(&self) -> Option<String>;

    /// Rewrite the `q` parameter of the address bar without reloading.
    fn replace_query(&self, query: &str);

    /// Full page navigation.
    fn navigate(&self, url: &str);

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

pub struct BrowserEnv;

impl PageEnv for BrowserEnv {
    fn current_query(&self) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        query_param(&search, "q").filter(|q| !q.trim().is_empty())
    }

    fn replace_query(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let (Ok(pathname), Ok(search), Ok(hash)) =
            (location.pathname(), location.search(), location.hash())
        else {
            return;
        };
        let url = format!("{pathname}{}{hash}", replace_query_param(&search, "q", query));
        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            log::error!("Unable to update the address bar {e:?}");
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("Unable to navigate to {url} {e:?}");
        }
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}
