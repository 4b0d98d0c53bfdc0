//! `setTimeout`-backed timer adapter.

use std::time::Duration;

use platform_host::{Scheduler, SchedulerFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser scheduler that resolves sleeps through `window.setTimeout`.
///
/// Outside the browser (or without a `window`) sleeps complete immediately.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn sleep(&self, duration: Duration) -> SchedulerFuture {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsValue;
            use wasm_bindgen_futures::JsFuture;

            let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
            let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                let scheduled = web_sys::window()
                    .map(|window| {
                        window
                            .set_timeout_with_callback_and_timeout_and_arguments_0(
                                &resolve, millis,
                            )
                            .is_ok()
                    })
                    .unwrap_or(false);
                if !scheduled {
                    let _ = resolve.call0(&JsValue::UNDEFINED);
                }
            });
            Box::pin(async move {
                let _ = JsFuture::from(promise).await;
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = duration;
            Box::pin(async {})
        }
    }
}
