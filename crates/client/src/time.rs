//! Cross-platform timer and task helpers.
//!
//! Web builds ride the browser event loop (`gloo-timers` +
//! `wasm-bindgen-futures`); native builds use tokio.

/// Sleep for the given number of milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(tokio::time::Duration::from_millis(ms as u64)).await;
}

/// Spawn a detached background task.
#[cfg(target_arch = "wasm32")]
pub fn spawn_task<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_task<F>(fut: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(fut);
}
