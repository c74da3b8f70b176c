use std::time::Duration;

/// Wait for `duration` on whatever timer the current target offers.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(all(target_arch = "wasm32", feature = "dioxus"))]
pub async fn sleep(duration: Duration) {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return null;",
        duration.as_millis()
    );
    let _ = dioxus::prelude::document::eval(&script).await;
}

#[cfg(all(target_arch = "wasm32", not(feature = "dioxus")))]
pub async fn sleep(_duration: Duration) {}
