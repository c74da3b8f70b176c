// Settings missing from the environment fall back to the bundled
// assets/config.env (see `AppConfig::load`).
#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A local .env is only used during desktop development
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    init_tracing();
    load_dotenv();
    tracing::info!("starting WukirTech");
    dioxus::launch(wukirtech::ui::App);
}
