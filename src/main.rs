#[cfg(not(target_arch = "wasm32"))]
fn init_environment() {
    // A local .env is only a convenience for desktop development.
    if let Err(err) = dotenvy::dotenv() {
        eprintln!("no .env loaded: {err}");
    }

    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_environment() {}

fn main() {
    init_environment();
    dioxus::launch(chatbot_web::ui::App);
}
