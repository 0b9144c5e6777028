use dioxus::logger::tracing::Level;
use portfolio_sidebar::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    tracing::info!("Starting portfolio sidebar");

    dioxus::launch(App);
}
