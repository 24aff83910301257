use dukani::components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🏪 Dukani starting...");

    yew::Renderer::<App>::new().render();
}
