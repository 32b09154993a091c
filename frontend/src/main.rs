use d56_landing::{config, App};
use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Logger may already be installed
    console_log::init_with_level(config::log_level()).ok();

    info!("Starting d56 landing page");
    yew::Renderer::<App>::new().render();
}
