use compass::config;
use compass::gui::app::AppModel;
use compass::sys::runtime;
use compass_core::Navigator;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_default();
    let navigator = Navigator::new(config.items, config.active, config.orientation)?;

    let services = runtime::start_background_services()?;

    let app = RelmApp::new("org.compass.nav");

    app.run::<AppModel>((navigator, services));
    Ok(())
}
