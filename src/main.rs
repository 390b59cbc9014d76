use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    gapfinder::client::gui::app::GapApp::run(iced::Settings::default())
}
