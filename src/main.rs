extern crate libsqlite3_sys;

use file_explorer::config::app_config::AppConfig;
use file_explorer::ui::app::FileExplorerApp;
use file_explorer::ui::app_factory::FileExplorerAppService;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let config = AppConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(home = %config.home.display(), "Starting file explorer");

    iced::application(
        move || FileExplorerApp::new(FileExplorerAppService::create(&config)),
        FileExplorerApp::update,
        FileExplorerApp::view,
    )
    .title(FileExplorerApp::title)
    .subscription(FileExplorerApp::subscription)
    .theme(FileExplorerApp::theme)
    .run()
}
