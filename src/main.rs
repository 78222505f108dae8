mod api;
mod app;
mod config;
mod models;
#[cfg(test)]
mod test_support;
mod tui;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::AppConfig::from_env()?;

    let (msg_tx, msg_rx) = tokio::sync::mpsc::unbounded_channel();

    let client = api::musics::MusicsClient::new(&config)?;
    let controller = tui::AppController::new(client, msg_tx);

    let app = tui::App::new(controller, msg_rx);
    tui::run(app).await
}
