use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{self, JoinHandle};

use crate::api::musics::MusicsClient;
use crate::app::AppMessage;

#[derive(Clone)]
pub struct AppController {
    client: MusicsClient,
    message_tx: UnboundedSender<AppMessage>,
}

impl AppController {
    pub fn new(client: MusicsClient, message_tx: UnboundedSender<AppMessage>) -> Self {
        Self { client, message_tx }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Spawns a single GET of the track list and reports the outcome on the message channel.
    pub fn fetch_musics(&self, mount: u64) -> JoinHandle<()> {
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        task::spawn(async move {
            match client.fetch_musics().await {
                Ok(musics) => {
                    let _ = tx.send(AppMessage::MusicsLoaded { mount, musics });
                }
                Err(err) => {
                    let reason = format!("Failed to load musics from {}: {err}", client.endpoint());
                    let _ = tx.send(AppMessage::FetchFailed { mount, reason });
                }
            }
        })
    }
}
