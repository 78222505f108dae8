use crate::models::Music;

/// Results reported back to the UI loop. `mount` identifies the mount that
/// requested the fetch so results from an earlier mount can be dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    MusicsLoaded { mount: u64, musics: Vec<Music> },
    FetchFailed { mount: u64, reason: String },
}
