use std::collections::VecDeque;

use chrono::Local;
use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::models::Music;

use super::controller::AppController;

const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(usize),
    Failed(String),
}

pub struct App {
    pub controller: AppController,
    pub msg_rx: UnboundedReceiver<AppMessage>,
    pub musics: Vec<Music>,
    pub music_state: ListState,
    pub load_state: LoadState,
    pub logs: VecDeque<String>,
    pub should_quit: bool,
    mounted: bool,
    mount_id: u64,
    fetch_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(controller: AppController, msg_rx: UnboundedReceiver<AppMessage>) -> Self {
        Self {
            controller,
            msg_rx,
            musics: Vec::new(),
            music_state: ListState::default(),
            load_state: LoadState::Loading,
            logs: VecDeque::with_capacity(LOG_CAPACITY),
            should_quit: false,
            mounted: false,
            mount_id: 0,
            fetch_task: None,
        }
    }

    /// Activates the list and starts the one and only fetch for this mount.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }

        self.mounted = true;
        self.mount_id += 1;
        let endpoint = self.controller.endpoint().to_string();
        self.push_log(format!("Loading musics from {endpoint}"));
        self.fetch_task = Some(self.controller.fetch_musics(self.mount_id));
    }

    /// Cancels an in-flight fetch and discards the loaded list.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        self.mounted = false;
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        self.musics.clear();
        self.music_state.select(None);
        self.load_state = LoadState::Loading;
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[cfg(test)]
    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        let origin = match &message {
            AppMessage::MusicsLoaded { mount, .. } | AppMessage::FetchFailed { mount, .. } => *mount,
        };
        if !self.mounted || origin != self.mount_id {
            return;
        }

        match message {
            AppMessage::MusicsLoaded { musics, .. } => {
                self.fetch_task = None;
                self.musics = musics;
                self.music_state.select(if self.musics.is_empty() {
                    None
                } else {
                    Some(0)
                });
                self.load_state = LoadState::Loaded(self.musics.len());
                self.push_log(format!("Loaded {} musics", self.musics.len()));
            }
            AppMessage::FetchFailed { reason, .. } => {
                self.fetch_task = None;
                self.load_state = LoadState::Failed(reason.clone());
                self.push_log(reason);
            }
        }
    }

    pub fn push_log<S: Into<String>>(&mut self, message: S) {
        if self.logs.len() == LOG_CAPACITY {
            self.logs.pop_front();
        }
        let stamp = Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("[{stamp}] {}", message.into()));
    }

    pub fn selected_music(&self) -> Option<&Music> {
        self.music_state
            .selected()
            .and_then(|idx| self.musics.get(idx))
    }

    pub fn move_music_selection(&mut self, delta: isize) {
        let len = self.musics.len();
        update_list_state(&mut self.music_state, len, delta);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn update_list_state(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }

    let current = state.selected().unwrap_or(0);
    let step = delta.unsigned_abs();
    let new_index = if delta < 0 {
        current.saturating_sub(step)
    } else {
        (current + step).min(len - 1)
    };
    state.select(Some(new_index));
}
