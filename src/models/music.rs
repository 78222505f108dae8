use serde::Deserialize;

/// A single track as served by the musics endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub play_count: Option<i64>,
}

impl Music {
    #[cfg(test)]
    pub fn new(id: i64, title: &str, artist: &str, album: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: Some(album.to_string()),
            url: None,
            duration_seconds: None,
            genre: None,
            release_year: None,
            play_count: None,
        }
    }

    pub fn display_line(&self) -> String {
        format!(
            "{} - {} ({})",
            self.title,
            self.artist,
            self.album.as_deref().unwrap_or_default()
        )
    }

    pub fn details_label(&self) -> String {
        let mut parts = Vec::new();

        if let Some(genre) = self.genre.as_deref().filter(|g| !g.trim().is_empty()) {
            parts.push(genre.to_string());
        }
        if let Some(year) = self.release_year {
            parts.push(year.to_string());
        }
        // Upstream does not constrain these, so out-of-range values are skipped.
        if let Some(seconds) = self.duration_seconds.filter(|s| *s > 0) {
            parts.push(format!("{:02}:{:02}", seconds / 60, seconds % 60));
        }
        if let Some(plays) = self.play_count.filter(|p| *p >= 0) {
            parts.push(if plays == 1 {
                "1 play".to_string()
            } else {
                format!("{plays} plays")
            });
        }

        if parts.is_empty() {
            "No extra details".to_string()
        } else {
            parts.join(" • ")
        }
    }
}
