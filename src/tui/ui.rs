use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::models::Music;

use super::state::{App, LoadState};

pub const HEADING: &str = "🎵 Music Streaming App";
pub const LIST_TITLE: &str = "Lista de Músicas";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_heading(frame, chunks[0]);
    draw_music_list(frame, app, chunks[1]);
    draw_details(frame, app, chunks[2]);
    draw_logs(frame, app, chunks[3]);
    draw_footer(frame, chunks[4]);
}

fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Line::from(HEADING))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(heading, area);
}

fn draw_music_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .musics
        .iter()
        .map(|music| ListItem::new(music_line(music)))
        .collect();

    let title = match app.load_state {
        LoadState::Loading => format!("{LIST_TITLE} (loading…)"),
        LoadState::Loaded(_) | LoadState::Failed(_) => LIST_TITLE.to_string(),
    };

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.music_state);
}

fn draw_details(frame: &mut Frame, app: &App, area: Rect) {
    let text = app
        .selected_music()
        .map(Music::details_label)
        .unwrap_or_default();
    let details = Paragraph::new(text).style(dim_style());
    frame.render_widget(details, area);
}

fn draw_logs(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .logs
        .iter()
        .rev()
        .take(100)
        .map(|entry| Line::from(entry.clone()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Activity").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("↑/↓: move • q: quit").style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, area);
}

pub fn music_line(music: &Music) -> Line<'static> {
    Line::from(music.display_line())
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::api::musics::MusicsClient;
    use crate::app::AppMessage;
    use crate::config::AppConfig;
    use crate::tui::AppController;

    fn app() -> App {
        let config = AppConfig::default()
            .with_musics_url("http://127.0.0.1:1/musics")
            .unwrap();
        let client = MusicsClient::new(&config).unwrap();
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        App::new(AppController::new(client, tx), rx)
    }

    fn render(app: &mut App) -> Vec<String> {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn rows_containing(rows: &[String], needle: &str) -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| row.contains(needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    #[test]
    fn line_reads_title_artist_album() {
        let music = Music::new(1, "Imagine", "John Lennon", "Imagine");
        let text: String = music_line(&music)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "Imagine - John Lennon (Imagine)");
    }

    #[tokio::test]
    async fn heading_renders_before_load() {
        let mut app = app();
        let rows = render(&mut app);

        assert!(rows.iter().any(|row| row.contains("Music Streaming App")));
        assert!(rows.iter().any(|row| row.contains("Lista de Músicas (loading…)")));
        assert!(rows_containing(&rows, " - ").is_empty());
    }

    #[tokio::test]
    async fn renders_one_line_per_record_in_order() {
        let mut app = app();
        app.mount();
        app.handle_message(AppMessage::MusicsLoaded {
            mount: app.mount_id(),
            musics: vec![
                Music::new(1, "Imagine", "John Lennon", "Imagine"),
                Music::new(2, "Yesterday", "The Beatles", "Help!"),
                Music::new(3, "Wave", "Tom Jobim", "Wave"),
            ],
        });
        let rows = render(&mut app);

        let first = rows_containing(&rows, "Imagine - John Lennon (Imagine)");
        let second = rows_containing(&rows, "Yesterday - The Beatles (Help!)");
        let third = rows_containing(&rows, "Wave - Tom Jobim (Wave)");
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(third.len(), 1);
        assert!(first[0] < second[0] && second[0] < third[0]);
        assert!(rows.iter().any(|row| row.contains(LIST_TITLE)));
    }

    #[tokio::test]
    async fn empty_load_renders_no_items() {
        let mut app = app();
        app.mount();
        app.handle_message(AppMessage::MusicsLoaded {
            mount: app.mount_id(),
            musics: Vec::new(),
        });
        let rows = render(&mut app);

        assert!(rows.iter().any(|row| row.contains(LIST_TITLE)));
        assert!(!rows.iter().any(|row| row.contains("loading")));
        assert!(!rows.iter().any(|row| row.contains("▶")));
    }
}
