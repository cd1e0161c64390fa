use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nexus_core::{
    open_panel, ChatMessage, EmbeddedPage, Notification, PageEndpoint, PanelController,
    Settings, SettingsCredentials,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::keys::{action_for_key, PanelAction};
use crate::theme::Theme;

/// How long a notification stays in the status bar.
const NOTICE_TTL: Duration = Duration::from_secs(6);

/// Wire up a controller for a fresh panel and return the page's side of it.
fn start_controller(
    settings: &Settings,
    credentials: SettingsCredentials,
) -> (PageEndpoint, mpsc::UnboundedReceiver<Notification>, JoinHandle<()>) {
    let (controller_end, page_end) = open_panel();
    let (notice_tx, notice_rx) = mpsc::unbounded_channel();

    let controller = PanelController::new(
        controller_end.panel,
        settings.build_client(),
        credentials,
        notice_tx,
    );
    let handle = tokio::spawn(controller.run(controller_end.inbox));

    (page_end, notice_rx, handle)
}

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(
    settings: &Settings,
    credentials: SettingsCredentials,
    prompt: &str,
) -> Result<()> {
    let reply = ask(settings, credentials, prompt).await?;
    println!("{reply}");
    Ok(())
}

/// Submit `prompt` through a fresh page and controller and wait for the
/// outcome: the reply text, or the notification message as an error.
pub async fn ask(
    settings: &Settings,
    credentials: SettingsCredentials,
    prompt: &str,
) -> Result<String> {
    let (mut page_end, mut notices, _controller) = start_controller(settings, credentials);
    let mut page = EmbeddedPage::new(page_end.outbox.clone());

    page.set_input(prompt);
    if !page.submit() {
        anyhow::bail!("Nothing to send: the prompt is empty");
    }

    tokio::select! {
        Some(message) = page_end.inbox.recv() => {
            page.on_controller_message(message);
            match page.transcript().last() {
                Some(reply) if !reply.is_user() => Ok(reply.text.clone()),
                _ => anyhow::bail!("No reply was displayed"),
            }
        }
        Some(notice) = notices.recv() => {
            anyhow::bail!(notice.message)
        }
        else => anyhow::bail!("Controller stopped without replying"),
    }
}

// ── Interactive panel ───────────────────────────────────────────────────

struct PanelState {
    page: EmbeddedPage,
    theme: Theme,
    title: String,
    model: String,
    notice: Option<(Notification, Instant)>,
    scroll_offset: usize,
    should_quit: bool,
}

impl PanelState {
    fn new(page: EmbeddedPage, settings: &Settings, theme: Theme) -> Self {
        Self {
            page,
            theme,
            title: settings.panel.title.clone(),
            model: settings.chat.model.clone(),
            notice: None,
            scroll_offset: usize::MAX,
            should_quit: false,
        }
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX;
    }

    fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::Submit => {
                if self.page.submit() {
                    self.scroll_to_bottom();
                }
            }
            PanelAction::Insert(c) => self.page.insert_char(c),
            PanelAction::Backspace => self.page.backspace(),
            PanelAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(3);
            }
            PanelAction::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(3);
            }
            PanelAction::Close => self.should_quit = true,
        }
    }

    fn expire_notice(&mut self) {
        if let Some((_, shown_at)) = &self.notice {
            if shown_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }
}

/// Bring the chat panel into view and run it until the user closes it.
pub async fn run_panel(
    settings: Settings,
    credentials: SettingsCredentials,
    theme_name: &str,
) -> Result<()> {
    let (page_end, mut notices, _controller) = start_controller(&settings, credentials);
    let PageEndpoint { outbox, mut inbox } = page_end;
    let mut state = PanelState::new(EmbeddedPage::new(outbox), &settings, Theme::by_name(theme_name));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| draw_ui(f, &mut state)) {
            break Err(e.into());
        }

        while let Ok(message) = inbox.try_recv() {
            state.page.on_controller_message(message);
            state.scroll_to_bottom();
        }
        while let Ok(notice) = notices.try_recv() {
            state.notice = Some((notice, Instant::now()));
        }
        state.expire_notice();

        match event::poll(Duration::from_millis(33)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(action) = action_for_key(key) {
                        state.apply(action);
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }

        if state.should_quit {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Tearing down the page ends the controller loop; in-flight requests
    // finish into a closed channel.
    drop(state);
    drop(inbox);

    result
}

fn draw_ui(f: &mut ratatui::Frame, state: &mut PanelState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // transcript
            Constraint::Length(3), // input
            Constraint::Length(1), // status
        ])
        .split(f.area());

    draw_transcript(f, chunks[0], state);
    draw_input(f, chunks[1], state);
    draw_status_bar(f, chunks[2], state);
}

fn draw_transcript(f: &mut ratatui::Frame, area: Rect, state: &mut PanelState) {
    let theme = &state.theme;
    let lines = build_transcript_lines(state.page.transcript(), theme);
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });

    // Scroll by rendered rows, not logical lines: long replies wrap.
    let inner_width = area.width.saturating_sub(2);
    let total_lines = paragraph.line_count(inner_width);
    let visible_height = area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    let transcript = paragraph
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", state.title))
                .title_style(Style::default().fg(theme.accent))
                .border_style(Style::default().fg(theme.border)),
        )
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .scroll((u16::try_from(state.scroll_offset).unwrap_or(u16::MAX), 0));
    f.render_widget(transcript, area);

    if total_lines > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(state.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area,
            &mut scrollbar_state,
        );
    }
}

/// User entries sit on the right, assistant entries on the left, one blank
/// line between entries.
fn build_transcript_lines<'a>(transcript: &'a [ChatMessage], theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for (i, message) in transcript.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let (alignment, style) = if message.is_user() {
            (
                Alignment::Right,
                Style::default()
                    .fg(theme.user_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Alignment::Left, Style::default().fg(theme.assistant_color))
        };

        for raw_line in message.text.lines() {
            lines.push(Line::from(Span::styled(raw_line, style)).alignment(alignment));
        }
    }

    lines
}

fn draw_input(f: &mut ratatui::Frame, area: Rect, state: &PanelState) {
    let theme = &state.theme;
    let input = Paragraph::new(state.page.input())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Type your message...  Enter / Ctrl+S to send ")
                .border_style(Style::default().fg(theme.border)),
        )
        .style(Style::default().fg(theme.fg));
    f.render_widget(input, area);

    let typed = u16::try_from(state.page.input().chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(typed).saturating_add(1);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    f.set_cursor_position((cursor_x.min(max_x), area.y.saturating_add(1)));
}

fn draw_status_bar(f: &mut ratatui::Frame, area: Rect, state: &PanelState) {
    let theme = &state.theme;

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.model),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(theme.muted)),
    ];
    match &state.notice {
        Some((notice, _)) => spans.push(Span::styled(
            notice.message.as_str(),
            Style::default().fg(theme.error),
        )),
        None => spans.push(Span::styled(
            "Esc to close",
            Style::default().fg(theme.muted),
        )),
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
