//! Postboard TUI - five HTTP actions against a public test API
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use postboard_tui::constants::{APP_NAME, APP_VERSION};
use postboard_tui::messages::ui_events::{key_to_ui_event, ActionKind, Field, InputMode};
use postboard_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use postboard_tui::ui::{method_color, output_lines, status_color};
use postboard_tui::config::warn_ignored;
use postboard_tui::{AppActor, Config, HttpMethod, NetworkActor, PostsApi};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A broken config is only reported once logging is up
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Log to a file; stdout belongs to the terminal UI
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log_file has no file name: {}", config.log_file.display()))?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    if let Some(e) = &config_error {
        warn_ignored(e);
    }

    tracing::info!(base_url = %config.base_url, "Starting {} {}", APP_NAME, APP_VERSION);
    let api = PostsApi::new(&config.base_url);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let base_url = api.base_url().to_string();
    let app_actor = AppActor::new(api, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, &base_url, ui_tx, &mut render_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    base_url: &str,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state, base_url))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.input_mode, current_state.show_help)
                {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, base_url: &str) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, base_url, main_chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Buttons
            Constraint::Length(4), // Create
            Constraint::Length(5), // Update
            Constraint::Length(3), // Delete
            Constraint::Min(0),
        ])
        .split(columns[0]);

    draw_buttons(f, left[0]);
    draw_form(f, state, " 3 Create Post ", &[Field::PostTitle, Field::PostBody], left[1]);
    draw_form(
        f,
        state,
        " 4 Update Post ",
        &[Field::PutId, Field::PutTitle, Field::PutBody],
        left[2],
    );
    draw_form(f, state, " 5 Delete Post ", &[Field::DeleteId], left[3]);

    draw_output(f, state, columns[1]);
    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, base_url: &str, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" {}", base_url), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_buttons(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = ActionKind::ALL
        .iter()
        .map(|kind| {
            let method = match kind {
                ActionKind::FetchPost | ActionKind::FetchPostLegacy => HttpMethod::GET,
                ActionKind::CreatePost => HttpMethod::POST,
                ActionKind::UpdatePost => HttpMethod::PUT,
                ActionKind::DeletePost => HttpMethod::DELETE,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", kind.key()), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:6}", method.as_str()),
                    Style::default().fg(method_color(method)).bold(),
                ),
                Span::raw(kind.label().to_string()),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Actions "));
    f.render_widget(list, area);
}

fn draw_form(f: &mut Frame, state: &RenderState, title: &str, fields: &[Field], area: Rect) {
    let focused = fields.contains(&state.active_field);
    let border_style = if focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let lines: Vec<Line> = fields
        .iter()
        .map(|field| {
            let label_style = if *field == state.active_field {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{:>5}: ", field.label()), label_style),
                Span::raw(state.field_value(*field).to_string()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());
    f.render_widget(Paragraph::new(lines).block(block), area);

    if state.input_mode == InputMode::Editing {
        if let Some(row) = fields.iter().position(|field| *field == state.active_field) {
            let value = state.field_value(state.active_field);
            let column = value[..state.cursor_position.min(value.len())].chars().count() as u16;
            let max_x = area.x + area.width.saturating_sub(2);
            let cursor_x = (area.x + 1 + 7 + column).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, area.y + 1 + row as u16));
        }
    }
}

fn draw_output(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = match state.last_exchange.as_ref() {
        Some(exchange) => {
            let mut spans = vec![
                Span::raw(" Data Display "),
                Span::styled(
                    format!("{} ", exchange.method.as_str()),
                    Style::default().fg(method_color(exchange.method)).bold(),
                ),
            ];
            if let Some(code) = exchange.status_code {
                spans.push(Span::styled(
                    format!("{} ", code),
                    Style::default().fg(status_color(code)).bold(),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(" Data Display "),
    };

    let footer = match (state.last_exchange.as_ref(), state.output.updated_at()) {
        (Some(exchange), Some(at)) => {
            format!(" {}ms @ {} ", exchange.time_ms, at.format("%H:%M:%S"))
        }
        (None, Some(at)) => format!(" {} ", at.format("%H:%M:%S")),
        _ => String::new(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(footer).right_aligned());

    let lines = if state.output.is_empty() {
        vec![Line::from(Span::styled(
            "Press 1-5 to run an action. Press ? for help.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        output_lines(&state.output)
    };

    let output = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.output_scroll, 0));
    f.render_widget(output, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading() {
        format!(" Loading... ({} in flight) ", state.in_flight)
    } else if state.input_mode == InputMode::Editing {
        " ESC/Enter:stop editing | arrows:move | Tab:next field ".to_string()
    } else {
        " 1-5:run | Tab:field | e:edit | ↑/↓:scroll | ?:help | q:quit ".to_string()
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 POSTBOARD - Keyboard Shortcuts

 ACTIONS
   1                  Fetch post 1
   2                  Fetch post 2 (legacy request)
   3                  Create post from Title/Body
   4                  Update post ID with Title/Body
   5                  Delete post ID

 FORMS
   Tab / Shift+Tab    Next / previous field
   e / Enter          Edit focused field
   Esc / Enter        Stop editing

 OUTPUT
   ↑ / ↓              Scroll

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
