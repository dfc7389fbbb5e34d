use std::io::{Stdout, stdout};

use anyhow::Result;
use chatmark_engine::{InlineRun, MessageNode, RenderOptions, Role, Sender, Thread};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

struct App {
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(thread: &Thread, options: &RenderOptions) -> Self {
        Self {
            lines: thread_lines(thread, options),
            scroll: 0,
        }
    }

    fn scroll_down(&mut self) {
        let max = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Shows the thread as chat bubbles until `q` is pressed.
pub fn run(thread: &Thread, options: &RenderOptions) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(thread, options);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = if app.lines.is_empty() {
        vec![Line::from("No messages")]
    } else {
        app.lines.clone()
    };
    let thread = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title("Thread"))
        .scroll((app.scroll, 0));
    f.render_widget(thread, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down"),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[1]);
}

/// Lays out a thread as terminal lines: outgoing messages on the right,
/// incoming on the left, dividers centred. A blank line separates nodes.
fn thread_lines(thread: &Thread, options: &RenderOptions) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    for node in thread {
        match node.role {
            Role::DateDivider => {
                let label = format!("── {} ──", node.text());
                lines.push(Line::styled(label, dim).alignment(Alignment::Center));
            }
            Role::Message { sender, time, .. } => {
                let alignment = match sender {
                    Sender::Outgoing => Alignment::Right,
                    Sender::Incoming => Alignment::Left,
                };
                if options.reply_preview
                    && let Some(target) = thread.reply_target(node)
                {
                    lines.push(quote_line(target, dim).alignment(alignment));
                }
                for spans in content_lines(&node.content) {
                    lines.push(Line::from(spans).alignment(alignment));
                }
                if options.time_badge {
                    lines.push(Line::styled(time.to_string(), dim).alignment(alignment));
                }
            }
        }
        lines.push(Line::default());
    }

    lines
}

fn quote_line(target: &MessageNode, dim: Style) -> Line<'static> {
    let first = target.text().lines().next().unwrap_or_default().to_string();
    Line::styled(format!("┃ {first}"), dim.add_modifier(Modifier::ITALIC))
}

/// Splits runs into one span list per line of text.
fn content_lines(runs: &[InlineRun]) -> Vec<Vec<Span<'static>>> {
    let mut out = vec![vec![]];
    for run in runs {
        let style = run_style(run);
        for (i, part) in run.text.split('\n').enumerate() {
            if i > 0 {
                out.push(vec![]);
            }
            if !part.is_empty()
                && let Some(line) = out.last_mut()
            {
                line.push(Span::styled(part.to_string(), style));
            }
        }
    }
    out
}

fn run_style(run: &InlineRun) -> Style {
    let mut style = Style::default();
    if run.flags.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.flags.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if run.flags.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if run.flags.code {
        style = style.fg(Color::Yellow);
    }
    style
}
