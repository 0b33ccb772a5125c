use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ouraterm::format::plain_text;
use ouraterm::{logging, Canvas, OuraClient, OuraWidget, Settings};

#[derive(Parser)]
#[command(name = "ouraterm")]
#[command(about = "Oura ring daily summaries for the terminal")]
#[command(version)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Days of data to retrieve
    #[arg(short, long)]
    days: Option<u32>,

    /// Test API connectivity
    #[arg(long)]
    test: bool,

    /// Print every page as plain text and exit
    #[arg(long)]
    print: bool,
}

/// Latest frame handed over by the widget.
struct Screen {
    width: u16,
    title: String,
    body: Text<'static>,
    wrap: bool,
}

impl Screen {
    fn new(width: u16) -> Self {
        Self {
            width,
            title: String::new(),
            body: Text::default(),
            wrap: false,
        }
    }
}

impl Canvas for Screen {
    fn width(&self) -> u16 {
        self.width
    }

    fn redraw(&mut self, title: &str, body: Text<'static>, wrap: bool) {
        self.title = title.to_string();
        self.body = body;
        self.wrap = wrap;
    }
}

/// Writes each frame to stdout.
struct PrintCanvas;

impl Canvas for PrintCanvas {
    fn width(&self) -> u16 {
        80
    }

    fn redraw(&mut self, title: &str, body: Text<'static>, _wrap: bool) {
        println!("== {} ==", title);
        println!("{}", plain_text(&body));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {:#}", e);
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(days) = cli.days {
        settings.days = days;
    }

    if cli.test {
        let client = OuraClient::new(settings.access_token.clone(), settings.days)
            .with_base_url(settings.api_base.clone());
        match client.get_profile().await {
            Ok(profile) => println!("API test successful! Signed in as {}", profile.email),
            Err(e) => println!("API test failed: {}", e),
        }
        return Ok(());
    }

    let mut widget = OuraWidget::new(settings.clone());

    if cli.print {
        let mut canvas = PrintCanvas;
        widget.refresh(&mut canvas).await;
        if widget.last_error().is_none() {
            for _ in 1..widget.pagination().len() {
                widget.next_page(&mut canvas);
            }
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut widget, settings.refresh_every()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    widget: &mut OuraWidget,
    refresh_every: Duration,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut screen = Screen::new(body_width(terminal.size()?.width));

    widget.refresh(&mut screen).await;
    let mut last_refresh = Instant::now();

    loop {
        let width = body_width(terminal.size()?.width);
        if width != screen.width {
            screen.width = width;
            widget.display(&mut screen);
        }

        terminal.draw(|f| ui(f, &screen))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => {
                        widget.refresh(&mut screen).await;
                        last_refresh = Instant::now();
                    }
                    code => {
                        widget.handle_key(code, &mut screen);
                    }
                }
            }
        }

        if last_refresh.elapsed() >= refresh_every {
            widget.refresh(&mut screen).await;
            last_refresh = Instant::now();
        }
    }
}

/// Columns inside the panel border and outer margin.
fn body_width(terminal_width: u16) -> u16 {
    terminal_width.saturating_sub(4)
}

fn ui(f: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),    // Widget
            Constraint::Length(1), // Footer
        ])
        .split(f.size());

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", screen.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let mut body = Paragraph::new(screen.body.clone()).block(block);
    if screen.wrap {
        body = body.wrap(Wrap { trim: false });
    }
    f.render_widget(body, chunks[0]);

    let footer = Paragraph::new("[←/→] Page  |  [?] Help  |  [r] Refresh  |  [q] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[1]);
}
