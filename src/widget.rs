use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::api::{ApiError, OuraClient};
use crate::config::Settings;
use crate::data::{BedtimeStatus, OuraData};
use crate::format::{self, record_block, Summary, GOLDENROD, ORANGE, PLUM};
use crate::pagination::{PageSlot, PageType, Pagination};

/// What the widget needs from the surrounding dashboard.
pub trait Canvas {
    /// Columns available to the widget body.
    fn width(&self) -> u16;
    fn redraw(&mut self, title: &str, body: Text<'static>, wrap: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    NextPage,
    PrevPage,
    ToggleHelp,
}

pub const KEY_BINDINGS: &[(KeyCode, &str, KeyAction)] = &[
    (KeyCode::Right, "→", KeyAction::NextPage),
    (KeyCode::Char('l'), "l", KeyAction::NextPage),
    (KeyCode::Left, "←", KeyAction::PrevPage),
    (KeyCode::Char('h'), "h", KeyAction::PrevPage),
    (KeyCode::Char('?'), "?", KeyAction::ToggleHelp),
];

impl KeyAction {
    fn describe(self) -> &'static str {
        match self {
            KeyAction::NextPage => "Next page",
            KeyAction::PrevPage => "Prev page",
            KeyAction::ToggleHelp => "Show/hide this help",
        }
    }
}

pub const NOT_ENOUGH_DATA: [&str; 2] = [
    "Not enough data to recommend a bedtime yet.",
    "Keep wearing your ring for a few more nights.",
];

/// Paged view over the latest Oura summaries.
pub struct OuraWidget {
    client: OuraClient,
    settings: Settings,
    pagination: Pagination,
    data: OuraData,
    error: Option<String>,
    show_help: bool,
}

impl OuraWidget {
    pub fn new(settings: Settings) -> Self {
        let client = OuraClient::new(settings.access_token.clone(), settings.days)
            .with_base_url(settings.api_base.clone());
        Self::with_client(settings, client)
    }

    pub fn with_client(settings: Settings, client: OuraClient) -> Self {
        let pagination = Pagination::from_names(&settings.pages);
        Self {
            client,
            settings,
            pagination,
            data: OuraData::default(),
            error: None,
            show_help: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.settings.title
    }

    pub fn data(&self) -> &OuraData {
        &self.data
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Refreshes the data, then redraws.
    pub async fn refresh<C: Canvas>(&mut self, canvas: &mut C) {
        // The failure is kept on the widget and shown by the next render.
        let _ = self.refresh_all().await;
        self.display(canvas);
    }

    /// Fetches every resource in order and swaps the snapshot in only if all succeed.
    /// On failure the previous snapshot is left as it was.
    pub async fn refresh_all(&mut self) -> Result<(), ApiError> {
        tracing::info!(window = ?self.client.window(), "refreshing oura data");
        match self.fetch_all().await {
            Ok(data) => {
                tracing::info!(
                    sleep = data.sleep.len(),
                    readiness = data.readiness.len(),
                    activity = data.activity.len(),
                    bedtimes = data.bedtimes.len(),
                    "refresh complete"
                );
                self.data = data;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "refresh failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn fetch_all(&self) -> Result<OuraData, ApiError> {
        let profile = self.client.get_profile().await?;
        let sleep = self.client.get_sleep().await?;
        let readiness = self.client.get_readiness().await?;
        let activity = self.client.get_activity().await?;
        let bedtimes = self.client.get_bedtimes().await?;

        Ok(OuraData {
            profile: Some(profile),
            sleep,
            readiness,
            activity,
            bedtimes,
        })
    }

    /// Returns `false` for keys the widget does not bind.
    pub fn handle_key<C: Canvas>(&mut self, key: KeyCode, canvas: &mut C) -> bool {
        let Some(&(_, _, action)) = KEY_BINDINGS.iter().find(|(code, _, _)| *code == key) else {
            return false;
        };
        match action {
            KeyAction::NextPage => self.next_page(canvas),
            KeyAction::PrevPage => self.prev_page(canvas),
            KeyAction::ToggleHelp => {
                self.show_help = !self.show_help;
                self.display(canvas);
            }
        }
        true
    }

    pub fn next_page<C: Canvas>(&mut self, canvas: &mut C) {
        self.pagination.advance();
        self.page_changed(canvas);
    }

    pub fn prev_page<C: Canvas>(&mut self, canvas: &mut C) {
        self.pagination.retreat();
        self.page_changed(canvas);
    }

    fn page_changed<C: Canvas>(&mut self, canvas: &mut C) {
        tracing::debug!(index = self.pagination.index(), "page changed");
        self.show_help = false;
        self.display(canvas);
    }

    pub fn display<C: Canvas>(&self, canvas: &mut C) {
        let body = if self.show_help {
            self.help_text()
        } else {
            self.content(canvas.width())
        };
        canvas.redraw(&self.settings.title, body, false);
    }

    pub fn content(&self, width: u16) -> Text<'static> {
        let name = &self.settings.my_name;

        if let Some(error) = &self.error {
            let msg = format!("Could not get Oura data for {}", name);
            return Text::from(vec![
                Line::from(""),
                Line::from(""),
                Line::from(format::center(&msg, usize::from(width))),
                Line::styled(error.clone(), Style::default().fg(Color::Red)),
            ]);
        }

        let mut lines = vec![self.user_header()];
        lines.push(Line::styled(
            self.pagination
                .marker(usize::from(width.saturating_sub(2))),
            Style::default().fg(GOLDENROD),
        ));

        match self.pagination.current() {
            PageSlot::Known(page) => lines.extend(self.page(*page)),
            PageSlot::Unrecognized(page) => lines.push(Line::styled(
                format!("Could not find specified page: \"{}\"", page),
                Style::default().fg(Color::Blue),
            )),
        }

        Text::from(lines)
    }

    fn user_header(&self) -> Line<'static> {
        let name = Span::raw(self.settings.my_name.clone());
        match &self.data.profile {
            Some(profile) => Line::from(vec![
                name,
                Span::raw(" - "),
                Span::styled(
                    format!("{} years", profile.age),
                    Style::default().fg(Color::White),
                ),
                Span::raw(" - "),
                Span::styled(format!("{} kg", profile.weight), Style::default().fg(PLUM)),
            ]),
            None => Line::from(name),
        }
    }

    /// Header line plus records, newest fetched first.
    pub fn page(&self, page: PageType) -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled(
            page.title(),
            Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        )];
        match page {
            PageType::Sleep => lines.extend(self.section(page, &self.data.sleep)),
            PageType::Readiness => lines.extend(self.section(page, &self.data.readiness)),
            PageType::Activity => lines.extend(self.section(page, &self.data.activity)),
            PageType::Bedtime => lines.extend(self.bedtime_section()),
        }
        lines
    }

    fn bedtime_section(&self) -> Vec<Line<'static>> {
        let latest = self.data.bedtimes.last().map(|bedtime| bedtime.status);
        if latest == Some(BedtimeStatus::NotEnoughData) {
            return NOT_ENOUGH_DATA.iter().map(|line| Line::from(*line)).collect();
        }
        self.section(PageType::Bedtime, &self.data.bedtimes)
    }

    fn section<T: Summary>(&self, page: PageType, records: &[T]) -> Vec<Line<'static>> {
        if records.is_empty() {
            return vec![Line::from(format!(
                "No Oura {} data for {}",
                page, self.settings.my_name
            ))];
        }
        records.iter().rev().flat_map(record_block).collect()
    }

    fn help_text(&self) -> Text<'static> {
        let mut lines = vec![
            Line::styled(
                format!("{} keyboard controls", self.settings.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
        ];
        lines.extend(
            KEY_BINDINGS
                .iter()
                .map(|(_, label, action)| Line::from(format!("  {:<4}{}", label, action.describe()))),
        );
        Text::from(lines)
    }
}
