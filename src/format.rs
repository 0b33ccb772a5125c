use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::data::{Activity, Bedtime, Readiness, Sleep};

pub const GREY: Color = Color::Gray;
pub const LIGHT_BLUE: Color = Color::LightBlue;
pub const PINK: Color = Color::LightMagenta;
pub const TURQUOISE: Color = Color::Cyan;
pub const SKY_BLUE: Color = Color::LightCyan;
pub const CHARTREUSE: Color = Color::LightGreen;
pub const ORANGE: Color = Color::Rgb(255, 165, 0);
pub const PLUM: Color = Color::Rgb(221, 160, 221);
pub const GOLDENROD: Color = Color::Rgb(218, 165, 32);

const CLOCK_FORMAT: &str = "%H:%M %:z";

// ── Durations ───────────────────────────────────────────

/// `"2 hrs 5 mins"`, `"5 mins"` or `"42 secs"`. Hours always carry minutes.
pub fn seconds_to_human(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        return format!("{} {}", plural(hours, "hr"), plural(minutes, "min"));
    }
    if minutes > 0 {
        return plural(minutes, "min");
    }
    plural(seconds, "sec")
}

/// Zero counts as singular.
pub fn plural(count: u64, word: &str) -> String {
    if count <= 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Seconds from midnight (possibly negative) as a wall-clock `HH:MM`.
pub fn clock_time(offset: Option<i64>) -> String {
    match offset {
        Some(seconds) => {
            let minutes = seconds.div_euclid(60).rem_euclid(24 * 60);
            format!("{:02}:{:02}", minutes / 60, minutes % 60)
        }
        None => "--:--".to_string(),
    }
}

pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

/// Flattens styled text, one `\n` per line.
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Labeled-field blocks ────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: Option<&'static str>,
    pub value: String,
    pub color: Color,
}

impl Field {
    pub fn labeled(label: &'static str, value: impl ToString, color: Color) -> Self {
        Self {
            label: Some(label),
            value: value.to_string(),
            color,
        }
    }

    pub fn bare(value: impl Into<String>, color: Color) -> Self {
        Self {
            label: None,
            value: value.into(),
            color,
        }
    }

    fn text(&self) -> String {
        match self.label {
            Some(label) => format!("{}: {}", label, self.value),
            None => self.value.clone(),
        }
    }
}

/// A record that renders as a fixed block of field rows.
pub trait Summary {
    fn rows(&self) -> Vec<Vec<Field>>;
}

/// Renders one record: each row on its own line, fields separated by a space,
/// then a blank separator line.
pub fn record_block<T: Summary>(record: &T) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = record
        .rows()
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, field) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(field.text(), Style::default().fg(field.color)));
            }
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(""));
    lines
}

impl Summary for Sleep {
    fn rows(&self) -> Vec<Vec<Field>> {
        vec![
            vec![
                Field::bare(self.summary_date.clone(), GREY),
                Field::labeled("score", self.score, LIGHT_BLUE),
            ],
            vec![Field::bare(
                format!(
                    "asleep from {} to {} ({})",
                    self.bedtime_start.format(CLOCK_FORMAT),
                    self.bedtime_end.format(CLOCK_FORMAT),
                    seconds_to_human(self.duration)
                ),
                PINK,
            )],
            vec![
                Field::labeled("rem", seconds_to_human(self.rem), TURQUOISE),
                Field::labeled("light", seconds_to_human(self.light), SKY_BLUE),
                Field::labeled("deep", seconds_to_human(self.deep), CHARTREUSE),
            ],
        ]
    }
}

impl Summary for Readiness {
    fn rows(&self) -> Vec<Vec<Field>> {
        vec![
            vec![
                Field::bare(self.summary_date.clone(), GREY),
                Field::labeled("score", self.score, LIGHT_BLUE),
            ],
            vec![Field::labeled("resting HR", self.score_resting_hr, PINK)],
            vec![Field::labeled(
                "recovery index",
                self.score_recovery_index,
                TURQUOISE,
            )],
        ]
    }
}

impl Summary for Activity {
    fn rows(&self) -> Vec<Vec<Field>> {
        vec![
            vec![
                Field::bare(self.summary_date.clone(), GREY),
                Field::labeled("score", self.score, LIGHT_BLUE),
            ],
            vec![Field::labeled("active calories", self.cal_active, PINK)],
            vec![Field::labeled("steps", self.steps, TURQUOISE)],
        ]
    }
}

impl Summary for Bedtime {
    fn rows(&self) -> Vec<Vec<Field>> {
        vec![
            vec![Field::bare(self.date.clone(), GREY)],
            vec![Field::labeled("status", self.status.label(), LIGHT_BLUE)],
            vec![Field::bare(
                format!(
                    "window between {} and {}",
                    clock_time(self.bedtime_window.start),
                    clock_time(self.bedtime_window.end)
                ),
                PINK,
            )],
        ]
    }
}
