use chrono::{Days, Local, NaiveDate};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::data::{
    Activity, ActivitySummaries, Bedtime, IdealBedtimes, Profile, Readiness, ReadinessSummaries,
    Sleep, SleepSummaries,
};

pub const API_BASE: &str = "https://api.ouraring.com/v1";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} returned status code {status}")]
    Status { url: String, status: u16 },
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Inclusive day range sent as `start`/`end` on every time-series request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// A lookback reaching past the earliest representable date starts there.
    pub fn ending_on(today: NaiveDate, days: u32) -> Self {
        Self {
            start: today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN),
            end: today,
        }
    }

    pub fn ending_today(days: u32) -> Self {
        Self::ending_on(Local::now().date_naive(), days)
    }

    fn query(&self) -> [(&'static str, String); 2] {
        [
            ("start", self.start.format(DATE_FORMAT).to_string()),
            ("end", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Read-only client for the Oura v1 summary endpoints.
///
/// The date window is fixed when the client is built; build a new client to move it.
pub struct OuraClient {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
    window: DateWindow,
}

impl OuraClient {
    pub fn new(access_token: impl Into<String>, days: u32) -> Self {
        Self::with_window(access_token, DateWindow::ending_today(days))
    }

    pub fn with_window(access_token: impl Into<String>, window: DateWindow) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: API_BASE.to_string(),
            access_token: access_token.into(),
            window,
        }
    }

    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.get("userinfo", false).await
    }

    pub async fn get_sleep(&self) -> Result<Vec<Sleep>, ApiError> {
        let summaries: SleepSummaries = self.get("sleep", true).await?;
        Ok(summaries.sleep)
    }

    pub async fn get_readiness(&self) -> Result<Vec<Readiness>, ApiError> {
        let summaries: ReadinessSummaries = self.get("readiness", true).await?;
        Ok(summaries.readiness)
    }

    pub async fn get_activity(&self) -> Result<Vec<Activity>, ApiError> {
        let summaries: ActivitySummaries = self.get("activity", true).await?;
        Ok(summaries.activity)
    }

    pub async fn get_bedtimes(&self) -> Result<Vec<Bedtime>, ApiError> {
        let bedtimes: IdealBedtimes = self.get("bedtime", true).await?;
        Ok(bedtimes.ideal_bedtimes)
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, windowed: bool) -> Result<T, ApiError> {
        let endpoint = format!("{}/{}", self.api_base, resource);

        let mut builder = self
            .client
            .get(&endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token));
        if windowed {
            builder = builder.query(&self.window.query());
        }
        let request = builder.build().map_err(|source| ApiError::Transport {
            url: endpoint.clone(),
            source,
        })?;
        let url = request.url().to_string();

        tracing::debug!(%url, "requesting");
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "non-success status");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str::<T>(&body).map_err(|source| {
            tracing::warn!(%url, error = %source, "failed to decode response");
            ApiError::Decode { url, source }
        })
    }
}
