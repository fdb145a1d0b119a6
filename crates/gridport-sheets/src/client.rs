//! Typed handles over the spreadsheet service REST API.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::auth::Credentials;
use crate::error::{ClientError, Result};

/// A rectangular block of cell values, row-major.
///
/// Values are shuttled between the read and write calls opaquely; nothing
/// in gridport inspects them.
pub type Grid = Vec<Vec<Value>>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the spreadsheet service.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

/// Spreadsheet metadata as returned by `GET /v1/spreadsheets/{id}`.
#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    title: String,
    sheets: Vec<String>,
}

/// Body shape of the values endpoints: `{"values": [[..], ..]}`.
///
/// The service omits the key entirely for an empty sheet or range.
#[derive(Debug, Default, Deserialize)]
struct ValuesBody {
    #[serde(default)]
    values: Grid,
}

impl SheetsClient {
    /// Build a client from credentials.
    pub fn new(creds: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("gridport/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: creds.api_base.trim_end_matches('/').to_string(),
            token: creds.token,
        })
    }

    /// Open a spreadsheet by its id, fetching its metadata.
    pub async fn open_spreadsheet(&self, id: &str) -> Result<Spreadsheet<'_>> {
        tracing::debug!(spreadsheet = %id, "opening spreadsheet");
        let url = format!("{}/v1/spreadsheets/{}", self.api_base, id);
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::SpreadsheetNotFound(id.to_string()));
        }
        let response = check_status(response).await?;

        let meta: SpreadsheetMeta = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(Spreadsheet {
            client: self,
            id: id.to_string(),
            meta,
        })
    }

    async fn get_values(&self, spreadsheet_id: &str, target: &str) -> Result<Grid> {
        let url = format!(
            "{}/v1/spreadsheets/{}/values/{}",
            self.api_base, spreadsheet_id, target
        );
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        let response = check_status(response).await?;

        let body: ValuesBody = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.values)
    }

    async fn put_values(&self, spreadsheet_id: &str, target: &str, values: &Grid) -> Result<()> {
        let url = format!(
            "{}/v1/spreadsheets/{}/values/{}",
            self.api_base, spreadsheet_id, target
        );
        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "values": values }))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Map a non-success response to [`ClientError::Http`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Http {
        status: status.as_u16(),
        body,
    })
}

/// A spreadsheet opened on the service.
pub struct Spreadsheet<'a> {
    client: &'a SheetsClient,
    id: String,
    meta: SpreadsheetMeta,
}

impl<'a> Spreadsheet<'a> {
    /// The spreadsheet's display title.
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// Resolve a sheet by name against the spreadsheet's sheet list.
    pub fn sheet(&self, name: &str) -> Result<Sheet<'a>> {
        if !self.meta.sheets.iter().any(|s| s == name) {
            return Err(ClientError::SheetNotFound(name.to_string()));
        }
        Ok(Sheet {
            client: self.client,
            spreadsheet_id: self.id.clone(),
            name: name.to_string(),
        })
    }
}

/// A handle to one sheet within an open spreadsheet.
pub struct Sheet<'a> {
    client: &'a SheetsClient,
    spreadsheet_id: String,
    name: String,
}

impl Sheet<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values on the sheet. The service trims trailing empty rows and
    /// trailing empty cells within each row.
    pub async fn values(&self) -> Result<Grid> {
        tracing::debug!(sheet = %self.name, "fetching sheet values");
        self.client.get_values(&self.spreadsheet_id, &self.name).await
    }

    /// Values within an inclusive A1 range.
    pub async fn read_range(&self, range: &str) -> Result<Grid> {
        tracing::debug!(sheet = %self.name, %range, "reading range");
        let target = format!("{}!{}", self.name, range);
        self.client.get_values(&self.spreadsheet_id, &target).await
    }

    /// Write a block of values at `range` (an anchor cell or a bounding
    /// range).
    pub async fn write_range(&self, range: &str, values: &Grid) -> Result<()> {
        tracing::debug!(sheet = %self.name, %range, rows = values.len(), "writing range");
        let target = format!("{}!{}", self.name, range);
        self.client
            .put_values(&self.spreadsheet_id, &target, values)
            .await
    }

    /// The used extent of the sheet as 1-indexed (rows, cols) counts.
    pub async fn dimensions(&self) -> Result<(u32, u32)> {
        let grid = self.values().await?;
        Ok(used_extent(&grid))
    }
}

/// Compute the used extent of a trimmed values grid.
///
/// Row count is the number of rows the service returned. Column count is
/// the widest row seen scanning top-down, stopping at the first fully
/// empty row: an empty row ends the rectangular region of interest even
/// when later rows still hold data.
pub fn used_extent(grid: &Grid) -> (u32, u32) {
    let rows = grid.len() as u32;
    let mut cols = 0u32;
    for row in grid {
        if row.is_empty() {
            break;
        }
        cols = cols.max(row.len() as u32);
    }
    (rows, cols)
}
