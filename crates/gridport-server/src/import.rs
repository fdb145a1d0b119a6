//! The import flow: validate endpoints, reconcile ranges, then shuttle
//! values from the source sheet to the destination sheet.

use gridport_core::{reconcile, validate_label};
use gridport_sheets::SheetsClient;
use serde::Deserialize;

use crate::error::ImportError;

/// Body of `POST /sheets/import-data`.
///
/// Every field is optional on the wire; the required ids are checked in
/// one pass before anything is read positionally or any network call is
/// made.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRequest {
    pub source_id: Option<String>,
    pub source_sheet_name: Option<String>,
    pub destination_id: Option<String>,
    pub destination_sheet_name: Option<String>,
    pub copy_start: Option<String>,
    pub copy_end: Option<String>,
    pub paste_start: Option<String>,
    pub paste_end: Option<String>,
}

fn require<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ImportError> {
    field.as_deref().ok_or(ImportError::MissingField(name))
}

/// Copy a rectangular range of cells from the source sheet to the
/// destination sheet.
///
/// Steps run in order with no rollback and no retries; a failure partway
/// through leaves the destination sheet as last written. Any error
/// aborts the flow and is reported uniformly by the handler.
pub async fn run_import(client: &SheetsClient, req: &ImportRequest) -> Result<(), ImportError> {
    for label in [&req.copy_start, &req.copy_end, &req.paste_start, &req.paste_end]
        .into_iter()
        .flatten()
    {
        validate_label(label)?;
    }

    let source_id = require(&req.source_id, "source_id")?;
    let source_sheet_name = require(&req.source_sheet_name, "source_sheet_name")?;
    let destination_id = require(&req.destination_id, "destination_id")?;
    let destination_sheet_name = require(&req.destination_sheet_name, "destination_sheet_name")?;

    let source = client.open_spreadsheet(source_id).await?;
    let source_sheet = source.sheet(source_sheet_name)?;

    let (source_rows, source_cols) = source_sheet.dimensions().await?;
    let ranges = reconcile(
        req.copy_start.as_deref(),
        req.copy_end.as_deref(),
        req.paste_start.as_deref(),
        req.paste_end.as_deref(),
        source_rows,
        source_cols,
    )?;
    tracing::info!(
        copy_range = %ranges.copy_range,
        paste_range = %ranges.paste_range,
        "resolved import ranges"
    );

    let values = source_sheet.read_range(&ranges.copy_range).await?;

    let destination = client.open_spreadsheet(destination_id).await?;
    let destination_sheet = destination.sheet(destination_sheet_name)?;
    destination_sheet
        .write_range(&ranges.paste_range, &values)
        .await?;

    Ok(())
}
