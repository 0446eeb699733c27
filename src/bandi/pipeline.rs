use std::path::Path;

use reqwest::Client;
use tracing::{info, instrument};

use crate::bandi::error::Result;
use crate::bandi::io::{excel_write, fetch};

/// Open-data endpoint publishing the Regione Lombardia grant announcements.
pub const DEFAULT_URL: &str = "https://www.dati.lombardia.it/resource/bukx-h2uy.json";

/// File name the workbook is saved under when no output path is given.
pub const DEFAULT_OUTPUT: &str = "BandiRegioneLombardia.xlsx";

/// Downloads the dataset from `url` and saves it as an Excel workbook at
/// `output`. Returns the number of exported records.
///
/// The workbook is only written once the download has been decoded, so a
/// failed request never touches `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(url = %url, output = %output.display())
)]
pub async fn download_to_excel(client: &Client, url: &str, output: &Path) -> Result<usize> {
    let records = fetch::fetch_bandi(client, url).await?;
    excel_write::export_bandi(&records, output)?;
    info!(record_count = records.len(), "workbook written");
    Ok(records.len())
}
