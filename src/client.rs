use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{MealError, Result};

/// NEIS open-data endpoint for daily meal menus.
pub const DEFAULT_BASE_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

/// Office-of-education code (Seoul).
pub const OFFICE_CODE: &str = "B10";

/// Fixed school identifier.
pub const SCHOOL_CODE: &str = "7130118";

/// Build the lookup URL for one date.
///
/// The date parameter is `YYYYMMDD`, exactly 8 characters.
pub fn request_url(base_url: &str, date: NaiveDate) -> String {
    format!(
        "{base_url}?ATPT_OFCDC_SC_CODE={OFFICE_CODE}&SD_SCHUL_CODE={SCHOOL_CODE}&MLSV_YMD={}",
        date.format("%Y%m%d")
    )
}

/// Issue one GET for the date's meal data and return the raw body.
///
/// No retry: a failed request surfaces immediately and the caller aborts
/// the pipeline for this action.
pub fn fetch_menu_xml(client: &Client, base_url: &str, date: NaiveDate) -> Result<String> {
    let url = request_url(base_url, date);
    debug!(%url, "requesting meal data");

    let response = client.get(&url).send().map_err(|e| MealError::Transport {
        status: e.status().map(|s| s.as_u16()),
        source: Some(e),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MealError::Transport {
            status: Some(status.as_u16()),
            source: None,
        });
    }

    let body = response.text().map_err(|e| MealError::Transport {
        status: None,
        source: Some(e),
    })?;
    debug!(bytes = body.len(), "received response body");

    Ok(body)
}
