use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

use crate::error::{MealError, Result};
use crate::models::MealRecord;

/// Result code the upstream API uses for a successful lookup.
pub const SUCCESS_CODE: &str = "INFO-000";

/// Message substituted when the payload gives none, or cannot be parsed.
pub const UNKNOWN_ERROR_MESSAGE: &str = "알 수 없는 오류";

const FALLBACK_MEAL_TIME: &str = "시간 정보 없음";
const FALLBACK_MENU: &str = "메뉴 없음";
const FALLBACK_CALORIE: &str = "열량 정보 없음";

/// Parse the meal API response into records.
///
/// Outcomes, in priority order:
/// - non-success result code → [`MealError::Api`] with the upstream code
///   and message, no records;
/// - parseable document with zero rows → [`MealError::NoMealData`];
/// - otherwise, one [`MealRecord`] per row in document order.
///
/// A document quick-xml cannot parse is reported as an API error with an
/// unknown message rather than a raw parser fault.
pub fn parse_meal_response(xml: &str) -> Result<Vec<MealRecord>> {
    let doc = match scan_document(xml) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "meal response was not parseable XML");
            return Err(MealError::Api {
                code: "UNKNOWN".to_string(),
                message: UNKNOWN_ERROR_MESSAGE.to_string(),
            });
        }
    };

    if let Some(code) = doc.code {
        if code != SUCCESS_CODE {
            let message = doc
                .message
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            return Err(MealError::Api { code, message });
        }
    }

    if doc.rows.is_empty() {
        return Err(MealError::NoMealData);
    }

    debug!(rows = doc.rows.len(), "parsed meal rows");
    Ok(doc.rows.into_iter().map(RowFields::into_record).collect())
}

/// Raw fields of one `<row>` element before fallbacks apply.
#[derive(Debug, Default)]
struct RowFields {
    meal_time: Option<String>,
    dish: Option<String>,
    calorie: Option<String>,
    nutrients: Option<String>,
}

impl RowFields {
    fn into_record(self) -> MealRecord {
        MealRecord {
            meal_time: self
                .meal_time
                .unwrap_or_else(|| FALLBACK_MEAL_TIME.to_string()),
            dish_text: self.dish.unwrap_or_else(|| FALLBACK_MENU.to_string()),
            calorie_text: self
                .calorie
                .unwrap_or_else(|| FALLBACK_CALORIE.to_string()),
            nutrient_text: self.nutrients.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default)]
struct ScannedDoc {
    code: Option<String>,
    message: Option<String>,
    rows: Vec<RowFields>,
}

/// Single pass over the document collecting the error envelope and rows.
///
/// The envelope tags are matched case-insensitively; the API has emitted
/// both `<RESULT>` and `<result>` over time.
fn scan_document(xml: &str) -> std::result::Result<ScannedDoc, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut doc = ScannedDoc::default();
    let mut in_result = false;
    let mut current_row: Option<RowFields> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if tag.eq_ignore_ascii_case("result") {
                    in_result = true;
                    field = None;
                } else if tag.eq_ignore_ascii_case("row") {
                    current_row = Some(RowFields::default());
                    field = None;
                } else {
                    field = Some(tag);
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                store_text(&mut doc, in_result, current_row.as_mut(), field.as_deref(), &text);
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                store_text(&mut doc, in_result, current_row.as_mut(), field.as_deref(), &text);
            }
            Event::End(e) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if tag.eq_ignore_ascii_case("result") {
                    in_result = false;
                } else if tag.eq_ignore_ascii_case("row") {
                    if let Some(row) = current_row.take() {
                        doc.rows.push(row);
                    }
                } else {
                    field = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

/// Route text into the envelope or the current row, per the open leaf tag.
fn store_text(
    doc: &mut ScannedDoc,
    in_result: bool,
    current_row: Option<&mut RowFields>,
    field: Option<&str>,
    text: &str,
) {
    let Some(field) = field else { return };

    if in_result {
        if field.eq_ignore_ascii_case("code") {
            append(&mut doc.code, text);
        } else if field.eq_ignore_ascii_case("message") {
            append(&mut doc.message, text);
        }
        return;
    }

    if let Some(row) = current_row {
        match field {
            "MMEAL_SC_NM" => append(&mut row.meal_time, text),
            "DDISH_NM" => append(&mut row.dish, text),
            "CAL_INFO" => append(&mut row.calorie, text),
            "NTR_INFO" => append(&mut row.nutrients, text),
            _ => {}
        }
    }
}

fn append(slot: &mut Option<String>, text: &str) {
    slot.get_or_insert_with(String::new).push_str(text);
}
