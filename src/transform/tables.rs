//! Table builders: project parsed input rows into the three derived tables.
//!
//! Each builder emits exactly one record per input row, in input order.
//! The projections are independent per row; no filtering, no aggregation.

use serde_json::Value;

use super::coerce::{as_string, contact_date, flag, optional_category, underscore_dots};
use crate::error::{TransformError, TransformResult};
use crate::models::{CampaignRecord, ClientRecord, EconomicsRecord};

/// Columns the input must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "month",
    "day",
    "cons_price_idx",
    "euribor_three_months",
];

/// Verify every required column is present in the input header.
///
/// Called before any output is written, so a schema mismatch fails the run
/// without leaving partial files behind.
pub fn check_columns(headers: &[String]) -> TransformResult<()> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(TransformError::MissingColumn((*required).to_string()));
        }
    }
    Ok(())
}

fn text_field(row: &Value, row_idx: usize, column: &str) -> TransformResult<String> {
    let value = row
        .get(column)
        .ok_or_else(|| TransformError::MissingColumn(column.to_string()))?;

    as_string(value).ok_or_else(|| TransformError::InvalidValue {
        column: column.to_string(),
        row: row_idx,
        message: "expected a scalar value".to_string(),
    })
}

fn int_field(row: &Value, row_idx: usize, column: &str) -> TransformResult<i64> {
    let raw = text_field(row, row_idx, column)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TransformError::InvalidValue {
            column: column.to_string(),
            row: row_idx,
            message: format!("'{}' is not an integer", raw),
        })
}

fn float_field(row: &Value, row_idx: usize, column: &str) -> TransformResult<f64> {
    let raw = text_field(row, row_idx, column)?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TransformError::InvalidValue {
            column: column.to_string(),
            row: row_idx,
            message: format!("'{}' is not a number", raw),
        })
}

fn flag_field(row: &Value, column: &str, truthy: &str) -> bool {
    row.get(column).map(|v| flag(v, truthy)).unwrap_or(false)
}

/// Build the client table: demographic and credit attributes.
///
/// Dots in `job` and `education` become underscores; an "unknown"
/// education becomes null; `credit_default` and `mortgage` are true only
/// for an exact "yes".
pub fn build_client(records: &[Value]) -> TransformResult<Vec<ClientRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Ok(ClientRecord {
                client_id: int_field(row, i, "client_id")?,
                age: int_field(row, i, "age")?,
                job: underscore_dots(&text_field(row, i, "job")?),
                marital: text_field(row, i, "marital")?,
                education: optional_category(&underscore_dots(&text_field(row, i, "education")?)),
                credit_default: flag_field(row, "credit_default", "yes"),
                mortgage: flag_field(row, "mortgage", "yes"),
            })
        })
        .collect()
}

/// Build the campaign table: marketing interaction attributes.
///
/// `previous_outcome` is true only for an exact "success",
/// `campaign_outcome` only for an exact "yes". The source month and day
/// columns are folded into `last_contact_date` and dropped.
pub fn build_campaign(records: &[Value]) -> TransformResult<Vec<CampaignRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let last_contact_date = match (row.get("month"), row.get("day")) {
                (Some(month), Some(day)) => contact_date(month, day),
                _ => None,
            };

            Ok(CampaignRecord {
                client_id: int_field(row, i, "client_id")?,
                number_contacts: int_field(row, i, "number_contacts")?,
                contact_duration: int_field(row, i, "contact_duration")?,
                previous_campaign_contacts: int_field(row, i, "previous_campaign_contacts")?,
                previous_outcome: flag_field(row, "previous_outcome", "success"),
                campaign_outcome: flag_field(row, "campaign_outcome", "yes"),
                last_contact_date,
            })
        })
        .collect()
}

/// Build the economics table: macroeconomic indicators, passed through.
pub fn build_economics(records: &[Value]) -> TransformResult<Vec<EconomicsRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Ok(EconomicsRecord {
                client_id: int_field(row, i, "client_id")?,
                cons_price_idx: float_field(row, i, "cons_price_idx")?,
                euribor_three_months: float_field(row, i, "euribor_three_months")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn sample_row() -> Value {
        json!({
            "client_id": "1",
            "age": "30",
            "job": "admin.",
            "marital": "single",
            "education": "unknown",
            "credit_default": "no",
            "mortgage": "yes",
            "number_contacts": "2",
            "contact_duration": "120",
            "previous_campaign_contacts": "0",
            "previous_outcome": "nonexistent",
            "campaign_outcome": "yes",
            "month": "may",
            "day": "3",
            "cons_price_idx": "93.2",
            "euribor_three_months": "4.857",
        })
    }

    #[test]
    fn test_check_columns_ok() {
        let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        assert!(check_columns(&headers).is_ok());
    }

    #[test]
    fn test_check_columns_missing() {
        let headers: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "month")
            .map(|c| c.to_string())
            .collect();

        let err = check_columns(&headers).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(ref c) if c == "month"));
    }

    #[test]
    fn test_check_columns_ignores_extras() {
        let mut headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        headers.push("campaign_wave".to_string());
        assert!(check_columns(&headers).is_ok());
    }

    #[test]
    fn test_build_client_row() {
        let client = build_client(&[sample_row()]).unwrap();

        assert_eq!(
            client,
            vec![ClientRecord {
                client_id: 1,
                age: 30,
                job: "admin_".into(),
                marital: "single".into(),
                education: None,
                credit_default: false,
                mortgage: true,
            }]
        );
    }

    #[test]
    fn test_build_campaign_row() {
        let campaign = build_campaign(&[sample_row()]).unwrap();

        assert_eq!(
            campaign,
            vec![CampaignRecord {
                client_id: 1,
                number_contacts: 2,
                contact_duration: 120,
                previous_campaign_contacts: 0,
                previous_outcome: false,
                campaign_outcome: true,
                last_contact_date: NaiveDate::from_ymd_opt(2022, 5, 3),
            }]
        );
    }

    #[test]
    fn test_build_economics_row() {
        let economics = build_economics(&[sample_row()]).unwrap();

        assert_eq!(
            economics,
            vec![EconomicsRecord {
                client_id: 1,
                cons_price_idx: 93.2,
                euribor_three_months: 4.857,
            }]
        );
    }

    #[test]
    fn test_education_with_dots_kept() {
        let mut row = sample_row();
        row["education"] = json!("high.school");

        let client = build_client(&[row]).unwrap();
        assert_eq!(client[0].education.as_deref(), Some("high_school"));
    }

    #[test]
    fn test_invalid_calendar_date_becomes_null() {
        let mut row = sample_row();
        row["month"] = json!("feb");
        row["day"] = json!("30");

        let campaign = build_campaign(&[row]).unwrap();
        assert_eq!(campaign[0].last_contact_date, None);
    }

    #[test]
    fn test_mistyped_flag_is_false_not_error() {
        let mut row = sample_row();
        row["mortgage"] = json!("yse");
        row["previous_outcome"] = json!("Success");

        let client = build_client(&[row.clone()]).unwrap();
        assert!(!client[0].mortgage);

        let campaign = build_campaign(&[row]).unwrap();
        assert!(!campaign[0].previous_outcome);
    }

    #[test]
    fn test_malformed_integer_is_fatal() {
        let mut row = sample_row();
        row["age"] = json!("thirty");

        let err = build_client(&[row]).unwrap_err();
        assert!(matches!(err, TransformError::InvalidValue { ref column, .. } if column == "age"));
    }

    #[test]
    fn test_row_order_preserved() {
        let mut second = sample_row();
        second["client_id"] = json!("2");
        let rows = vec![sample_row(), second];

        let client = build_client(&rows).unwrap();
        assert_eq!(client.len(), 2);
        assert_eq!(client[0].client_id, 1);
        assert_eq!(client[1].client_id, 2);
    }
}
