//! Typed records for the three derived tables.
//!
//! - [`ClientRecord`] - per-person demographic and credit attributes
//! - [`CampaignRecord`] - per-contact-event marketing interaction attributes
//! - [`EconomicsRecord`] - macroeconomic indicators for the contact event
//!
//! Field order matches output column order; the CSV writer serializes
//! records positionally against each table's `COLUMNS` header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Client Table
// =============================================================================

/// One row of the client table.
///
/// `education` is `None` where the source reports "unknown"; the booleans
/// are true only for an exact "yes" in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_id: i64,
    pub age: i64,
    pub job: String,
    pub marital: String,
    pub education: Option<String>,
    pub credit_default: bool,
    pub mortgage: bool,
}

impl ClientRecord {
    /// Output column order for `client.csv`.
    pub const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

// =============================================================================
// Campaign Table
// =============================================================================

/// One row of the campaign table.
///
/// `last_contact_date` is synthesized from the source month and day with a
/// fixed year of 2022; combinations that do not form a calendar date are
/// `None` and serialize as an empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub client_id: i64,
    pub number_contacts: i64,
    pub contact_duration: i64,
    pub previous_campaign_contacts: i64,
    pub previous_outcome: bool,
    pub campaign_outcome: bool,
    pub last_contact_date: Option<NaiveDate>,
}

impl CampaignRecord {
    /// Output column order for `campaign.csv`.
    pub const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

// =============================================================================
// Economics Table
// =============================================================================

/// One row of the economics table. Values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicsRecord {
    pub client_id: i64,
    pub cons_price_idx: f64,
    pub euribor_three_months: f64,
}

impl EconomicsRecord {
    /// Output column order for `economics.csv`.
    pub const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "cons_price_idx",
        "euribor_three_months",
    ];
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_header<T: Serialize>(record: &T) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(record).unwrap();
        let bytes = writer.into_inner().unwrap();
        let out = String::from_utf8(bytes).unwrap();
        out.lines().next().unwrap().to_string()
    }

    #[test]
    fn test_client_columns_match_fields() {
        let record = ClientRecord {
            client_id: 1,
            age: 30,
            job: "admin_".into(),
            marital: "single".into(),
            education: None,
            credit_default: false,
            mortgage: true,
        };
        assert_eq!(csv_header(&record), ClientRecord::COLUMNS.join(","));
    }

    #[test]
    fn test_campaign_columns_match_fields() {
        let record = CampaignRecord {
            client_id: 1,
            number_contacts: 2,
            contact_duration: 120,
            previous_campaign_contacts: 0,
            previous_outcome: false,
            campaign_outcome: true,
            last_contact_date: NaiveDate::from_ymd_opt(2022, 5, 3),
        };
        assert_eq!(csv_header(&record), CampaignRecord::COLUMNS.join(","));
    }

    #[test]
    fn test_economics_columns_match_fields() {
        let record = EconomicsRecord {
            client_id: 1,
            cons_price_idx: 93.2,
            euribor_three_months: 4.857,
        };
        assert_eq!(csv_header(&record), EconomicsRecord::COLUMNS.join(","));
    }

    #[test]
    fn test_date_serializes_iso() {
        let record = CampaignRecord {
            client_id: 1,
            number_contacts: 2,
            contact_duration: 120,
            previous_campaign_contacts: 0,
            previous_outcome: false,
            campaign_outcome: true,
            last_contact_date: NaiveDate::from_ymd_opt(2022, 5, 3),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("2022-05-03"));
    }
}
