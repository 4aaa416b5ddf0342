use nanofin_core::{Summary, Transaction};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bank statement after parsing: free-form holder details plus typed rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementDocument {
    #[serde(default)]
    pub personal_info: Map<String, Value>,
    #[serde(default)]
    pub account_info: Map<String, Value>,
    #[serde(default)]
    pub summary: Summary,
    /// Rows in statement order (not sorted by date)
    pub transactions: Vec<Transaction>,
}

impl StatementDocument {
    pub fn profile(&self) -> Profile {
        Profile::from_document(self)
    }
}

/// Account holder details shown alongside a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub customer_id: String,
    pub mobile: String,
    pub kyc_status: String,
    pub account_number: String,
}

const NOT_AVAILABLE: &str = "N/A";

impl Profile {
    pub fn from_document(doc: &StatementDocument) -> Self {
        Self {
            name: text_field(&doc.personal_info, "name"),
            customer_id: text_field(&doc.personal_info, "customer_id"),
            mobile: text_field(&doc.personal_info, "mobile"),
            kyc_status: text_field(&doc.personal_info, "kyc_status"),
            account_number: text_field(&doc.account_info, "account_number"),
        }
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_defaults_to_not_available() {
        let doc = StatementDocument::default();
        let profile = doc.profile();
        assert_eq!(profile.name, "N/A");
        assert_eq!(profile.account_number, "N/A");
    }

    #[test]
    fn test_profile_reads_strings_and_numbers() {
        let mut doc = StatementDocument::default();
        doc.personal_info = json!({"name": "Asha", "mobile": 9876543210u64, "kyc_status": ""})
            .as_object()
            .cloned()
            .unwrap();
        doc.account_info = json!({"account_number": "XXXX1234"}).as_object().cloned().unwrap();

        let profile = doc.profile();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.mobile, "9876543210");
        assert_eq!(profile.kyc_status, "N/A");
        assert_eq!(profile.account_number, "XXXX1234");
    }
}
