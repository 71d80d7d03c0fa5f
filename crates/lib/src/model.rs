use std::fmt;

use serde::{Deserialize, Serialize};

/// A dataset cell which may have been published either as text or as a
/// JSON number. It is always displayed verbatim. Any other JSON value is
/// kept as it is so that a single odd cell does not reject the dataset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Textual form of the value. Numbers are printed in their shortest
    /// form, so a whole-valued float such as `55.0` shows as `55`.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(num) => fmt_number(f, num),
            FieldValue::Other(value) => write!(f, "{}", value),
        }
    }
}

// Integers beyond this magnitude are printed in exponent form.
const MAX_PLAIN_INTEGER: f64 = 1e21;

fn fmt_number(f: &mut fmt::Formatter<'_>, num: &serde_json::Number) -> fmt::Result {
    match num.as_f64() {
        Some(value) if num.is_f64() && value == 0.0 => f.write_str("0"),
        Some(value) if num.is_f64() && value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGER => {
            write!(f, "{:.0}", value)
        }
        _ => write!(f, "{}", num),
    }
}

/// One facility row of the dataset.
///
/// No field is mandatory: absent or `null` entries are kept as `None` and
/// render as empty text instead of failing the whole load.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct FacilityRecord {
    #[serde(rename = "provincia", default, deserialize_with = "text_field")]
    pub province: Option<String>,
    #[serde(rename = "struttura", default, deserialize_with = "text_field")]
    pub facility_name: Option<String>,
    #[serde(rename = "indirizzo", default, deserialize_with = "text_field")]
    pub address: Option<String>,
    #[serde(rename = "totale_ivg", default)]
    pub total_procedures_2023: Option<FieldValue>,
    #[serde(rename = "percentuale_farmacologiche", default)]
    pub pharmacological_percentage: Option<FieldValue>,
}

impl FacilityRecord {
    pub fn province(&self) -> &str {
        self.province.as_deref().unwrap_or_default()
    }

    pub fn facility_name(&self) -> &str {
        self.facility_name.as_deref().unwrap_or_default()
    }

    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or_default()
    }

    pub fn total_procedures_2023(&self) -> String {
        display_optional(&self.total_procedures_2023)
    }

    pub fn pharmacological_percentage(&self) -> String {
        display_optional(&self.pharmacological_percentage)
    }
}

fn display_optional(value: &Option<FieldValue>) -> String {
    value.as_ref().map(FieldValue::as_text).unwrap_or_default()
}

// Text columns published as bare numbers are kept as text.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<FieldValue>::deserialize(deserializer)?.map(|value| value.as_text()))
}
