use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

/// One predicted demand value. Accepts the Prophet column names on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(alias = "ds", deserialize_with = "deserialize_forecast_date")]
    pub date: NaiveDate,
    #[serde(alias = "yhat")]
    pub predicted: f64,
    #[serde(default, alias = "yhat_lower")]
    pub lower: Option<f64>,
    #[serde(default, alias = "yhat_upper")]
    pub upper: Option<f64>,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, predicted: f64) -> Self {
        Self {
            date,
            predicted,
            lower: None,
            upper: None,
        }
    }
}

// Forecasters emit either `2025-04-11` or `2025-04-11 00:00:00`.
fn deserialize_forecast_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| de::Error::custom(format!("invalid forecast date '{}': {}", raw, e)))
}
