use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const SERVICES_LINKED: &str = "services_linked";
pub const WITH_DATA_DICT_AND_DEFAULT_DATA: &str = "with_data_dict_and_default_data";
pub const HAVE_ASSETS: &str = "have_assets";

/// Metrics carrying a percent slot, in report order.
pub const METRICS: [&str; 3] = [
    SERVICES_LINKED,
    WITH_DATA_DICT_AND_DEFAULT_DATA,
    HAVE_ASSETS,
];

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub host: String,
    pub apikey: String,
    #[serde(default)]
    pub x509cert: X509Cert,
}

/// TLS verification policy: a boolean, or a path to a PEM bundle.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum X509Cert {
    Verify(bool),
    Bundle(PathBuf),
}

impl Default for X509Cert {
    fn default() -> Self {
        X509Cert::Verify(true)
    }
}

#[derive(Debug, Deserialize)]
pub struct RisksDocument {
    pub risks: Vec<RiskRecord>,
}

/// Absent fields are `None`; an explicit `null` on any path segment is a type error.
#[derive(Debug, Deserialize, Default)]
pub struct RiskRecord {
    #[serde(default, deserialize_with = "present")]
    pub risk: Option<RiskSummary>,
    #[serde(default, deserialize_with = "present")]
    pub rra: Option<Rra>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RiskSummary {
    #[serde(default)]
    pub median_label: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Rra {
    #[serde(default, deserialize_with = "present")]
    pub rra_details: Option<RraDetails>,
    /// Any value counts, `null` included.
    #[serde(default, deserialize_with = "present")]
    pub asset_groups: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RraDetails {
    #[serde(default, deserialize_with = "present")]
    pub details: Option<Details>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Details {
    #[serde(default, deserialize_with = "present")]
    pub metadata: Option<Metadata>,
    #[serde(default, deserialize_with = "present")]
    pub data: Option<DataDict>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Metadata {
    #[serde(default, deserialize_with = "present")]
    pub linked_services: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DataDict {
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Vec<serde_json::Value>>,
}

/// Only reached when the key exists, so the inner type decides whether `null` is accepted.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountOrigin {
    #[default]
    Zero,
    Legacy,
}

impl CountOrigin {
    pub fn start(self) -> i64 {
        match self {
            CountOrigin::Zero => 0,
            CountOrigin::Legacy => -1,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatCounter {
    pub count: i64,
    pub percent: Option<f64>,
}

impl StatCounter {
    pub fn starting_at(count: i64) -> Self {
        StatCounter {
            count,
            percent: None,
        }
    }
}

/// One counter per metric; field order is the report order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Metrics {
    pub services_linked: StatCounter,
    pub with_data_dict_and_default_data: StatCounter,
    pub have_assets: StatCounter,
}

impl Metrics {
    pub fn starting_at(count: i64) -> Self {
        Metrics {
            services_linked: StatCounter::starting_at(count),
            with_data_dict_and_default_data: StatCounter::starting_at(count),
            have_assets: StatCounter::starting_at(count),
        }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StatCounter> {
        match name {
            SERVICES_LINKED => Some(&mut self.services_linked),
            WITH_DATA_DICT_AND_DEFAULT_DATA => Some(&mut self.with_data_dict_and_default_data),
            HAVE_ASSETS => Some(&mut self.have_assets),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StatCounter)> + '_ {
        [
            (SERVICES_LINKED, &self.services_linked),
            (
                WITH_DATA_DICT_AND_DEFAULT_DATA,
                &self.with_data_dict_and_default_data,
            ),
            (HAVE_ASSETS, &self.have_assets),
        ]
        .into_iter()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatsResult {
    pub total: i64,
    pub origin: CountOrigin,
    pub metrics: Metrics,
}
