use serde::{Deserialize, Deserializer};

/// Observer override from the page form or an API caller.
#[derive(Debug, Default, Deserialize)]
pub struct ObserverQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lon: Option<f64>,
}

// An emptied number input still submits `lat=`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
