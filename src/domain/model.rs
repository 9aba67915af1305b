use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /req/`.
#[derive(Debug, Deserialize)]
pub struct RelayBody {
    #[serde(default)]
    pub addr: Option<String>,
}

/// Body of `POST /insert/`. The store URL arrives with the request under the
/// uppercase key `URL`.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

/// The two values injected into a fetched template's evaluation scope.
///
/// Values are arbitrary JSON: strings, numbers, booleans, null, or
/// structured. Validation is a presence check on the keys, so extraction
/// works on the raw JSON map instead of typed `Option` fields, since serde folds
/// an explicit JSON `null` into `None`, which would conflate "present but
/// null" with "absent".
#[derive(Debug, Clone)]
pub struct RenderVariables {
    pub random2: Value,
    pub random3: Value,
}

impl RenderVariables {
    /// Extract both variables from a parsed request body. `None` when either
    /// key is missing, regardless of the values (zero, empty string, and
    /// null all pass).
    pub fn from_body(body: &Value) -> Option<Self> {
        match (body.get("random2"), body.get("random3")) {
            (Some(random2), Some(random3)) => Some(Self {
                random2: random2.clone(),
                random3: random3.clone(),
            }),
            _ => None,
        }
    }
}
