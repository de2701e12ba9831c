use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw transaction tag as sent by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Transfer,
    Deposit,
    Unknown(String),
}

impl TransactionKind {
    /// Map a backend tag onto a known kind, keeping unrecognized tags verbatim
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "transfer" | "transfer-out" | "transfer-in" => TransactionKind::Transfer,
            "deposit" => TransactionKind::Deposit,
            _ => TransactionKind::Unknown(tag.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            TransactionKind::Transfer => "transfer",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Unknown(tag) => tag,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(TransactionKind::from_tag(&tag))
    }
}

/// A single account activity, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(deserialize_with = "date_string")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvu: Option<String>,
}

impl Transaction {
    pub fn new(id: i64, amount: f64, kind: TransactionKind, date: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            kind,
            date: date.into(),
            name: None,
            origin: None,
            destination: None,
            cvu: None,
        }
    }
}

// Some backends send the date as a bare epoch number instead of a string
fn date_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected date string or number, got {}",
            other
        ))),
    }
}
