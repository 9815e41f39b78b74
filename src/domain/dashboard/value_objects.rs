use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Value Object - a numeric figure as delivered by the API.
///
/// Deserialization never fails: numbers and numeric strings are kept,
/// anything else (null, booleans, garbage text, missing fields) becomes
/// an absent amount which formats as the zero-equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Amount(Option<f64>);

impl Amount {
    pub const ZERO: Amount = Amount(Some(0.0));

    pub fn absent() -> Self {
        Self(None)
    }

    /// The value when it is a usable finite number.
    pub fn value(&self) -> Option<f64> {
        self.0.filter(|v| v.is_finite())
    }

    /// `value || 0`: absent and invalid figures count as zero.
    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_negative(&self) -> bool {
        self.or_zero() < 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.or_zero() > 0.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(Some(value))
    }
}

impl From<Option<f64>> for Amount {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let value = match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(Amount(value))
    }
}

/// Value Object - a text field as delivered by the API.
///
/// Like [`Amount`], deserialization never fails: strings are kept, numbers
/// are rendered with their JSON spelling (`12345`, `1.5`) and anything else
/// is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text(Option<String>);

impl Text {
    pub fn absent() -> Self {
        Self(None)
    }

    /// The raw text, untrimmed.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Trimmed text, or `None` when missing or blank.
    pub fn non_blank(&self) -> Option<&str> {
        self.as_str().map(str::trim).filter(|t| !t.is_empty())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let text = match raw {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Ok(Text(text))
    }
}
