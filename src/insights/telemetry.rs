//! Caller-supplied inputs. Everything is optional: a missing reading renders as
//! `undefined` in the prompt instead of being defaulted or rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value the monitor may report either as a number or as a description
/// ("Stable", "Moderate", "8.2 GB of 16 GB", ...). Structured values such as
/// `[{"fs": "C:", "size": 512}]` are kept as JSON and rendered as JSON text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<Reading>),
    Other(serde_json::Value),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Flag(flag) => write!(f, "{flag}"),
            Reading::Number(n) if n.is_infinite() && n.is_sign_positive() => {
                write!(f, "Infinity")
            }
            Reading::Number(n) if n.is_infinite() => write!(f, "-Infinity"),
            Reading::Number(n) => write!(f, "{n}"),
            Reading::Text(text) => write!(f, "{text}"),
            Reading::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Reading::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Reading::Number(value as f64)
    }
}

impl From<bool> for Reading {
    fn from(value: bool) -> Self {
        Reading::Flag(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

impl From<String> for Reading {
    fn from(value: String) -> Self {
        Reading::Text(value)
    }
}

impl<T: Into<Reading>> From<Vec<T>> for Reading {
    fn from(values: Vec<T>) -> Self {
        Reading::List(values.into_iter().map(Into::into).collect())
    }
}

/// Renders a present value with its `Display`, and an absent one as `undefined`.
pub(crate) fn or_undefined<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

/// Network health snapshot as computed by the capture pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics {
    /// Mean TCP ACK round trip, ms.
    pub latency: Option<f64>,
    /// Standard deviation of inter-frame delta, ms.
    pub jitter: Option<f64>,
    /// Retransmitted share of packets, percent.
    #[serde(alias = "packet_loss")]
    pub packet_loss: Option<f64>,
    /// Mbps.
    pub bandwidth: Option<f64>,
    /// Mean DNS response time, ms.
    #[serde(alias = "dns_delay")]
    pub dns_delay: Option<f64>,
    /// 1 to 100.
    #[serde(alias = "health_score")]
    pub health_score: Option<f64>,
    /// Usually "Stable", "Unstable" or "Very Unstable".
    pub stability: Option<Reading>,
    /// Usually "Low", "Moderate" or "High".
    #[serde(alias = "congestion_level", alias = "congestionLevel")]
    pub congestion: Option<Reading>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub used: Option<Reading>,
    pub total: Option<Reading>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuInfo {
    pub name: Option<Reading>,
    pub usage: Option<Reading>,
    pub temperature: Option<Reading>,
}

/// Host state the assistant answers questions against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    #[serde(alias = "health_score")]
    pub health_score: Option<Reading>,
    #[serde(alias = "cpu_load")]
    pub cpu_load: Option<Reading>,
    #[serde(default)]
    pub memory: MemoryUsage,
    #[serde(alias = "disk_info")]
    pub disk_info: Option<Reading>,
    #[serde(alias = "key_services")]
    pub key_services: Option<Reading>,
    pub os: Option<Reading>,
    pub uptime: Option<Reading>,
    #[serde(default)]
    pub gpu: GpuInfo,
    #[serde(alias = "top_processes")]
    pub top_processes: Option<String>,
    #[serde(alias = "suspicious_processes")]
    pub suspicious_processes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(alias = "ai", alias = "model")]
    Assistant,
}

/// One prior turn of the conversation with the assistant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}
