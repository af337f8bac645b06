//! Listener option lists
//!
//! An ordered key/value list meant to be handed to a listener-bind API.
//! Each key appears at most once; setting an existing key replaces its value
//! in place, a new key is appended.

use std::fmt;

use serde::Deserialize;

use super::ip::IpAddress;

pub const IP_KEY: &str = "ip";
pub const PORT_KEY: &str = "port";

/// Value of a single listener option.
///
/// `Ip` and `Port` are only produced from a validated address, so they are
/// never read from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    #[serde(skip_deserializing)]
    Ip(IpAddress),
    #[serde(skip_deserializing)]
    Port(u16),
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl OptionValue {
    /// Numeric view shared by `Port` and `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Port(port) => Some(i64::from(*port)),
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_ip(&self) -> Option<IpAddress> {
        match self {
            OptionValue::Ip(ip) => Some(*ip),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Ip(ip) => write!(f, "{}", ip),
            OptionValue::Port(port) => write!(f, "{}", port),
            OptionValue::Bool(value) => write!(f, "{}", value),
            OptionValue::Integer(value) => write!(f, "{}", value),
            OptionValue::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<IpAddress> for OptionValue {
    fn from(ip: IpAddress) -> Self {
        OptionValue::Ip(ip)
    }
}

impl From<u16> for OptionValue {
    fn from(port: u16) -> Self {
        OptionValue::Port(port)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Ordered option list with override-by-key semantics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListenerOptions {
    entries: Vec<(String, OptionValue)>,
}

impl ListenerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of the first entry named `key`, or appends a new entry.
    ///
    /// An in-range integer stored under `port` is kept as `OptionValue::Port`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = match (key.as_str(), value.into()) {
            (PORT_KEY, OptionValue::Integer(n)) => u16::try_from(n)
                .map(OptionValue::Port)
                .unwrap_or(OptionValue::Integer(n)),
            (_, value) => value,
        };
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Applies `overrides` in order through [`ListenerOptions::set`].
    pub fn merge<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        for (key, value) in overrides {
            self.set(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, OptionValue)> {
        self.entries
    }
}

impl<K, V> FromIterator<(K, V)> for ListenerOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ListenerOptions::new().merge(iter)
    }
}

impl IntoIterator for ListenerOptions {
    type Item = (String, OptionValue);
    type IntoIter = std::vec::IntoIter<(String, OptionValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
