use crate::dns_record::{DnsRecord, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TTL: u32 = 3600;
pub const DEFAULT_REFRESH: u32 = 3600;
pub const DEFAULT_RETRY: u32 = 1800;
pub const DEFAULT_EXPIRE: u32 = 604_800;
pub const DEFAULT_MINIMUM_TTL: u32 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    #[default]
    Master,
    Slave,
    Forward,
}

impl ZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Master => "master",
            ZoneType::Slave => "slave",
            ZoneType::Forward => "forward",
        }
    }

    /// Forward zones have no zone file on disk.
    pub fn has_zone_file(&self) -> bool {
        !matches!(self, ZoneType::Forward)
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start-of-authority parameters for a zone.
///
/// Numeric values travel as decimal strings, exactly as the dashboard form
/// submits them, and are parsed at render time with documented fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaSettings {
    #[serde(default)]
    pub ttl: String,
    #[serde(default)]
    pub primary_nameserver: String,
    #[serde(default)]
    pub admin_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(default)]
    pub refresh: String,
    #[serde(default)]
    pub retry: String,
    #[serde(default)]
    pub expire: String,
    #[serde(default)]
    pub minimum_ttl: String,
}

impl Default for SoaSettings {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL.to_string(),
            primary_nameserver: String::new(),
            admin_email: String::new(),
            serial: None,
            refresh: DEFAULT_REFRESH.to_string(),
            retry: DEFAULT_RETRY.to_string(),
            expire: DEFAULT_EXPIRE.to_string(),
            minimum_ttl: DEFAULT_MINIMUM_TTL.to_string(),
        }
    }
}

impl SoaSettings {
    pub fn ttl_or_default(&self) -> u32 {
        parse_seconds(&self.ttl, DEFAULT_TTL)
    }

    pub fn refresh_or_default(&self) -> u32 {
        parse_seconds(&self.refresh, DEFAULT_REFRESH)
    }

    pub fn retry_or_default(&self) -> u32 {
        parse_seconds(&self.retry, DEFAULT_RETRY)
    }

    pub fn expire_or_default(&self) -> u32 {
        parse_seconds(&self.expire, DEFAULT_EXPIRE)
    }

    pub fn minimum_ttl_or_default(&self) -> u32 {
        parse_seconds(&self.minimum_ttl, DEFAULT_MINIMUM_TTL)
    }

    /// Explicit serial, if one was given and parses.
    pub fn explicit_serial(&self) -> Option<u64> {
        self.serial
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
    }
}

fn parse_seconds(raw: &str, fallback: u32) -> u32 {
    raw.trim().parse().unwrap_or(fallback)
}

fn default_allow_update() -> Vec<String> {
    vec!["none".to_string()]
}

/// A DNS administrative unit: authority settings plus its ordered records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(default)]
    pub id: String,

    pub zone_name: String,

    #[serde(default)]
    pub zone_type: ZoneType,

    pub file_name: String,

    #[serde(default = "default_allow_update")]
    pub allow_update: Vec<String>,

    /// Primary servers a slave zone transfers from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub masters: Vec<String>,

    /// Per-zone forwarders for forward zones; global forwarders apply when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forwarders: Vec<String>,

    #[serde(default)]
    pub soa_settings: SoaSettings,

    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        zone_name: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            zone_name: zone_name.into(),
            zone_type: ZoneType::Master,
            file_name: file_name.into(),
            allow_update: default_allow_update(),
            masters: Vec::new(),
            forwarders: Vec::new(),
            soa_settings: SoaSettings::default(),
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<DnsRecord>) -> Self {
        self.records = records;
        self
    }

    /// Zone name without a trailing dot.
    pub fn origin(&self) -> &str {
        self.zone_name.trim().trim_end_matches('.')
    }

    /// Apex NS records that carry a target and therefore render.
    pub fn apex_ns_records(&self) -> impl Iterator<Item = &DnsRecord> {
        self.records
            .iter()
            .filter(move |r| {
                r.record_type == RecordType::NS
                    && r.is_apex(self.origin())
                    && !r.value.trim().is_empty()
            })
    }

    pub fn has_apex_ns(&self) -> bool {
        self.apex_ns_records().next().is_some()
    }

    pub fn is_reverse(&self) -> bool {
        let origin = self.origin().to_ascii_lowercase();
        origin.ends_with(".in-addr.arpa") || origin.ends_with(".ip6.arpa")
    }

    /// ACL entries for `allow-update`, falling back to `none`.
    pub fn allow_update_or_default(&self) -> Vec<String> {
        if self.allow_update.is_empty() {
            default_allow_update()
        } else {
            self.allow_update.clone()
        }
    }
}
