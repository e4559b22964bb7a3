use super::{RecordDiagnostic, RecordKind, RecordType};
use serde::{Deserialize, Serialize};

/// One resource record inside a zone, as submitted by the dashboard.
///
/// The shape is deliberately flat: `priority`, `weight` and `port` only carry
/// meaning for MX and SRV. Use [`DnsRecord::kind`] to obtain the typed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Owner name, `@` for the zone apex. Empty means apex.
    #[serde(default)]
    pub name: String,

    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl DnsRecord {
    pub fn new(
        id: impl Into<String>,
        record_type: RecordType,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            record_type,
            name: name.into(),
            value: value.into(),
            priority: None,
            weight: None,
            port: None,
            ttl: None,
        }
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_srv(mut self, priority: u16, weight: u16, port: u16) -> Self {
        self.priority = Some(priority);
        self.weight = Some(weight);
        self.port = Some(port);
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Owner name with the empty string normalized to `@`.
    pub fn owner(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "@"
        } else {
            name
        }
    }

    /// True when the owner name designates the zone apex.
    pub fn is_apex(&self, zone_name: &str) -> bool {
        let owner = self.owner();
        owner == "@"
            || owner.trim_end_matches('.').eq_ignore_ascii_case(zone_name.trim_end_matches('.'))
    }

    /// Convert into the typed record form, or explain why it cannot be rendered.
    pub fn kind(&self) -> Result<RecordKind, RecordDiagnostic> {
        let value = self.value.trim().to_string();
        let missing = |field: &'static str| RecordDiagnostic::MissingField {
            record_id: self.id.clone(),
            record_type: self.record_type.to_string(),
            owner: self.owner().to_string(),
            field,
        };

        // A blank target would otherwise render as the root name.
        let target = || {
            if value.is_empty() {
                Err(missing("value"))
            } else {
                Ok(value.clone())
            }
        };

        let kind = match self.record_type {
            RecordType::A => RecordKind::A {
                address: value.clone(),
            },
            RecordType::AAAA => RecordKind::Aaaa {
                address: value.clone(),
            },
            RecordType::CNAME => RecordKind::Cname { target: target()? },
            RecordType::MX => RecordKind::Mx {
                priority: self.priority.ok_or_else(|| missing("priority"))?,
                exchange: target()?,
            },
            RecordType::TXT => RecordKind::Txt {
                text: self.value.clone(),
            },
            RecordType::NS => RecordKind::Ns { target: target()? },
            RecordType::PTR => RecordKind::Ptr { target: target()? },
            RecordType::SRV => RecordKind::Srv {
                priority: self.priority.ok_or_else(|| missing("priority"))?,
                weight: self.weight.ok_or_else(|| missing("weight"))?,
                port: self.port.ok_or_else(|| missing("port"))?,
                target: target()?,
            },
            RecordType::Other(ref t) => {
                return Err(RecordDiagnostic::UnsupportedType {
                    record_id: self.id.clone(),
                    record_type: t.clone(),
                    owner: self.owner().to_string(),
                })
            }
        };

        Ok(kind)
    }
}
