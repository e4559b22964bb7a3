use crate::dns_record::{DnsRecord, RecordType};
use crate::validators::{
    validate_acl_entry, validate_admin_email, validate_file_name, validate_ipv4, validate_ipv6,
    validate_nameserver, validate_no_control_chars, validate_owner_name, validate_target_name,
    validate_zone_name,
};
use crate::zone::{SoaSettings, Zone, ZoneType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root aggregate describing the complete desired resolver configuration.
///
/// Built fresh from every update request and rendered in full; nothing is kept
/// in memory between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsConfiguration {
    /// Desired state of the resolver service. A reload is only issued when true.
    #[serde(default)]
    pub dns_server_status: bool,

    #[serde(default)]
    pub listen_on: Vec<String>,

    #[serde(default)]
    pub allow_query: Vec<String>,

    #[serde(default)]
    pub allow_recursion: Vec<String>,

    #[serde(default)]
    pub forwarders: Vec<String>,

    #[serde(default)]
    pub allow_transfer: Vec<String>,

    #[serde(default)]
    pub dnssec_validation: bool,

    #[serde(default)]
    pub query_logging: bool,

    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl DnsConfiguration {
    /// Check the structural invariants of the model.
    ///
    /// All problems are collected so the operator sees every issue at once.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.zones.is_empty() {
            errors.push("At least one zone is required".to_string());
        }

        let acl_lists = [
            ("listenOn", &self.listen_on),
            ("allowQuery", &self.allow_query),
            ("allowRecursion", &self.allow_recursion),
            ("forwarders", &self.forwarders),
            ("allowTransfer", &self.allow_transfer),
        ];
        for (field, entries) in acl_lists {
            for entry in entries {
                if let Err(e) = validate_acl_entry(entry) {
                    errors.push(format!("{field}: {e}"));
                }
            }
        }

        let mut zone_names = HashSet::new();
        let mut file_names = HashSet::new();

        for (idx, zone) in self.zones.iter().enumerate() {
            let label = if zone.zone_name.trim().is_empty() {
                format!("zones[{idx}]")
            } else {
                format!("zone '{}'", zone.origin())
            };

            if let Err(e) = validate_zone_name(&zone.zone_name) {
                errors.push(format!("{label}: {e}"));
            } else if !zone_names.insert(zone.origin().to_ascii_lowercase()) {
                errors.push(format!("{label}: duplicate zone name"));
            }

            if zone.zone_type.has_zone_file() {
                if let Err(e) = validate_file_name(&zone.file_name) {
                    errors.push(format!("{label}: {e}"));
                } else if !file_names.insert(zone.file_name.trim().to_string()) {
                    errors.push(format!(
                        "{label}: file name '{}' is used by another zone",
                        zone.file_name.trim()
                    ));
                }
            }

            if zone.zone_type == ZoneType::Slave && zone.masters.is_empty() {
                errors.push(format!("{label}: slave zones require at least one master"));
            }

            for entry in zone
                .allow_update
                .iter()
                .chain(&zone.masters)
                .chain(&zone.forwarders)
            {
                if let Err(e) = validate_acl_entry(entry) {
                    errors.push(format!("{label}: {e}"));
                }
            }

            let soa = &zone.soa_settings;
            let soa_checks = [
                validate_nameserver(&soa.primary_nameserver),
                validate_admin_email(&soa.admin_email),
                validate_no_control_chars("SOA ttl", &soa.ttl),
                validate_no_control_chars("SOA serial", soa.serial.as_deref().unwrap_or("")),
                validate_no_control_chars("SOA refresh", &soa.refresh),
                validate_no_control_chars("SOA retry", &soa.retry),
                validate_no_control_chars("SOA expire", &soa.expire),
                validate_no_control_chars("SOA minimum TTL", &soa.minimum_ttl),
            ];
            for e in soa_checks.into_iter().filter_map(Result::err) {
                errors.push(format!("{label}: {e}"));
            }

            for record in &zone.records {
                let value_check = match record.record_type {
                    RecordType::A => validate_ipv4(&record.value),
                    RecordType::AAAA => validate_ipv6(&record.value),
                    RecordType::CNAME
                    | RecordType::NS
                    | RecordType::PTR
                    | RecordType::MX
                    | RecordType::SRV => validate_target_name(&record.value),
                    _ => Ok(()),
                };
                for e in [validate_owner_name(&record.name), value_check]
                    .into_iter()
                    .filter_map(Result::err)
                {
                    errors.push(format!(
                        "{label}: {} record '{}': {e}",
                        record.record_type,
                        record.owner().escape_debug()
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Illustrative configuration offered when nothing is deployed yet.
    pub fn default_template(server_running: bool) -> Self {
        let mut zone = Zone::new("zone-1", "example.com", "db.example.com");
        zone.soa_settings = SoaSettings {
            primary_nameserver: "ns1.example.com.".to_string(),
            admin_email: "admin@example.com".to_string(),
            ..SoaSettings::default()
        };
        zone.records = vec![
            DnsRecord::new("record-1", RecordType::NS, "@", "ns1.example.com."),
            DnsRecord::new("record-2", RecordType::A, "@", "192.168.1.100"),
            DnsRecord::new("record-3", RecordType::A, "ns1", "192.168.1.100"),
            DnsRecord::new("record-4", RecordType::CNAME, "www", "@"),
            DnsRecord::new("record-5", RecordType::MX, "@", "mail.example.com.").with_priority(10),
            DnsRecord::new("record-6", RecordType::TXT, "@", "v=spf1 mx -all"),
        ];

        Self {
            dns_server_status: server_running,
            listen_on: vec!["any".to_string()],
            allow_query: vec!["any".to_string()],
            allow_recursion: vec!["localhost".to_string(), "localnets".to_string()],
            forwarders: vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()],
            allow_transfer: vec!["none".to_string()],
            dnssec_validation: true,
            query_logging: false,
            zones: vec![zone],
        }
    }
}
