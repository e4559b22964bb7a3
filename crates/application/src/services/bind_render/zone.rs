use super::{ensure_trailing_dot, render_record};
use chrono::{Datelike, NaiveDate};
use netpanel_domain::{RecordDiagnostic, Zone};
use std::fmt::Write;

/// Complete zone-file text plus the values derived while rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedZone {
    pub text: String,
    pub serial: u64,
    pub primary_ns: String,
    pub diagnostics: Vec<RecordDiagnostic>,
}

/// Date-based serial `YYYYMMDD01` for the given day.
pub fn synthesize_serial(today: NaiveDate) -> u64 {
    today.year() as u64 * 1_000_000 + today.month() as u64 * 10_000 + today.day() as u64 * 100 + 1
}

/// Render a zone into zone-file text.
///
/// `today` is only used when the zone has no explicit serial, which keeps
/// the output deterministic for a given input and date.
pub fn render_zone(zone: &Zone, today: NaiveDate) -> RenderedZone {
    let soa = &zone.soa_settings;
    let serial = soa
        .explicit_serial()
        .unwrap_or_else(|| synthesize_serial(today));
    let primary_ns = primary_nameserver(zone);
    let admin = admin_mailbox(zone);

    let mut text = String::new();
    let _ = writeln!(text, "; Zone file for {}", zone.origin());
    let _ = writeln!(text, "; Generated by netpanel - manual changes will be overwritten");
    let _ = writeln!(text, "$TTL {}", soa.ttl_or_default());
    let _ = writeln!(text, "$ORIGIN {}", ensure_trailing_dot(zone.origin()));
    let _ = writeln!(text, "@ IN SOA {} {} (", primary_ns, admin);
    let _ = writeln!(text, "        {:<12} ; serial", serial);
    let _ = writeln!(text, "        {:<12} ; refresh", soa.refresh_or_default());
    let _ = writeln!(text, "        {:<12} ; retry", soa.retry_or_default());
    let _ = writeln!(text, "        {:<12} ; expire", soa.expire_or_default());
    let _ = writeln!(text, "        {:<12} ; minimum TTL", soa.minimum_ttl_or_default());
    let _ = writeln!(text, ")");
    text.push('\n');

    if !zone.has_apex_ns() {
        let _ = writeln!(text, "@ IN NS {}", primary_ns);
    }

    let mut diagnostics = Vec::new();
    for record in &zone.records {
        let rendered = render_record(record);
        diagnostics.extend(rendered.diagnostics);
        if let Some(line) = rendered.line {
            text.push_str(&line);
            text.push('\n');
        }
    }

    RenderedZone {
        text,
        serial,
        primary_ns,
        diagnostics,
    }
}

/// SOA MNAME: configured value, else the first apex NS target, else `ns1.<zone>.`.
fn primary_nameserver(zone: &Zone) -> String {
    let configured = zone.soa_settings.primary_nameserver.trim();
    if !configured.is_empty() {
        return ensure_trailing_dot(configured);
    }

    zone.apex_ns_records()
        .map(|r| r.value.trim())
        .find(|v| !v.is_empty())
        .map(ensure_trailing_dot)
        .unwrap_or_else(|| format!("ns1.{}.", zone.origin()))
}

/// SOA RNAME: the admin address with its `@` turned into a label separator.
fn admin_mailbox(zone: &Zone) -> String {
    let email = zone.soa_settings.admin_email.trim();
    if email.is_empty() {
        return format!("hostmaster.{}.", zone.origin());
    }
    ensure_trailing_dot(&email.replacen('@', ".", 1))
}
