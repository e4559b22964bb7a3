use std::net::Ipv6Addr;

pub fn validate_zone_name(name: &str) -> Result<(), String> {
    let name = name.trim().trim_end_matches('.');
    if name.is_empty() {
        return Err("Zone name cannot be empty".to_string());
    }
    if name.len() > 253 {
        return Err(format!("Zone name '{name}' cannot exceed 253 characters"));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(format!("Zone name '{name}' contains an empty label"));
        }
        if label.len() > 63 {
            return Err(format!("Zone name '{name}' has a label longer than 63 characters"));
        }
        let valid_chars = label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_chars {
            return Err(format!("Zone name '{name}' contains invalid characters"));
        }
    }
    Ok(())
}

/// Zone file names are relative artifact names; they must never escape the zone directory.
pub fn validate_file_name(file_name: &str) -> Result<(), String> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err("Zone file name cannot be empty".to_string());
    }
    if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
        return Err(format!(
            "Zone file name '{file_name}' must be a bare file name"
        ));
    }
    if file_name.len() > 255 {
        return Err(format!("Zone file name '{file_name}' cannot exceed 255 characters"));
    }
    if file_name.starts_with('.') || file_name.chars().any(|c| c.is_control() || c == ' ') {
        return Err(format!(
            "Zone file name '{}' must not be hidden or contain spaces",
            file_name.escape_debug()
        ));
    }
    // Backup and temporary siblings belong to the artifact writer.
    if RESERVED_SUFFIXES.iter().any(|s| file_name.ends_with(s)) {
        return Err(format!(
            "Zone file name '{file_name}' must not end in {}",
            RESERVED_SUFFIXES.join(" or ")
        ));
    }
    Ok(())
}

const RESERVED_SUFFIXES: [&str; 2] = [".bak", ".tmp"];

fn is_host_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Relative or absolute host name made of letters, digits, `-` and `_`.
fn is_host_name(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    !name.is_empty() && name.len() <= 253 && name.split('.').all(is_host_label)
}

/// Record owner: `@`, a host name, or a wildcard (`*`, `*.sub`).
pub fn validate_owner_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() || name == "@" || name == "*" {
        return Ok(());
    }
    let rest = name.strip_prefix("*.").unwrap_or(name);
    if is_host_name(rest) {
        Ok(())
    } else {
        Err(format!(
            "owner '{}' is not a valid host name",
            name.escape_debug()
        ))
    }
}

/// Record target (CNAME, NS, PTR, MX, SRV): `@` or a host name.
///
/// Blank targets are left to the renderer, which skips them with a diagnostic.
pub fn validate_target_name(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() || value == "@" || is_host_name(value) {
        Ok(())
    } else {
        Err(format!(
            "target '{}' is not a valid host name",
            value.escape_debug()
        ))
    }
}

/// SOA MNAME: empty (derived) or a host name.
pub fn validate_nameserver(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() || is_host_name(value) {
        Ok(())
    } else {
        Err(format!(
            "primary nameserver '{}' is not a valid host name",
            value.escape_debug()
        ))
    }
}

/// SOA RNAME given as an e-mail address; the first `@` becomes a label separator.
pub fn validate_admin_email(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() || is_host_name(&value.replacen('@', ".", 1)) {
        Ok(())
    } else {
        Err(format!(
            "admin e-mail '{}' cannot be expressed as a zone-file mailbox",
            value.escape_debug()
        ))
    }
}

/// Free-form SOA fields end up in zone-file text verbatim.
pub fn validate_no_control_chars(field: &str, value: &str) -> Result<(), String> {
    if value.chars().any(char::is_control) {
        Err(format!("{field} contains control characters"))
    } else {
        Ok(())
    }
}

/// Dotted-quad with exactly four decimal octets, each 0-255.
pub fn validate_ipv4(value: &str) -> Result<(), String> {
    let octets: Vec<&str> = value.trim().split('.').collect();
    let well_formed = octets.len() == 4
        && octets.iter().all(|o| {
            !o.is_empty()
                && o.len() <= 3
                && o.chars().all(|c| c.is_ascii_digit())
                && o.parse::<u16>().map(|n| n <= 255).unwrap_or(false)
        });

    if !well_formed {
        return Err(format!("'{value}' is not a valid IPv4 address"));
    }
    Ok(())
}

pub fn validate_ipv6(value: &str) -> Result<(), String> {
    value
        .trim()
        .parse::<Ipv6Addr>()
        .map(|_| ())
        .map_err(|_| format!("'{value}' is not a valid IPv6 address"))
}

pub fn validate_acl_entry(entry: &str) -> Result<(), String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err("ACL entries cannot be empty".to_string());
    }
    if entry.contains(';')
        || entry.contains('{')
        || entry.contains('}')
        || entry.contains('"')
        || entry.chars().any(char::is_control)
    {
        return Err(format!("ACL entry '{entry}' contains forbidden characters"));
    }
    Ok(())
}
