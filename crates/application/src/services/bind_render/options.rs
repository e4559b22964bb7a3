use netpanel_domain::{DnsConfiguration, ResolvedPaths, ZoneType};
use std::fmt::Write;

const HEADER: &str = "// Generated by netpanel - manual changes will be overwritten";

/// Render the global options file.
///
/// Empty `listenOn` and `allowQuery` mean `any`; empty `allowRecursion`
/// means `localhost`. IPv6 listen addresses go to `listen-on-v6`.
pub fn render_options(config: &DnsConfiguration, paths: &ResolvedPaths) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "options {{");
    let _ = writeln!(out, "    directory \"{}\";", paths.zones_dir.display());

    let (v6, v4): (Vec<&String>, Vec<&String>) =
        config.listen_on.iter().partition(|a| a.contains(':'));
    if config.listen_on.is_empty() {
        let _ = writeln!(out, "    listen-on {{ any; }};");
        let _ = writeln!(out, "    listen-on-v6 {{ any; }};");
    } else {
        let _ = writeln!(out, "    listen-on {};", acl_block(&v4, "none"));
        let _ = writeln!(out, "    listen-on-v6 {};", acl_block(&v6, "none"));
    }

    let allow_query: Vec<&String> = config.allow_query.iter().collect();
    let _ = writeln!(out, "    allow-query {};", acl_block(&allow_query, "any"));
    let allow_recursion: Vec<&String> = config.allow_recursion.iter().collect();
    let _ = writeln!(
        out,
        "    allow-recursion {};",
        acl_block(&allow_recursion, "localhost")
    );

    if !config.forwarders.is_empty() {
        let _ = writeln!(out, "    forwarders {{");
        for forwarder in &config.forwarders {
            let _ = writeln!(out, "        {};", forwarder.trim());
        }
        let _ = writeln!(out, "    }};");
    }

    let dnssec = if config.dnssec_validation { "auto" } else { "no" };
    let _ = writeln!(out, "    dnssec-validation {};", dnssec);
    let _ = writeln!(out, "    recursion yes;");
    if config.query_logging {
        let _ = writeln!(out, "    querylog yes;");
    }
    let _ = writeln!(out, "}};");
    out.push('\n');

    render_logging(&mut out, config.query_logging);
    out.push('\n');

    let _ = writeln!(out, "include \"{}\";", paths.zone_include_file.display());
    out
}

fn render_logging(out: &mut String, query_logging: bool) {
    let _ = writeln!(out, "logging {{");
    let _ = writeln!(out, "    channel default_log {{");
    let _ = writeln!(out, "        file \"named.log\" versions 3 size 5m;");
    let _ = writeln!(out, "        severity info;");
    let _ = writeln!(out, "        print-time yes;");
    let _ = writeln!(out, "        print-severity yes;");
    let _ = writeln!(out, "        print-category yes;");
    let _ = writeln!(out, "    }};");
    let _ = writeln!(out, "    category default {{ default_log; }};");
    if query_logging {
        let _ = writeln!(out, "    channel query_log {{");
        let _ = writeln!(out, "        file \"queries.log\" versions 5 size 10m;");
        let _ = writeln!(out, "        severity info;");
        let _ = writeln!(out, "        print-time yes;");
        let _ = writeln!(out, "    }};");
        let _ = writeln!(out, "    category queries {{ query_log; }};");
    }
    let _ = writeln!(out, "}};");
}

/// Render the zone-inclusion file, one stanza per zone in order.
pub fn render_zone_inclusions(config: &DnsConfiguration, paths: &ResolvedPaths) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HEADER);

    for zone in &config.zones {
        out.push('\n');
        let _ = writeln!(out, "zone \"{}\" {{", zone.origin());
        let _ = writeln!(out, "    type {};", zone.zone_type);

        match zone.zone_type {
            ZoneType::Master => {
                let _ = writeln!(
                    out,
                    "    file \"{}\";",
                    paths.zone_file_reference(&zone.file_name)
                );
                let allow_update = zone.allow_update_or_default();
                let allow_update: Vec<&String> = allow_update.iter().collect();
                let _ = writeln!(out, "    allow-update {};", acl_block(&allow_update, "none"));
            }
            ZoneType::Slave => {
                let _ = writeln!(
                    out,
                    "    file \"{}\";",
                    paths.zone_file_reference(&zone.file_name)
                );
                let masters: Vec<&String> = zone.masters.iter().collect();
                let _ = writeln!(out, "    masters {};", acl_block(&masters, "none"));
            }
            ZoneType::Forward => {
                let forwarders = if zone.forwarders.is_empty() {
                    &config.forwarders
                } else {
                    &zone.forwarders
                };
                let forwarders: Vec<&String> = forwarders.iter().collect();
                let _ = writeln!(out, "    forward only;");
                let _ = writeln!(out, "    forwarders {};", list_block(&forwarders));
            }
        }

        if zone.zone_type != ZoneType::Forward && !config.allow_transfer.is_empty() {
            let allow_transfer: Vec<&String> = config.allow_transfer.iter().collect();
            let _ = writeln!(
                out,
                "    allow-transfer {};",
                acl_block(&allow_transfer, "none")
            );
        }
        let _ = writeln!(out, "}};");
    }

    out
}

/// `{ a; b; }`, or `{ <fallback>; }` when empty.
fn acl_block(entries: &[&String], fallback: &str) -> String {
    if entries.is_empty() {
        format!("{{ {}; }}", fallback)
    } else {
        list_block(entries)
    }
}

fn list_block(entries: &[&String]) -> String {
    if entries.is_empty() {
        return "{ }".to_string();
    }
    let body: Vec<String> = entries.iter().map(|e| format!("{};", e.trim())).collect();
    format!("{{ {} }}", body.join(" "))
}
