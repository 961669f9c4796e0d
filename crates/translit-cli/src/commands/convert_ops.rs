use std::io;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use translit_engine::{CasePolicy, MapStyle, Registry, TranslitEngine};

/// Transliterate `text`, or all of stdin when `text` is `None`.
/// Without `--scheme` the configured default scheme is used.
pub fn convert_cmd(engine: &TranslitEngine, scheme: Option<&str>, text: Option<&str>) {
    let id = match scheme {
        Some(name) => die!(engine.resolve_scheme(name), "Error: {}"),
        None => die!(engine.default_scheme(), "Error: default scheme: {}"),
    };
    match text {
        Some(text) => println!("{}", die!(engine.transliterate(text, &id), "Error: {}")),
        None => {
            let out = die!(
                engine.transliterate_reader(io::stdin().lock(), &id),
                "Error: {}"
            );
            print!("{out}");
        }
    }
}

#[derive(Debug, Serialize)]
struct SchemeRow<'a> {
    code: &'a str,
    name: &'a str,
    style: MapStyle,
    case: CasePolicy,
}

fn rows(registry: &Registry) -> Vec<SchemeRow<'_>> {
    registry
        .iter()
        .map(|s| SchemeRow {
            code: s.id().code(),
            name: s.id().name(),
            style: s.style(),
            case: s.case_policy(),
        })
        .collect()
}

pub fn list_cmd(engine: &TranslitEngine, json: bool) {
    let rows = rows(engine.registry());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_table(&rows));
    }
}

/// Two columns: code, then display name. Codes are padded by display
/// width so Cyrillic names line up.
fn format_table(rows: &[SchemeRow<'_>]) -> String {
    let width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.code))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for r in rows {
        let pad = width - UnicodeWidthStr::width(r.code);
        out.push_str(&format!("{}{}  {}\n", r.code, " ".repeat(pad), r.name));
    }
    out
}
