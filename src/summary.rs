use crate::manifest::Manifest;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

pub const NOT_FOUND: &str = "No package.json found";
pub const NO_INFORMATION: &str = "No information found";

/// Outcome of locating and reading a manifest, as seen by the summarizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Nothing found up to the root, or the file could not be read/decoded.
    NotFound,
    Loaded { dir: PathBuf, manifest: Manifest },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Also show repository, keywords, files and dependency tables.
    pub extended: bool,
}

/// Render `lookup` to output lines, without trailing newlines.
pub fn summarize(lookup: &Lookup, opts: SummaryOptions) -> Vec<String> {
    let (dir, m) = match lookup {
        Lookup::NotFound => return vec![NOT_FOUND.to_string()],
        Lookup::Loaded { dir, manifest } => (dir, manifest),
    };

    let mut lines = vec![format!("Found package.json in {}", dir.display())];

    let fields = [
        ("Name", &m.name),
        ("Version", &m.version),
        ("Description", &m.description),
        ("Main", &m.main),
        ("Homepage", &m.homepage),
        ("Author", &m.author),
        ("Email", &m.email),
        ("License", &m.license),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("{label}: {value}"));
        }
    }
    push_table(&mut lines, "Scripts", &m.scripts);

    if opts.extended {
        if let Some(repo) = &m.repository {
            lines.push(format!("Repository: {repo}"));
        }
        if !m.keywords.is_empty() {
            lines.push(format!("Keywords: {}", m.keywords.join(", ")));
        }
        if !m.files.is_empty() {
            lines.push(format!("Files: {}", m.files.join(", ")));
        }
        push_table(&mut lines, "Dependencies", &m.dependencies);
        push_table(&mut lines, "DevDependencies", &m.dev_dependencies);
    }

    if lines.len() == 1 {
        lines.push(NO_INFORMATION.to_string());
    }
    lines
}

/// Write the summary of `lookup`, one line per entry.
pub fn write_summary<W: Write>(
    out: &mut W,
    lookup: &Lookup,
    opts: SummaryOptions,
) -> io::Result<()> {
    for line in summarize(lookup, opts) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// `<title>:` followed by one `   <key><pad>: <value>` line per entry, the
/// colons lined up on the longest key. Nothing at all for an empty table.
fn push_table(lines: &mut Vec<String>, title: &str, table: &BTreeMap<String, Value>) {
    if table.is_empty() {
        return;
    }
    lines.push(format!("{title}:"));

    let width = table.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (key, value) in table {
        let pad = " ".repeat(width - key.chars().count());
        lines.push(format!("   {key}{pad}: {}", display_value(value)));
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_manifest;

    fn loaded(json: &str) -> Lookup {
        Lookup::Loaded {
            dir: PathBuf::from("/work/demo"),
            manifest: parse_manifest(json.as_bytes()).unwrap(),
        }
    }

    fn render(json: &str) -> Vec<String> {
        summarize(&loaded(json), SummaryOptions::default())
    }

    #[test]
    fn not_found_is_a_single_line() {
        assert_eq!(
            summarize(&Lookup::NotFound, SummaryOptions::default()),
            ["No package.json found"]
        );
    }

    #[test]
    fn name_only_prints_two_lines() {
        assert_eq!(
            render(r#"{ "name": "demo", "version": "", "scripts": {} }"#),
            ["Found package.json in /work/demo", "Name: demo"]
        );
    }

    #[test]
    fn empty_manifest_reports_no_information() {
        assert_eq!(
            render(r#"{ "name": "", "license": "", "scripts": null }"#),
            ["Found package.json in /work/demo", "No information found"]
        );
    }

    #[test]
    fn fields_follow_fixed_order_regardless_of_source_order() {
        let lines = render(
            r#"{
                "license": "MIT",
                "email": "e@x.org",
                "author": "A",
                "homepage": "https://x.org",
                "main": "index.js",
                "description": "D",
                "version": "1.0.0",
                "name": "n"
            }"#,
        );
        assert_eq!(
            lines,
            [
                "Found package.json in /work/demo",
                "Name: n",
                "Version: 1.0.0",
                "Description: D",
                "Main: index.js",
                "Homepage: https://x.org",
                "Author: A",
                "Email: e@x.org",
                "License: MIT",
            ]
        );
    }

    #[test]
    fn scripts_are_sorted_and_colon_aligned() {
        let lines = render(r#"{ "scripts": { "build": "x", "a": "y" } }"#);
        assert_eq!(
            lines,
            [
                "Found package.json in /work/demo",
                "Scripts:",
                "   a    : y",
                "   build: x",
            ]
        );
    }

    #[test]
    fn non_string_script_values_render_as_json() {
        let lines = render(r#"{ "scripts": { "n": 1, "b": true, "o": {"k": "v"} } }"#);
        assert_eq!(&lines[2..], ["   b: true", "   n: 1", r#"   o: {"k":"v"}"#]);
    }

    #[test]
    fn extended_fields_hidden_by_default() {
        let json = r#"{ "keywords": ["cli"], "dependencies": { "left-pad": "^1" } }"#;
        assert_eq!(
            render(json),
            ["Found package.json in /work/demo", "No information found"]
        );
    }

    #[test]
    fn extended_summary_lists_repository_keywords_and_dependencies() {
        let lookup = loaded(
            r#"{
                "name": "demo",
                "repository": { "type": "git", "url": "https://x.org/demo.git" },
                "keywords": ["cli", "json"],
                "files": ["dist", "README.md"],
                "dependencies": { "serde": "1", "anyhow": "1.0" },
                "devDependencies": { "jest": "^29" }
            }"#,
        );
        let lines = summarize(&lookup, SummaryOptions { extended: true });
        assert_eq!(
            lines,
            [
                "Found package.json in /work/demo",
                "Name: demo",
                "Repository: https://x.org/demo.git",
                "Keywords: cli, json",
                "Files: dist, README.md",
                "Dependencies:",
                "   anyhow: 1.0",
                "   serde : 1",
                "DevDependencies:",
                "   jest: ^29",
            ]
        );
    }

    #[test]
    fn write_summary_terminates_every_line() {
        let mut out = Vec::new();
        let lookup = loaded(r#"{"name":"demo"}"#);
        write_summary(&mut out, &lookup, SummaryOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Found package.json in /work/demo\nName: demo\n"
        );
    }
}
