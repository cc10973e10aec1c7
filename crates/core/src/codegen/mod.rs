//! Code generators.
//!
//! Pure templating of validated configurations into Python source for the
//! two target frameworks. Output depends only on the input configuration:
//! rendering the same configuration twice yields byte-identical text.

pub mod artifacts;
pub mod crewai;
pub mod langgraph;

pub use artifacts::{env_template, script_artifact, Artifact};

use std::collections::{HashMap, HashSet};

/// Tools whose generated code checks for a credential at startup.
const CREDENTIAL_VARS: &[(&str, &str)] = &[
    ("SerperDevTool", "SERPER_API_KEY"),
    ("BrowserTool", "BROWSERLESS_API_KEY"),
    ("GmailTool", "GMAIL_TOKEN_PATH"),
];

/// Line-oriented source builder.
#[derive(Debug, Default)]
pub(crate) struct Source {
    lines: Vec<String>,
}

impl Source {
    pub(crate) fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Joins the lines with a trailing newline.
    pub(crate) fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Converts an arbitrary name into a Python identifier.
pub fn py_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Python identifiers for one list of names, unique within that list.
///
/// Names that sanitize to an identifier already handed out get `_2`, `_3`,
/// ... in list order. Repeated names share one identifier.
#[derive(Debug)]
pub(crate) struct Idents {
    by_name: HashMap<String, String>,
}

impl Idents {
    pub(crate) fn assign<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut taken: HashSet<String> = HashSet::new();
        let mut by_name = HashMap::new();
        for name in names {
            if by_name.contains_key(name) {
                continue;
            }
            let base = py_ident(name);
            let ident = if taken.contains(&base) {
                (2..)
                    .map(|n| format!("{base}_{n}"))
                    .find(|candidate| !taken.contains(candidate))
                    .unwrap_or_else(|| base.clone())
            } else {
                base
            };
            taken.insert(ident.clone());
            by_name.insert(name.to_string(), ident);
        }
        Self { by_name }
    }

    /// The identifier for `name`; unknown names are sanitized on the spot.
    pub(crate) fn get(&self, name: &str) -> String {
        self.by_name
            .get(name)
            .cloned()
            .unwrap_or_else(|| py_ident(name))
    }
}

/// Single-quoted Python string literal.
pub fn py_str(value: &str) -> String {
    quoted(value, '\'')
}

/// Double-quoted Python string literal.
pub fn py_dstr(value: &str) -> String {
    quoted(value, '"')
}

fn quoted(value: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

pub(crate) fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Sorted, distinct Python identifiers of the given tools.
pub(crate) fn tool_idents<'a>(tools: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut idents: Vec<String> = tools.into_iter().map(|t| py_ident(t)).collect();
    idents.sort();
    idents.dedup();
    idents
}

/// Sorted credential variables checked by the generated code.
pub(crate) fn credential_vars<'a>(tools: impl IntoIterator<Item = &'a String>) -> Vec<&'static str> {
    let tools: Vec<&String> = tools.into_iter().collect();
    let mut vars: Vec<&'static str> = CREDENTIAL_VARS
        .iter()
        .filter(|(tool, _)| tools.iter().any(|t| t.as_str() == *tool))
        .map(|&(_, var)| var)
        .collect();
    vars.sort_unstable();
    vars.dedup();
    vars
}

/// `load_dotenv()` and one presence check per variable.
pub(crate) fn emit_env_checks(src: &mut Source, vars: &[&str]) {
    if vars.is_empty() {
        return;
    }
    src.blank();
    src.line("import os");
    src.line("from dotenv import load_dotenv");
    src.blank();
    src.line("# Load environment variables");
    src.line("load_dotenv()");
    src.blank();
    for var in vars {
        src.line(format!("if {} not in os.environ:", py_str(var)));
        src.line(format!(
            "    raise ValueError(\"Please set the {var} environment variable\")"
        ));
    }
    src.blank();
}
