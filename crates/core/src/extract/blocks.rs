//! Block scanner and field lookup for the pattern extractor.

use regex::Regex;
use std::sync::OnceLock;

const MARKER_PATTERN: &str = r"(?i)\b(agent|task)\s*:";
const LABEL_PATTERN: &str =
    r"(?i)\b(expected_output|output|description|backstory|tools|tool|name|role|goal|agent)\s*:";
const LEADING_LABEL_PATTERN: &str =
    r"(?i)^\s*(expected_output|output|description|backstory|tools|tool|name|role|goal|agent)\s*:";

static MARKER: OnceLock<Option<Regex>> = OnceLock::new();
static LABEL: OnceLock<Option<Regex>> = OnceLock::new();
static LEADING_LABEL: OnceLock<Option<Regex>> = OnceLock::new();

pub(crate) fn cached(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Agent,
    Task,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block {
    pub kind: BlockKind,
    pub body: String,
}

/// A labelled field inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Name,
    Role,
    Goal,
    Backstory,
    Tools,
    Description,
    ExpectedOutput,
    Agent,
}

impl Field {
    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "name" => Some(Field::Name),
            "role" => Some(Field::Role),
            "goal" => Some(Field::Goal),
            "backstory" => Some(Field::Backstory),
            "tool" | "tools" => Some(Field::Tools),
            "description" => Some(Field::Description),
            "expected_output" | "output" => Some(Field::ExpectedOutput),
            "agent" => Some(Field::Agent),
            _ => None,
        }
    }
}

/// Splits text into agent and task blocks.
///
/// A block starts after an `agent:` or `task:` marker and runs until the
/// next marker that opens a block, or the end of the text. Inside a task
/// block, `agent:` followed by a plain value on the same line is the task's
/// assignment rather than a new agent. Lines starting with `#` are ignored.
pub(crate) fn split_blocks(text: &str) -> Vec<Block> {
    let (Some(marker), Some(leading_label)) = (
        cached(&MARKER, MARKER_PATTERN),
        cached(&LEADING_LABEL, LEADING_LABEL_PATTERN),
    ) else {
        return Vec::new();
    };

    let cleaned = strip_comments(text);

    // (kind, marker start, body start)
    let mut opened: Vec<(BlockKind, usize, usize)> = Vec::new();
    for caps in marker.captures_iter(&cleaned) {
        let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let kind = if word.as_str().eq_ignore_ascii_case("task") {
            BlockKind::Task
        } else {
            BlockKind::Agent
        };

        if kind == BlockKind::Agent && matches!(opened.last(), Some((BlockKind::Task, _, _))) {
            let rest = rest_of_line(&cleaned[whole.end()..]);
            if !rest.trim().is_empty() && !leading_label.is_match(rest) {
                continue;
            }
        }
        opened.push((kind, whole.start(), whole.end()));
    }

    opened
        .iter()
        .enumerate()
        .map(|(i, &(kind, _, body_start))| {
            let body_end = opened
                .get(i + 1)
                .map_or(cleaned.len(), |&(_, next_start, _)| next_start);
            Block {
                kind,
                body: cleaned[body_start..body_end].to_string(),
            }
        })
        .collect()
}

/// Looks up the first occurrence of `field` in a block body.
///
/// The value runs from the label to the next label on the same line, or to
/// the end of the line. Empty values count as absent.
pub(crate) fn field(body: &str, wanted: Field) -> Option<String> {
    let label = cached(&LABEL, LABEL_PATTERN)?;
    let matches: Vec<_> = label.captures_iter(body).collect();

    for (i, caps) in matches.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if Field::from_label(name.as_str()) != Some(wanted) {
            continue;
        }

        let start = whole.end();
        let line_end = start + rest_of_line(&body[start..]).len();
        let end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|next| next.start())
            .filter(|&next_start| next_start < line_end)
            .unwrap_or(line_end);

        let value = body[start..end].trim();
        return (!value.is_empty()).then(|| value.to_string());
    }
    None
}

fn rest_of_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

fn strip_comments(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with('#') {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(cached(&MARKER, MARKER_PATTERN).is_some());
        assert!(cached(&LABEL, LABEL_PATTERN).is_some());
        assert!(cached(&LEADING_LABEL, LEADING_LABEL_PATTERN).is_some());
    }

    #[test]
    fn test_split_interleaved_blocks() {
        let blocks = split_blocks("Task: name: t1\nAgent: name: a1\nTASK : name: t2");
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Task, BlockKind::Agent, BlockKind::Task]);
        assert_eq!(blocks[1].body.trim(), "name: a1");
    }

    #[test]
    fn test_task_agent_field_does_not_open_block() {
        let blocks = split_blocks("Agent: name: a1\nTask: name: t1 agent: a1");
        assert_eq!(blocks.len(), 2);
        assert_eq!(field(&blocks[1].body, Field::Agent).as_deref(), Some("a1"));
    }

    #[test]
    fn test_agent_marker_with_labels_after_task_opens_block() {
        let blocks = split_blocks("Task: name: t1\nAgent: name: a2 role: R");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, BlockKind::Agent);
    }

    #[test]
    fn test_marker_needs_word_boundary() {
        let blocks = split_blocks("Agent: name: a1 goal: coordinate the subtask: plan");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let blocks = split_blocks("# Agent: ignored\nAgent: name: a1\n# task: also ignored");
        assert_eq!(blocks.len(), 1);
        assert_eq!(field(&blocks[0].body, Field::Name).as_deref(), Some("a1"));
    }

    #[test]
    fn test_field_value_stops_at_next_label() {
        let body = " name: a1 role: Research Lead goal: Find things\nbackstory: Curious";
        assert_eq!(field(body, Field::Name).as_deref(), Some("a1"));
        assert_eq!(field(body, Field::Role).as_deref(), Some("Research Lead"));
        assert_eq!(field(body, Field::Goal).as_deref(), Some("Find things"));
        assert_eq!(field(body, Field::Backstory).as_deref(), Some("Curious"));
        assert_eq!(field(body, Field::Tools), None);
    }

    #[test]
    fn test_output_labels() {
        assert_eq!(
            field("expected_output: A report", Field::ExpectedOutput).as_deref(),
            Some("A report")
        );
        assert_eq!(
            field("Output: A list", Field::ExpectedOutput).as_deref(),
            Some("A list")
        );
    }

    #[test]
    fn test_empty_field_is_absent() {
        assert_eq!(field("name:   \nrole: R", Field::Name), None);
    }
}
