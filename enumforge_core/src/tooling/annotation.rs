//! Parsing of `enumforge:` type annotations and member doc comments.

use super::config::{EnumTypeConfig, Handlers};
use crate::enums::SerdeFormat;
use crate::error::{EnumforgeError, Result};

/// Marker that introduces a type annotation inside a doc comment.
pub const ANNOTATION_PREFIX: &str = "enumforge:";

/// Parses the flags of an `enumforge:` doc line, if the line is one.
///
/// ```text
/// enumforge: -json -text -binary -yaml -sql -serde/value -genName -uppercaseFields
/// ```
pub fn parse_type_annotation(type_name: &str, line: &str) -> Result<Option<EnumTypeConfig>> {
    let Some(args) = line.trim().strip_prefix(ANNOTATION_PREFIX) else {
        return Ok(None);
    };

    let mut config = EnumTypeConfig {
        type_name: type_name.to_string(),
        ..EnumTypeConfig::default()
    };

    for flag in args.split_whitespace() {
        match flag {
            "-json" => config.handlers.json = true,
            "-text" => config.handlers.text = true,
            "-binary" => config.handlers.binary = true,
            "-yaml" | "-serde" => config.handlers.yaml = true,
            "-sql" => config.handlers.sql = true,
            "-all" => config.handlers = Handlers::all(),
            "-uppercaseFields" => config.uppercase_fields = true,
            "-genName" => config.generate_name_constants = true,
            "-serde/name" => config.serde_format = SerdeFormat::Name,
            "-serde/value" => config.serde_format = SerdeFormat::Value,
            unknown => {
                return Err(EnumforgeError::invalid_annotation(format!(
                    "unknown flag {unknown:?} on type {type_name}"
                )));
            }
        }
    }

    Ok(Some(config))
}

/// What a member's doc comment says about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDoc {
    pub aliases: Vec<String>,
    pub valid: bool,
    pub comment: Option<String>,
}

/// Interprets member doc lines.
///
/// The first line reads `<alias>[, <alias>..][; <comment>]`; the word
/// `invalid` marks the member invalid. Any further lines are appended to the
/// comment.
pub fn parse_member_doc(lines: &[String]) -> MemberDoc {
    let mut doc = MemberDoc {
        valid: true,
        ..MemberDoc::default()
    };
    let mut comment_parts = Vec::new();

    if let Some((first, rest)) = lines.split_first() {
        let (head, custom) = match first.split_once(';') {
            Some((head, custom)) => (head, Some(custom.trim())),
            None => (first.as_str(), None),
        };

        let mut head = head.to_string();
        if contains_word(&head, "invalid") {
            doc.valid = false;
            head = head.replace("invalid", "");
        }

        doc.aliases = head
            .split(',')
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .map(str::to_string)
            .collect();

        if let Some(custom) = custom.filter(|c| !c.is_empty()) {
            comment_parts.push(custom.to_string());
        }
        comment_parts.extend(
            rest.iter()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty()),
        );
    }

    if !comment_parts.is_empty() {
        doc.comment = Some(comment_parts.join(" "));
    }
    doc
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .any(|token| token == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_non_annotation_lines_are_ignored() {
        assert_eq!(parse_type_annotation("Status", "Just a doc line").unwrap(), None);
    }

    #[test]
    fn test_flags() {
        let config = parse_type_annotation(
            "Status",
            " enumforge: -json -text -sql -serde/value -genName -uppercaseFields",
        )
        .unwrap()
        .unwrap();
        assert_eq!(config.type_name, "Status");
        assert_eq!(config.handlers.enabled(), vec!["json", "text", "sql"]);
        assert_eq!(config.serde_format, SerdeFormat::Value);
        assert!(config.generate_name_constants);
        assert!(config.uppercase_fields);
    }

    #[test]
    fn test_empty_annotation_defaults_to_name() {
        let config = parse_type_annotation("Status", "enumforge:").unwrap().unwrap();
        assert_eq!(config.serde_format, SerdeFormat::Name);
        assert!(config.handlers.enabled().is_empty());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = parse_type_annotation("Status", "enumforge: -xml").unwrap_err();
        assert!(matches!(err, EnumforgeError::InvalidAnnotation(_)));
        assert!(err.to_string().contains("-xml"));
    }

    #[test]
    fn test_member_alias() {
        let doc = parse_member_doc(&lines(&["Active"]));
        assert_eq!(doc.aliases, vec!["Active"]);
        assert!(doc.valid);
        assert_eq!(doc.comment, None);
    }

    #[test]
    fn test_member_invalid_marker() {
        let doc = parse_member_doc(&lines(&["invalid"]));
        assert!(doc.aliases.is_empty());
        assert!(!doc.valid);
    }

    #[test]
    fn test_invalid_inside_a_word_is_not_a_marker() {
        let doc = parse_member_doc(&lines(&["Invalidated"]));
        assert!(doc.valid);
        assert_eq!(doc.aliases, vec!["Invalidated"]);
    }

    #[test]
    fn test_member_aliases_and_custom_comment() {
        let doc = parse_member_doc(&lines(&[
            "Pending, Waiting; step one started",
            "requires manual review",
        ]));
        assert_eq!(doc.aliases, vec!["Pending", "Waiting"]);
        assert_eq!(
            doc.comment.as_deref(),
            Some("step one started requires manual review")
        );
    }

    #[test]
    fn test_comment_only() {
        let doc = parse_member_doc(&lines(&[";1000, step one started"]));
        assert!(doc.aliases.is_empty());
        assert_eq!(doc.comment.as_deref(), Some("1000, step one started"));
    }
}
