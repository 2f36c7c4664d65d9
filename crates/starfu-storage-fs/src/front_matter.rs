//! YAML front matter of content documents.

use serde::Deserialize;

/// Fields read from front matter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
}

/// Split the leading `---` fenced block off a document.
///
/// Returns the raw YAML between the fences, or `None` when the document
/// does not start with a fence or the fence is never closed.
pub(crate) fn split_front_matter(source: &str) -> Option<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse the front matter fields of a document.
///
/// Documents without front matter, or with malformed YAML, yield the default
/// (empty) fields.
pub(crate) fn parse_front_matter(source: &str) -> FrontMatter {
    let Some(yaml) = split_front_matter(source) else {
        return FrontMatter::default();
    };
    if yaml.trim().is_empty() {
        return FrontMatter::default();
    }
    serde_yaml::from_str(yaml).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Ignoring malformed front matter");
        FrontMatter::default()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_front_matter() {
        assert_eq!(
            split_front_matter("---\ntitle: Intro\n---\n# Body"),
            Some("title: Intro\n")
        );
        assert_eq!(split_front_matter("---\n---\nBody"), Some(""));
        assert_eq!(split_front_matter("# No front matter"), None);
        assert_eq!(split_front_matter("---\ntitle: Unclosed\n"), None);
    }

    #[test]
    fn test_split_front_matter_crlf() {
        assert_eq!(
            split_front_matter("---\r\ntitle: Intro\r\n---\r\nBody"),
            Some("title: Intro\r\n")
        );
    }

    #[test]
    fn test_parse_title() {
        let fm = parse_front_matter("---\ntitle: \"Getting Started\"\nsidebar: false\n---\n");

        assert_eq!(fm.title.as_deref(), Some("Getting Started"));
    }

    #[test]
    fn test_parse_missing_title() {
        assert_eq!(parse_front_matter("---\ndraft: true\n---\n").title, None);
        assert_eq!(parse_front_matter("# Heading only").title, None);
    }

    #[test]
    fn test_parse_malformed_yaml_is_empty() {
        assert_eq!(parse_front_matter("---\ntitle: [unclosed\n---\n").title, None);
        assert_eq!(parse_front_matter("---\njust text\n---\n").title, None);
    }
}
