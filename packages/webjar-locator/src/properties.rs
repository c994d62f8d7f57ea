//! Parser for flat `key=value` property documents such as `pom.properties`.

use std::collections::HashMap;

/// A parsed property document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Parses a property document.
    ///
    /// Supports `#`/`!` comments, `=`, `:` or whitespace separators, backslash
    /// line continuations and the usual escapes. Later keys override earlier ones.
    pub fn parse(input: &str) -> Self {
        let mut entries = HashMap::new();
        let mut lines = input.lines();

        while let Some(line) = lines.next() {
            let mut logical = line.trim_start().to_string();
            if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
                continue;
            }

            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            entries.insert(unescape(key), unescape(value));
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix(['=', ':'])
                    .map(str::trim_start)
                    .unwrap_or(rest);
                return (&line[..i], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pom_properties() {
        let props = Properties::parse(
            "#Generated by Maven\n\
             #Tue Mar 05 10:00:00 UTC 2024\n\
             version=3.7.1\n\
             groupId=org.webjars\n\
             artifactId=jquery\n",
        );
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("version"), Some("3.7.1"));
        assert_eq!(props.get("groupId"), Some("org.webjars"));
        assert_eq!(props.get("artifactId"), Some("jquery"));
    }

    #[test]
    fn test_separators() {
        let props = Properties::parse("a=1\nb: 2\nc 3\n  d = 4\ne\n");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
        assert_eq!(props.get("c"), Some("3"));
        assert_eq!(props.get("d"), Some("4"));
        assert_eq!(props.get("e"), Some(""));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let props = Properties::parse("! bang comment\n\n   \n# hash=comment\nkey=value\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("hash"), None);
    }

    #[test]
    fn test_line_continuation() {
        let props = Properties::parse("list=a,\\\n    b,\\\n    c\nafter=x\n");
        assert_eq!(props.get("list"), Some("a,b,c"));
        assert_eq!(props.get("after"), Some("x"));
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        let props = Properties::parse("path=c:\\\\\nnext=1\n");
        assert_eq!(props.get("path"), Some("c:\\"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn test_escapes() {
        let props = Properties::parse("key\\=with\\:seps=tab\\there\nunicode=caf\\u00e9\n");
        assert_eq!(props.get("key=with:seps"), Some("tab\there"));
        assert_eq!(props.get("unicode"), Some("café"));
    }

    #[test]
    fn test_later_value_wins() {
        let props = Properties::parse("version=1\nversion=2\n");
        assert_eq!(props.get("version"), Some("2"));
    }

    #[test]
    fn test_crlf_input() {
        let props = Properties::parse("artifactId=jquery\r\nversion=3.7.1\r\n");
        assert_eq!(props.get("artifactId"), Some("jquery"));
        assert_eq!(props.get("version"), Some("3.7.1"));
    }
}
