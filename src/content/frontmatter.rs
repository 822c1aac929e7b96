//! Front-matter parsing
//!
//! A document may open with a block delimited by `---` lines. The block is
//! read line by line into typed fields; anything that does not look like a
//! field is skipped rather than rejected, so a sloppy header never costs the
//! post its body.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Opening and closing line of a front-matter block
const DELIMITER: &str = "---";

lazy_static! {
    static ref KEY_VALUE: Regex = Regex::new(r"^([A-Za-z0-9_]+):\s*(.*)$").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"^\s*-\s+(.*)$").unwrap();
    static ref NUMERAL: Regex = Regex::new(r"^-?\d+(\.\d+)?$").unwrap();
}

/// A single front-matter value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Number(f64),
    Boolean(bool),
    StringList(Vec<String>),
}

impl FieldValue {
    /// Classify a non-empty scalar written after `key:`
    fn from_scalar(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
            let items = raw[1..raw.len() - 1]
                .split(',')
                .map(|item| strip_quotes(item.trim()).to_string())
                .filter(|item| !item.is_empty())
                .collect();
            return FieldValue::StringList(items);
        }

        match raw {
            "true" => return FieldValue::Boolean(true),
            "false" => return FieldValue::Boolean(false),
            _ => {}
        }

        if NUMERAL.is_match(raw) {
            if let Ok(n) = raw.parse::<f64>() {
                return FieldValue::Number(n);
            }
        }

        FieldValue::String(strip_quotes(raw).to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::StringList(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// Parsed front-matter fields, in the order they were written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: IndexMap<String, FieldValue>,
}

/// Cursor state while walking the lines of a block
enum ParseState {
    /// Looking for the next `key: value` line
    SeekKey,
    /// Collecting `- item` lines for a key that had no inline value
    InList { key: String, items: Vec<String> },
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body) with the body trimmed
    pub fn parse(content: &str) -> (Self, &str) {
        match split_block(content) {
            Some((block, body)) => (Self::parse_block(block), body.trim()),
            None => (FrontMatter::default(), content.trim()),
        }
    }

    fn parse_block(block: &str) -> Self {
        let lines: Vec<&str> = block.lines().collect();
        let mut fields = IndexMap::new();
        let mut state = ParseState::SeekKey;
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor].trim_end();

            state = match state {
                ParseState::SeekKey => {
                    cursor += 1;
                    match KEY_VALUE.captures(line) {
                        Some(caps) => {
                            let key = caps[1].to_string();
                            let raw = caps[2].trim();
                            if raw.is_empty() {
                                ParseState::InList {
                                    key,
                                    items: Vec::new(),
                                }
                            } else {
                                fields.insert(key, FieldValue::from_scalar(raw));
                                ParseState::SeekKey
                            }
                        }
                        None => ParseState::SeekKey,
                    }
                }
                ParseState::InList { key, mut items } => match LIST_ITEM.captures(line) {
                    Some(caps) => {
                        items.push(strip_quotes(caps[1].trim()).to_string());
                        cursor += 1;
                        ParseState::InList { key, items }
                    }
                    None => {
                        // Leave the cursor on this line so SeekKey sees it
                        fields.insert(key, FieldValue::StringList(items));
                        ParseState::SeekKey
                    }
                },
            };
        }

        if let ParseState::InList { key, items } = state {
            fields.insert(key, FieldValue::StringList(items));
        }

        Self { fields }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split `content` into (block, rest) when it opens with a delimiter line
/// that is later closed. Returns None otherwise.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some((&content[block_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Strip one matching pair of surrounding quotes
fn strip_quotes(s: &str) -> &str {
    let quoted = s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')));
    if quoted {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
