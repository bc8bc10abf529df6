//! CSS selector subset
//!
//! Supports what the landing page needs: type, `#id`, `.class`,
//! `[attr]`, `[attr="v"]` and `[attr^="v"]` compounds, the descendant
//! combinator (whitespace) and comma-separated groups.

use crate::utils::errors::{LandingError, Result};

/// Attribute condition inside `[...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    Exists,
    Equals(String),
    Prefix(String),
}

/// One compound selector, e.g. `a.nav-link[href^="#"]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, AttrMatch)>,
}

/// A descendant chain of compounds, outermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complex {
    pub parts: Vec<Compound>,
}

/// A parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub groups: Vec<Complex>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self> {
        let groups = split_top_level(input, ',')
            .into_iter()
            .map(|group| parse_complex(group.trim(), input))
            .collect::<Result<Vec<_>>>()?;

        if groups.is_empty() {
            return Err(LandingError::InvalidSelector(input.to_string()));
        }

        Ok(Self { groups })
    }
}

impl Compound {
    /// Check a single element against this compound
    pub fn matches(&self, tag: &str, attribute: impl Fn(&str) -> Option<String>, has_class: impl Fn(&str) -> bool) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }

        if !self.classes.iter().all(|class| has_class(class)) {
            return false;
        }

        self.attributes.iter().all(|(name, condition)| {
            match (attribute(name), condition) {
                (None, _) => false,
                (Some(_), AttrMatch::Exists) => true,
                (Some(value), AttrMatch::Equals(expected)) => &value == expected,
                (Some(value), AttrMatch::Prefix(prefix)) => value.starts_with(prefix.as_str()),
            }
        })
    }
}

/// Split on `sep` outside of brackets and quotes
fn split_top_level(input: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, c) if c == sep && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn split_whitespace_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, c) if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&input[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        parts.push(&input[s..]);
    }
    parts
}

fn parse_complex(group: &str, original: &str) -> Result<Complex> {
    let parts = split_whitespace_top_level(group)
        .into_iter()
        .map(|part| parse_compound(part, original))
        .collect::<Result<Vec<_>>>()?;

    if parts.is_empty() {
        return Err(LandingError::InvalidSelector(original.to_string()));
    }

    Ok(Complex { parts })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn parse_compound(part: &str, original: &str) -> Result<Compound> {
    let invalid = || LandingError::InvalidSelector(original.to_string());
    let chars: Vec<char> = part.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if pos < chars.len() && chars[pos] == '*' {
        pos += 1;
    } else if pos < chars.len() && is_ident_char(chars[pos]) {
        compound.tag = Some(take_ident(&chars, &mut pos).to_ascii_lowercase());
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                let id = take_ident(&chars, &mut pos);
                if id.is_empty() {
                    return Err(invalid());
                }
                compound.id = Some(id);
            }
            '.' => {
                pos += 1;
                let class = take_ident(&chars, &mut pos);
                if class.is_empty() {
                    return Err(invalid());
                }
                compound.classes.push(class);
            }
            '[' => {
                pos += 1;
                let name = take_ident(&chars, &mut pos);
                if name.is_empty() {
                    return Err(invalid());
                }
                let condition = match chars.get(pos) {
                    Some(']') => AttrMatch::Exists,
                    Some('=') => {
                        pos += 1;
                        AttrMatch::Equals(take_value(&chars, &mut pos).ok_or_else(invalid)?)
                    }
                    Some('^') if chars.get(pos + 1) == Some(&'=') => {
                        pos += 2;
                        AttrMatch::Prefix(take_value(&chars, &mut pos).ok_or_else(invalid)?)
                    }
                    _ => return Err(invalid()),
                };
                if chars.get(pos) != Some(&']') {
                    return Err(invalid());
                }
                pos += 1;
                compound.attributes.push((name, condition));
            }
            _ => return Err(invalid()),
        }
    }

    Ok(compound)
}

fn take_value(chars: &[char], pos: &mut usize) -> Option<String> {
    match chars.get(*pos) {
        Some(&q) if q == '"' || q == '\'' => {
            let start = *pos + 1;
            let end = start + chars[start..].iter().position(|&c| c == q)?;
            *pos = end + 1;
            Some(chars[start..end].iter().collect())
        }
        Some(_) => {
            let value = take_ident(chars, pos);
            (!value.is_empty()).then_some(value)
        }
        None => None,
    }
}
