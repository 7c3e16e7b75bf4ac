use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

use crate::domain::errors::MalformedPattern;

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Wildcard(String),
}

/// A document path with wildcards, e.g. `admins/{uid}`.
///
/// A path matches when it has the same number of segments and every literal
/// segment is equal. Wildcards bind the segment at their position.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl DocumentPattern {
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut bindings = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Wildcard(name) if !part.is_empty() => {
                    bindings.insert(name.clone(), part.to_string());
                }
                _ => return None,
            }
        }
        Some(bindings)
    }
}

impl TryFrom<&str> for DocumentPattern {
    type Error = MalformedPattern;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        let mut segments = Vec::new();
        for part in pattern.trim_matches('/').split('/') {
            if part.is_empty() {
                return Err(MalformedPattern::EmptySegment {
                    pattern: pattern.to_string(),
                });
            }
            let segment = match (part.strip_prefix('{'), part.ends_with('}')) {
                (Some(rest), true) => {
                    let name = &rest[..rest.len() - 1];
                    if name.is_empty() || name.contains(|c: char| c == '{' || c == '}') {
                        return Err(MalformedPattern::InvalidWildcard {
                            segment: part.to_string(),
                        });
                    }
                    if segments.contains(&Segment::Wildcard(name.to_string())) {
                        return Err(MalformedPattern::DuplicateWildcard {
                            name: name.to_string(),
                        });
                    }
                    Segment::Wildcard(name.to_string())
                }
                (None, false) if !part.contains(|c: char| c == '{' || c == '}') => {
                    Segment::Literal(part.to_string())
                }
                _ => {
                    return Err(MalformedPattern::InvalidWildcard {
                        segment: part.to_string(),
                    })
                }
            };
            segments.push(segment);
        }
        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }
}

impl fmt::Display for DocumentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
