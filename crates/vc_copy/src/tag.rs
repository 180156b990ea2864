use alloc::string::String;
use alloc::vec::Vec;

use vc_utils::hash::HashMap;

use crate::error::TagError;
use crate::shape::FlatField;

/// The field tag key read by the copier.
pub const TAG_KEY: &str = "copier";

// -----------------------------------------------------------------------------
// FieldTag

/// A parsed `copier` field tag.
///
/// The tag is a comma separated list of tokens:
///
/// - `-`: never write this field, all other tokens are ignored.
/// - `must`: the field has to be written, or the copy panics.
/// - `nopanic`: together with `must`, report an error instead of panicking.
/// - anything else: an alias, which must start with an upper case letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTag<'a> {
    pub must: bool,
    pub no_panic: bool,
    pub ignore: bool,
    pub alias: Option<&'a str>,
}

/// Parses a `copier` tag.
///
/// ```
/// use vc_copy::{FieldTag, parse_tag};
///
/// let tag = parse_tag("must,Name").unwrap();
/// assert!(tag.must);
/// assert_eq!(tag.alias, Some("Name"));
///
/// assert_eq!(parse_tag("-,name").unwrap(), FieldTag { ignore: true, ..Default::default() });
/// assert!(parse_tag("name").is_err());
/// ```
pub fn parse_tag(tag: &str) -> Result<FieldTag<'_>, TagError> {
    let mut parsed = FieldTag::default();

    for token in tag.split(',') {
        match token {
            "-" => {
                return Ok(FieldTag {
                    ignore: true,
                    ..FieldTag::default()
                });
            }
            "must" => parsed.must = true,
            "nopanic" => parsed.no_panic = true,
            _ if token.starts_with(char::is_uppercase) => parsed.alias = Some(token.trim()),
            _ => return Err(TagError::LowercaseAlias(String::from(token))),
        }
    }

    Ok(parsed)
}

// -----------------------------------------------------------------------------
// TagNameMapping

/// Two way mapping between field names and their tag aliases.
#[derive(Debug, Default)]
pub(crate) struct TagNameMapping {
    field_to_alias: HashMap<String, &'static str>,
    alias_to_field: HashMap<&'static str, String>,
}

impl TagNameMapping {
    pub fn insert(&mut self, field: impl Into<String>, alias: &'static str) {
        let field = field.into();
        self.alias_to_field.insert(alias, field.clone());
        self.field_to_alias.insert(field, alias);
    }

    #[inline]
    pub fn alias_of(&self, field: &str) -> Option<&'static str> {
        self.field_to_alias.get(field).copied()
    }

    #[inline]
    pub fn field_of(&self, alias: &str) -> Option<&str> {
        self.alias_to_field.get(alias).map(String::as_str)
    }
}

// -----------------------------------------------------------------------------
// Flags

/// Tag information of one source and destination struct pair.
#[derive(Debug, Default)]
pub(crate) struct Flags {
    /// Parsed tags of the destination fields, by flattened index.
    pub dst_tags: Vec<FieldTag<'static>>,
    pub src_names: TagNameMapping,
    pub dst_names: TagNameMapping,
}

impl Flags {
    pub fn collect(src: &[FlatField], dst: &[FlatField]) -> Result<Self, TagError> {
        let mut flags = Flags {
            dst_tags: Vec::with_capacity(dst.len()),
            ..Flags::default()
        };

        for field in dst {
            let tag = field_tag(field)?;
            if let Some(alias) = tag.alias {
                flags.dst_names.insert(field.name.as_str(), alias);
            }
            flags.dst_tags.push(tag);
        }

        for field in src {
            if let Some(alias) = field_tag(field)?.alias {
                flags.src_names.insert(field.name.as_str(), alias);
            }
        }

        Ok(flags)
    }
}

fn field_tag(field: &FlatField) -> Result<FieldTag<'static>, TagError> {
    match field.field.tag(TAG_KEY) {
        Some(tag) if !tag.is_empty() => parse_tag(tag),
        _ => Ok(FieldTag::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        let tag = parse_tag("must,nopanic").unwrap();
        assert!(tag.must && tag.no_panic && !tag.ignore);
        assert_eq!(tag.alias, None);

        assert_eq!(parse_tag("Differ1").unwrap().alias, Some("Differ1"));
        assert_eq!(parse_tag("First,Second").unwrap().alias, Some("Second"));
        assert_eq!(parse_tag("Name ").unwrap().alias, Some("Name"));
    }

    #[test]
    fn ignore_short_circuits() {
        let tag = parse_tag("-,must").unwrap();
        assert!(tag.ignore);
        assert!(!tag.must);
    }

    #[test]
    fn invalid_tokens() {
        assert_eq!(
            parse_tag("differ1"),
            Err(TagError::LowercaseAlias(String::from("differ1")))
        );
        assert!(parse_tag("").is_err());
        assert!(parse_tag("must,").is_err());
        assert!(parse_tag(" must").is_err());
    }

    #[test]
    fn mapping() {
        let mut names = TagNameMapping::default();
        names.insert("FieldDifferA", "Differ1");
        assert_eq!(names.alias_of("FieldDifferA"), Some("Differ1"));
        assert_eq!(names.field_of("Differ1"), Some("FieldDifferA"));
        assert_eq!(names.field_of("FieldDifferA"), None);
    }
}
