//! Field name matching between source and destination.
//!
//! Names are compared in exported form, the way a field would be spelled
//! if it were public in Go: `created_at` is matched as `CreatedAt`.
//! Aliases given through `copier` tags are already in that form.

use alloc::string::String;

use crate::tag::Flags;

/// Converts a field or method name into its exported form.
///
/// Names that already start with an upper case letter are kept.
///
/// ```
/// use vc_copy::exported_name;
///
/// assert_eq!(exported_name("comment_field"), "CommentField");
/// assert_eq!(exported_name("r#type"), "Type");
/// assert_eq!(exported_name("ID"), "ID");
/// ```
pub fn exported_name(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    if name.starts_with(|c: char| c.is_uppercase()) {
        return String::from(name);
    }

    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Maps a source field name to the destination field it should be written to.
pub(crate) fn dest_name_of<'a>(src_name: &'a str, flags: &'a Flags) -> &'a str {
    resolve(src_name, flags, Direction::Forward)
}

/// Maps a destination field name to the source member it is read from.
pub(crate) fn source_name_of<'a>(dst_name: &'a str, flags: &'a Flags) -> &'a str {
    resolve(dst_name, flags, Direction::Reverse)
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

fn resolve<'a>(name: &'a str, flags: &'a Flags, direction: Direction) -> &'a str {
    let (own, other) = match direction {
        Direction::Forward => (&flags.src_names, &flags.dst_names),
        Direction::Reverse => (&flags.dst_names, &flags.src_names),
    };

    match own.alias_of(name) {
        Some(alias) => other.field_of(alias).unwrap_or(alias),
        None => other.field_of(name).unwrap_or(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagNameMapping;

    fn flags() -> Flags {
        let mut src_names = TagNameMapping::default();
        src_names.insert("FieldDiffer2", "Differ2");
        let mut dst_names = TagNameMapping::default();
        dst_names.insert("FieldDifferA", "Differ1");
        dst_names.insert("FieldDifferB", "Differ2");
        Flags {
            src_names,
            dst_names,
            ..Default::default()
        }
    }

    #[test]
    fn exported_forms() {
        assert_eq!(exported_name("name"), "Name");
        assert_eq!(exported_name("field_differ_a"), "FieldDifferA");
        assert_eq!(exported_name("differ1"), "Differ1");
        assert_eq!(exported_name("_hidden"), "Hidden");
        assert_eq!(exported_name("Name"), "Name");
    }

    #[test]
    fn forward_resolution() {
        let flags = flags();
        assert_eq!(dest_name_of("Differ1", &flags), "FieldDifferA");
        assert_eq!(dest_name_of("FieldDiffer2", &flags), "FieldDifferB");
        assert_eq!(dest_name_of("Name", &flags), "Name");
    }

    #[test]
    fn reverse_resolution() {
        let flags = flags();
        assert_eq!(source_name_of("FieldDifferB", &flags), "FieldDiffer2");
        assert_eq!(source_name_of("FieldDifferA", &flags), "Differ1");
        assert_eq!(source_name_of("Address", &flags), "Address");
    }
}
