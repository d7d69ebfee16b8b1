use crate::{FindError, Result};

/// Prefix every EC2 instance id carries on the wire.
pub const INSTANCE_ID_PREFIX: &str = "i-";

/// What to search the instance inventory for.
///
/// Exactly one of the two CLI inputs survives resolution, so "both set"
/// is unrepresentable past this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Substring match against any tag value.
    Tag(String),
    /// Exact match against a normalized instance id.
    Id(String),
}

impl Query {
    /// Resolve the two optional CLI inputs into a single query.
    ///
    /// An empty string behaves like an omitted flag. Supplying neither
    /// input is an error, as is supplying both.
    pub fn resolve(tag: Option<&str>, instance: Option<&str>) -> Result<Self> {
        let tag = tag.filter(|s| !s.is_empty());
        let instance = instance.filter(|s| !s.is_empty());

        match (tag, instance) {
            (Some(_), Some(_)) => Err(FindError::ConflictingSearchTargets),
            (Some(tag), None) => Ok(Query::Tag(tag.to_string())),
            (None, Some(id)) => Ok(Query::Id(normalize_instance_id(id))),
            (None, None) => Err(FindError::MissingSearchTarget),
        }
    }

    /// Provider-side filter value for a tag query: the raw substring
    /// wrapped in wildcards so the match is "contains", not "equals".
    pub fn tag_filter_value(substring: &str) -> String {
        format!("*{}*", substring)
    }
}

/// Prepend the `i-` prefix when the user typed a bare id suffix.
/// Anything else passes through verbatim; a malformed id surfaces as an
/// error or empty result from the API, not here.
fn normalize_instance_id(id: &str) -> String {
    if id.starts_with(INSTANCE_ID_PREFIX) {
        id.to_string()
    } else {
        format!("{}{}", INSTANCE_ID_PREFIX, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_requires_an_input() {
        let err = Query::resolve(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must specify tag or instance to search for"
        );
    }

    #[test]
    fn test_resolve_treats_empty_strings_as_absent() {
        assert!(matches!(
            Query::resolve(Some(""), Some("")),
            Err(FindError::MissingSearchTarget)
        ));
        assert_eq!(
            Query::resolve(Some(""), Some("0abc123")).unwrap(),
            Query::Id("i-0abc123".to_string())
        );
    }

    #[test]
    fn test_resolve_rejects_both_inputs() {
        assert!(matches!(
            Query::resolve(Some("web"), Some("i-0abc123")),
            Err(FindError::ConflictingSearchTargets)
        ));
    }

    #[test]
    fn test_resolve_tag_keeps_raw_substring() {
        assert_eq!(
            Query::resolve(Some("web"), None).unwrap(),
            Query::Tag("web".to_string())
        );
    }

    #[test]
    fn test_tag_filter_value_is_wildcard_wrapped() {
        assert_eq!(Query::tag_filter_value("web"), "*web*");
        assert_eq!(Query::tag_filter_value("a b"), "*a b*");
    }

    #[test]
    fn test_bare_id_gets_prefixed() {
        assert_eq!(
            Query::resolve(None, Some("0abc123")).unwrap(),
            Query::Id("i-0abc123".to_string())
        );
    }

    #[test]
    fn test_prefixed_id_unchanged() {
        assert_eq!(
            Query::resolve(None, Some("i-0abc123")).unwrap(),
            Query::Id("i-0abc123".to_string())
        );
    }

    #[test]
    fn test_id_is_not_validated_beyond_prefix() {
        assert_eq!(
            Query::resolve(None, Some("not an id")).unwrap(),
            Query::Id("i-not an id".to_string())
        );
    }
}
