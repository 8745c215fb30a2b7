use chrono::NaiveDate;

/// A single requested sort: which field, and in which direction. Sorting is
/// always stabilized by ascending id as the tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering<F> {
    pub field: F,
    pub descending: bool,
}

/// Parses an `ordering` query value (`field` or `-field`) against an
/// explicit field table. Unknown field names yield `None` and the request
/// falls back to the natural id order.
pub fn parse_ordering<F>(
    raw: &str,
    field_by_name: impl Fn(&str) -> Option<F>,
) -> Option<Ordering<F>> {
    let (name, descending) = match raw.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };

    field_by_name(name).map(|field| Ordering { field, descending })
}

/// Lenient id-filter parse: a malformed numeric value is treated as if the
/// filter were absent rather than surfaced as a client error.
pub fn parse_id_filter(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Lenient ISO date-filter parse, same absent-on-malformed behavior as
/// [`parse_id_filter`].
pub fn parse_date_filter(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Field {
        Name,
    }

    fn lookup(name: &str) -> Option<Field> {
        match name {
            "tool_name" => Some(Field::Name),
            _ => None,
        }
    }

    #[test]
    fn ordering_parses_descending_prefix() {
        let ordering = parse_ordering("-tool_name", lookup).unwrap();
        assert_eq!(ordering.field, Field::Name);
        assert!(ordering.descending);

        let ordering = parse_ordering("tool_name", lookup).unwrap();
        assert!(!ordering.descending);
    }

    #[test]
    fn ordering_rejects_unknown_field() {
        assert!(parse_ordering("password", lookup).is_none());
    }

    #[test]
    fn id_filter_ignores_malformed_values() {
        assert_eq!(parse_id_filter(Some("42")), Some(42));
        assert_eq!(parse_id_filter(Some(" 7 ")), Some(7));
        assert_eq!(parse_id_filter(Some("not-a-number")), None);
        assert_eq!(parse_id_filter(None), None);
    }

    #[test]
    fn date_filter_ignores_malformed_values() {
        assert_eq!(
            parse_date_filter(Some("2026-03-01")),
            Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        );
        assert_eq!(parse_date_filter(Some("yesterday")), None);
    }
}
