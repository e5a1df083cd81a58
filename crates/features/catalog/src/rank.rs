use crate::error::CatalogError;
use apb_domain::rank::RawRank;

/// Parses an upstream rank into an integer, naming the record on failure.
pub(crate) fn parse_rank(
    raw: Option<&RawRank>,
    record_id: &str,
    field: &'static str,
) -> Result<i64, CatalogError> {
    raw.and_then(RawRank::as_integer).ok_or_else(|| CatalogError::MalformedOrder {
        record_id: record_id.to_owned(),
        field,
        value: match raw {
            None => "<missing>".into(),
            Some(RawRank::Text(text)) => format!("{text:?}").into(),
            Some(rank) => rank.to_string().into(),
        },
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_record_field_and_value() {
        let raw = RawRank::from("uno");
        let err = parse_rank(Some(&raw), "i-9", "item_order").unwrap_err();
        assert_eq!(err.to_string(), r#"Malformed item_order "uno" on record 'i-9'"#);
    }

    #[test]
    fn missing_rank_is_malformed() {
        let err = parse_rank(None, "i-9", "order").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedOrder { field: "order", ref value, .. } if value == "<missing>"
        ));
    }

    #[test]
    fn non_scalar_rank_is_shown_unquoted() {
        let raw = RawRank::Invalid("true".to_owned());
        let err = parse_rank(Some(&raw), "i-3", "order").unwrap_err();
        assert_eq!(err.to_string(), "Malformed order true on record 'i-3'");
    }

    #[test]
    fn integer_text_parses() {
        assert_eq!(parse_rank(Some(&RawRank::from("4")), "i-1", "order").unwrap(), 4);
    }
}
