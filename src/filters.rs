//! Filter Serialization
//!
//! Encoding of the checked filter inputs into the ordered
//! `filter-group=<value>` query fragment the listing endpoint expects, and
//! the reverse direction for presetting checkboxes from the page URL.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// application/x-www-form-urlencoded: keep `*-._`, everything else escapes.
const FORM_URLENCODED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, FORM_URLENCODED)
        .to_string()
        .replace("%20", "+")
}

/// Serialize `(name, value)` pairs in form order into a query fragment.
pub fn serialize_params(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(value: &str) -> String {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// All values of `name` in a `?a=b&c=d` search string, in order.
pub fn values_from_query(search: &str, name: &str) -> Vec<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (decode_component(key) == name).then(|| decode_component(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_checkbox_serializes_to_filter_group() {
        assert_eq!(serialize_params(&[("filter-group", "3")]), "filter-group=3");
    }

    #[test]
    fn pairs_keep_form_order() {
        let params = serialize_params(&[
            ("filter-group", "3"),
            ("filter-group", "1"),
            ("filter-group", "7"),
        ]);
        assert_eq!(params, "filter-group=3&filter-group=1&filter-group=7");
    }

    #[test]
    fn values_are_form_urlencoded() {
        assert_eq!(serialize_params(&[("q", "loft design")]), "q=loft+design");
        assert_eq!(
            serialize_params(&[("q", "кухня")]),
            "q=%D0%BA%D1%83%D1%85%D0%BD%D1%8F"
        );
    }

    #[test]
    fn query_values_round_trip() {
        let search = "?page=2&filter-group=3&filter-group=%D0%BA%D1%83%D1%85%D0%BD%D1%8F";
        assert_eq!(
            values_from_query(search, "filter-group"),
            vec!["3".to_string(), "кухня".to_string()]
        );
        assert_eq!(values_from_query(search, "page"), vec!["2".to_string()]);
        assert!(values_from_query(search, "owner").is_empty());
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(values_from_query("", "filter-group").is_empty());
        assert!(values_from_query("?", "filter-group").is_empty());
    }
}
