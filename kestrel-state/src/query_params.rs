use crate::SortOrder;

/// The part of a search view's state that lives in the URL:
/// `?query=<text>&order=<asc|desc>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// The search text. Empty matches everything.
    pub query: String,
    /// The title sort direction.
    pub order: SortOrder,
}
impl QueryParams {
    /// Read parameters from a URL query string, with or without the leading `?`.
    ///
    /// Missing fields take their defaults, an unrecognised `order` becomes
    /// ascending, unrelated keys are ignored and a repeated key takes its last
    /// value. This never fails.
    pub fn parse(query_string: &str) -> Self {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "query" => params.query = value,
                "order" => params.order = SortOrder::from_param(&value),
                _ => {}
            }
        }
        params
    }

    /// Write parameters as a URL query string without the leading `?`.
    /// An empty query is left out; the order is always written.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![];
        if !self.query.is_empty() {
            pairs.push(("query", self.query.as_str()));
        }
        pairs.push(("order", self.order.as_param()));
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}
impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_survives_a_round_trip() {
        for order in SortOrder::ALL {
            let params = QueryParams {
                query: String::new(),
                order,
            };
            assert_eq!(QueryParams::parse(&params.to_query_string()).order, order);
        }
    }

    #[test]
    fn descending_round_trip() {
        let params = QueryParams {
            query: "kind of blue & more".to_string(),
            order: SortOrder::Descending,
        };
        let serialized = params.to_query_string();
        assert_eq!(serialized, "query=kind+of+blue+%26+more&order=desc");
        assert_eq!(QueryParams::parse(&serialized), params);
    }

    #[test]
    fn absent_values_default() {
        assert_eq!(QueryParams::parse(""), QueryParams::default());
        assert_eq!(QueryParams::parse("?"), QueryParams::default());
        assert_eq!(
            QueryParams::parse("?query=miles"),
            QueryParams {
                query: "miles".to_string(),
                order: SortOrder::Ascending,
            }
        );
    }

    #[test]
    fn unrecognised_order_is_ascending() {
        for raw in ["order=sideways", "order=", "order=DESC", "order=%F0%9F%A6%85"] {
            assert_eq!(QueryParams::parse(raw).order, SortOrder::Ascending, "{raw}");
        }
    }

    #[test]
    fn last_value_wins_and_strangers_are_ignored() {
        let params = QueryParams::parse("page=3&order=asc&query=a&order=desc&query=b");
        assert_eq!(params.query, "b");
        assert_eq!(params.order, SortOrder::Descending);
    }

    #[test]
    fn empty_query_is_omitted() {
        assert_eq!(QueryParams::default().to_query_string(), "order=asc");
    }
}
