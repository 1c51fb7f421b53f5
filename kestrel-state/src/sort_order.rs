use serde::{Deserialize, Serialize};

/// The direction albums are sorted by title.
///
/// Serialized as `asc` / `desc`. Anything else reads back as
/// [`SortOrder::Ascending`]; a bad value is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    /// A before Z.
    #[default]
    Ascending,
    /// Z before A.
    Descending,
}
impl SortOrder {
    /// All valid orders.
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    /// The value used in query strings and config files.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Inverse of [`Self::as_param`]. Unrecognised input yields the default.
    pub fn from_param(param: &str) -> Self {
        match param {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}
impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}
impl std::str::FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_param(s))
    }
}
impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        Self::from_param(&value)
    }
}
impl From<SortOrder> for String {
    fn from(value: SortOrder) -> Self {
        value.as_param().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_param(order.as_param()), order);
        }
    }

    #[test]
    fn unknown_values_fall_back_to_ascending() {
        for value in ["", "DESC", "descending", "up", "asc ", "🦅"] {
            assert_eq!(SortOrder::from_param(value), SortOrder::Ascending, "{value:?}");
        }
    }

    #[test]
    fn toml_uses_params() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Search {
            order: SortOrder,
        }

        let search: Search = toml::from_str(r#"order = "desc""#).unwrap();
        assert_eq!(search.order, SortOrder::Descending);
        assert_eq!(toml::to_string(&search).unwrap().trim(), r#"order = "desc""#);

        let search: Search = toml::from_str(r#"order = "sideways""#).unwrap();
        assert_eq!(search.order, SortOrder::Ascending);
    }
}
