use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ModelError;

/// Field a list request may sort on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            other => Err(ModelError::InvalidParameter {
                name: "sort",
                value: other.to_string(),
                allowed: "`title`, `content`",
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ModelError::InvalidParameter {
                name: "direction",
                value: other.to_string(),
                allowed: "`asc`, `desc`",
            }),
        }
    }
}

/// Raw query string of a list request; parsed into a typed sort order so bad
/// values are rejected before the store is touched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListQuery {
    /// Validates both parameters and resolves the effective sort.
    ///
    /// `direction` is checked even without `sort` (a bad value is still a
    /// client error), but only takes effect alongside a sort field. A sort
    /// field without a direction defaults to ascending.
    pub fn sort_order(&self) -> Result<Option<(SortField, SortDirection)>, ModelError> {
        let direction = match self.direction.as_deref() {
            Some(raw) => Some(raw.parse::<SortDirection>()?),
            None => None,
        };
        let field = match self.sort.as_deref() {
            Some(raw) => Some(raw.parse::<SortField>()?),
            None => None,
        };
        Ok(field.map(|f| (f, direction.unwrap_or(SortDirection::Asc))))
    }
}

/// Raw query string of a search request. Criteria semantics live in the
/// store; this is plain transport.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}
