use std::fmt::{self, Display};

/// How a query with multiple collection expansions maps to SQL statements.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySplittingBehavior {
    /// No explicit choice on the query nor on the model.
    #[default]
    Unspecified,
    /// One statement, accepting the duplicated rows a joined expansion yields.
    SingleQuery,
    /// One statement per collection expansion, executed in plan order.
    SplitQuery,
}

impl QuerySplittingBehavior {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }

    /// Keep the explicit choice, otherwise fall back to `default`.
    pub fn or(self, default: Self) -> Self {
        match self {
            Self::Unspecified => default,
            explicit => explicit,
        }
    }
}

impl Display for QuerySplittingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unspecified => "unspecified",
            Self::SingleQuery => "single query",
            Self::SplitQuery => "split query",
        })
    }
}
