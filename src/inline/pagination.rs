/// Position inside the result list of an inline query, carried in the query's `offset` field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueryPage {
    current_offset: i64,
}

impl QueryPage {
    /// An empty offset is the first page; garbage falls back to the first page too.
    pub fn from_query_offset(query_offset: &str) -> Self {
        let query_offset = query_offset.trim();
        if query_offset.is_empty() {
            return Self { current_offset: 0 };
        }
        match query_offset.parse::<i64>() {
            Ok(offset) if offset >= 0 => Self {
                current_offset: offset,
            },
            _ => {
                tracing::warn!(query_offset, "invalid inline query offset");
                Self { current_offset: 0 }
            }
        }
    }

    pub const fn skip(&self) -> i64 {
        self.current_offset
    }

    /// empty string means no more results
    pub fn next_query_offset(next_offset: Option<i64>) -> String {
        next_offset.map(|offset| offset.to_string()).unwrap_or_default()
    }
}
