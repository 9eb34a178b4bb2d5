use super::Statement;

use vectorfield_core::schema::app::FieldId;

/// Selects the primary keys of rows whose vector field matches a text
/// query.
#[derive(Debug, Clone)]
pub struct Search {
    /// The vector field searched
    pub field: FieldId,

    /// Text of the query, passed as a parameter
    pub query: String,

    /// How the query text is turned into a `tsquery`
    pub parser: QueryParser,

    /// Text-search configuration. Defaults to the field's configuration.
    pub config: Option<String>,

    /// Order matches by `ts_rank`, best first
    pub rank: bool,

    /// Maximum number of rows returned
    pub limit: Option<i64>,
}

/// Function used to build the `tsquery` from the query text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueryParser {
    /// `plainto_tsquery`: terms are ANDed, punctuation ignored
    #[default]
    Plain,

    /// `phraseto_tsquery`: terms must appear in order
    Phrase,

    /// `websearch_to_tsquery`: quotes, `or` and `-` as a search engine would
    Websearch,

    /// `to_tsquery`: the text is already a `tsquery`
    Raw,
}

impl Search {
    pub fn new(field: FieldId, query: impl Into<String>) -> Search {
        Search {
            field,
            query: query.into(),
            parser: QueryParser::default(),
            config: None,
            rank: false,
            limit: None,
        }
    }

    pub fn parser(mut self, parser: QueryParser) -> Search {
        self.parser = parser;
        self
    }

    pub fn config(mut self, config: impl Into<String>) -> Search {
        self.config = Some(config.into());
        self
    }

    pub fn rank(mut self, rank: bool) -> Search {
        self.rank = rank;
        self
    }

    pub fn limit(mut self, limit: i64) -> Search {
        self.limit = Some(limit);
        self
    }
}

impl QueryParser {
    pub fn function_name(self) -> &'static str {
        match self {
            QueryParser::Plain => "plainto_tsquery",
            QueryParser::Phrase => "phraseto_tsquery",
            QueryParser::Websearch => "websearch_to_tsquery",
            QueryParser::Raw => "to_tsquery",
        }
    }
}

impl Statement {
    /// A search with the default parser, no ranking and no limit.
    pub fn search(field: FieldId, query: impl Into<String>) -> Self {
        Search::new(field, query).into()
    }
}

impl From<Search> for Statement {
    fn from(value: Search) -> Self {
        Self::Search(value)
    }
}
