use std::fmt;

/// How the children of a [`VectorQuery`](super::VectorQuery) are combined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    And,
    #[default]
    Or,
}

impl Connector {
    /// The PostgreSQL operator joining rendered children.
    pub fn operator(self) -> &'static str {
        match self {
            Connector::And => "&&",
            Connector::Or => "||",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}
