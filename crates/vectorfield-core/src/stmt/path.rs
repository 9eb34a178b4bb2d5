use std::fmt;

/// A relationship path naming a field, starting from a model.
///
/// Segments are separated with the double-underscore convention
/// (`category__label`); the dotted form (`category.label`) is accepted too.
/// The path is not checked against a schema until it is resolved.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn new<I, S>(segments: I) -> Path
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(src: &str) -> Path {
        Path {
            segments: src
                .split("__")
                .flat_map(|part| part.split('.'))
                .map(String::from)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if no segment is empty and no separator is followed by a stray
    /// underscore (`category___label` splits as `category`, `_label`).
    pub fn is_well_formed(&self) -> bool {
        !self.segments.is_empty()
            && self.segments.iter().all(|segment| !segment.is_empty())
            && self.segments[1..]
                .iter()
                .all(|segment| !segment.starts_with('_'))
    }
}

impl From<&str> for Path {
    fn from(src: &str) -> Path {
        Path::parse(src)
    }
}

impl From<String> for Path {
    fn from(src: String) -> Path {
        Path::parse(&src)
    }
}

impl From<&String> for Path {
    fn from(src: &String) -> Path {
        Path::parse(src)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for segment in &self.segments {
            write!(f, "{s}{segment}")?;
            s = "__";
        }

        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn parse_double_underscore() {
        let path = Path::parse("category__section__title");
        assert_eq!(path.segments(), ["category", "section", "title"]);
        assert_eq!(path.to_string(), "category__section__title");
    }

    #[test]
    fn parse_dotted() {
        let path = Path::parse("category.label");
        assert_eq!(path.segments(), ["category", "label"]);
        assert_eq!(path.to_string(), "category__label");
    }

    #[test]
    fn empty_segments_are_kept() {
        assert!(!Path::parse("").is_well_formed());
        assert!(!Path::parse("category____label").is_well_formed());
        assert!(!Path::new(Vec::<String>::new()).is_well_formed());
        assert!(Path::parse("name").is_well_formed());
    }

    #[test]
    fn odd_underscore_runs_are_ill_formed() {
        let path = Path::parse("category___label");
        assert_eq!(path.segments(), ["category", "_label"]);
        assert!(!path.is_well_formed());

        // Only the first segment may start with an underscore
        assert!(Path::parse("_internal__label").is_well_formed());
    }
}
