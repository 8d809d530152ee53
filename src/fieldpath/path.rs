//! Path element and path types.

use std::fmt;

/// PathElement represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// Key of a map field.
    Key(String),
    /// Index into a list.
    Index(usize),
}

impl PathElement {
    /// Creates a new key path element.
    pub fn key(name: impl Into<String>) -> Self {
        PathElement::Key(name.into())
    }

    /// Creates a new index path element.
    pub fn index(i: usize) -> Self {
        PathElement::Index(i)
    }

    /// Returns the index this element addresses in a list, if any.
    ///
    /// A key made only of digits addresses a list slot as well.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathElement::Index(i) => Some(*i),
            PathElement::Key(k) => k.parse().ok(),
        }
    }

    /// Returns the key this element addresses in a map.
    pub fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            PathElement::Key(k) => std::borrow::Cow::Borrowed(k),
            PathElement::Index(i) => std::borrow::Cow::Owned(i.to_string()),
        }
    }
}

impl From<&str> for PathElement {
    fn from(s: &str) -> Self {
        PathElement::Key(s.to_string())
    }
}

impl From<usize> for PathElement {
    fn from(i: usize) -> Self {
        PathElement::Index(i)
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Key(k) => write!(f, "{}", k),
            PathElement::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Path represents a complete path to a nested field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// Creates a path from a vector of elements.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    /// Creates a path of map keys from a dotted string such as `metadata.uid`.
    pub fn from_dotted(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Path::new();
        }
        dotted.split('.').map(PathElement::from).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter()
    }

    /// Creates a new path with the given element appended.
    pub fn with(&self, element: PathElement) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element);
        Path { elements }
    }

    /// Returns true if `prefix` equals this path or is an ancestor of it.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.elements.starts_with(&prefix.elements)
    }

    pub fn as_slice(&self) -> &[PathElement] {
        &self.elements
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Path {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Paths display as their segments joined with dots, e.g. `spec.replicas`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = Path::from_elements(vec![
            PathElement::key("spec"),
            PathElement::key("containers"),
            PathElement::index(0),
        ]);
        assert_eq!(path.to_string(), "spec.containers.0");
        assert_eq!(Path::new().to_string(), "");
    }

    #[test]
    fn test_path_with_does_not_mutate() {
        let base = Path::from_dotted("metadata");
        let child = base.with(PathElement::key("name"));
        assert_eq!(base.len(), 1);
        assert_eq!(child, Path::from_dotted("metadata.name"));
    }

    #[test]
    fn test_starts_with() {
        let prefix = Path::from_dotted("metadata.managedFields");
        assert!(Path::from_dotted("metadata.managedFields").starts_with(&prefix));
        assert!(Path::from_dotted("metadata.managedFields.0")
            .starts_with(&prefix));
        assert!(!Path::from_dotted("metadata").starts_with(&prefix));
        assert!(!Path::from_dotted("metadata.managedFieldsX").starts_with(&prefix));
    }

    #[test]
    fn test_path_element_index() {
        assert_eq!(PathElement::key("3").as_index(), Some(3));
        assert_eq!(PathElement::key("x").as_index(), None);
        assert_eq!(PathElement::index(4).as_key(), "4");
    }
}
