/// One step of a [`SelectionPath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    /// A field, identified by its response key (alias if present, else name).
    Field(String),

    /// The root of a named fragment's selection set.
    Fragment(String),

    /// The per-type scope entered when an interface or union selection is
    /// narrowed to one of its concrete object types.
    TypeCondition(String),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(response_key) => write!(f, "{response_key}"),
            Self::Fragment(name) => write!(f, "...{name}"),
            Self::TypeCondition(type_name) => write!(f, "...on {type_name}"),
        }
    }
}

/// The sequence of fields, fragments, and type conditions leading from an
/// operation's root (or a named fragment's root) to a selection.
///
/// Together with a type name, a path forms the identity of a proxy type (see
/// [`ProxyKey`](crate::operation::ProxyKey)).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SelectionPath(Vec<PathSegment>);
impl SelectionPath {
    pub fn for_fragment(fragment_name: impl Into<String>) -> Self {
        Self(vec![PathSegment::Fragment(fragment_name.into())])
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is `other` plus exactly one more segment.
    pub fn is_child_of(&self, other: &SelectionPath) -> bool {
        match self.0.split_last() {
            Some((_, parent)) => parent == other.0.as_slice(),
            None => false,
        }
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    pub fn root() -> Self {
        Self(vec![])
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.0.as_slice()
    }

    /// Render this path as an identifier-safe suffix used in proxy type names
    /// (e.g. `animal__onDog__owner`).
    pub fn to_name_suffix(&self) -> String {
        self.0.iter()
            .map(|segment| match segment {
                PathSegment::Field(response_key) => response_key.to_owned(),
                PathSegment::Fragment(name) => name.to_owned(),
                PathSegment::TypeCondition(type_name) => format!("on{type_name}"),
            })
            .collect::<Vec<_>>()
            .join("__")
    }

    pub fn with_field(&self, response_key: impl Into<String>) -> Self {
        self.with_segment(PathSegment::Field(response_key.into()))
    }

    fn with_segment(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    pub fn with_type_condition(&self, type_name: impl Into<String>) -> Self {
        self.with_segment(PathSegment::TypeCondition(type_name.into()))
    }
}
impl std::fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        let rendered = self.0.iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{rendered}")
    }
}
