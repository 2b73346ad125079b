use crate::explorer::Diagnostic;
use crate::operation::OperationKind;
use std::str::FromStr;

/// One step of an [`ExplorerPath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    /// An argument of the preceding field. Written `arg:<name>`.
    Argument(String),

    /// A field selected on the preceding type. Written as the bare name.
    Field(String),

    /// An inline fragment on one of the possible types of the preceding
    /// (abstract) field type. Written `on:<TypeName>`.
    Fragment(String),

    /// A field of the input object held by the preceding argument or input
    /// field. Written `field:<name>`.
    InputField(String),
}
impl PathSegment {
    pub fn name(&self) -> &str {
        match self {
            Self::Argument(name)
            | Self::Field(name)
            | Self::Fragment(name)
            | Self::InputField(name) => name.as_str(),
        }
    }

    fn can_follow(&self, previous: Option<&PathSegment>) -> bool {
        match (self, previous) {
            (Self::Field(_), None) => true,
            (Self::Field(_), Some(Self::Field(_) | Self::Fragment(_))) => true,
            (Self::Argument(_), Some(Self::Field(_))) => true,
            (Self::Fragment(_), Some(Self::Field(_))) => true,
            (Self::InputField(_), Some(Self::Argument(_) | Self::InputField(_))) => true,
            _ => false,
        }
    }
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument(name) => write!(f, "arg:{name}"),
            Self::Field(name) => write!(f, "{name}"),
            Self::Fragment(type_name) => write!(f, "on:{type_name}"),
            Self::InputField(name) => write!(f, "field:{name}"),
        }
    }
}

/// Addresses a schema entity as it appears inside one operation: a chain of
/// fields, inline fragments, arguments and input-object fields below an
/// operation root.
///
/// Paths double as the identity of explorer nodes. Two toggles of the same
/// entity under the same parent chain always produce equal paths, which is
/// what keys the [`UndoCache`](crate::explorer::UndoCache).
///
/// ```
/// use libgraphql_explorer::explorer::ExplorerPath;
/// use libgraphql_explorer::operation::OperationKind;
///
/// let path = ExplorerPath::root(OperationKind::Mutation)
///     .field("createUser")
///     .argument("input")
///     .input_field("address");
/// assert_eq!(path.to_string(), "mutation/createUser/arg:input/field:address");
/// assert_eq!(path, "mutation/createUser/arg:input/field:address".parse().unwrap());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct ExplorerPath {
    kind: OperationKind,
    segments: Vec<PathSegment>,
}
impl ExplorerPath {
    pub fn argument(self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Argument(name.into()))
    }

    /// The number of segments below the operation root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn field(self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    pub fn fragment(self, type_name: impl Into<String>) -> Self {
        self.push(PathSegment::Fragment(type_name.into()))
    }

    pub fn input_field(self, name: impl Into<String>) -> Self {
        self.push(PathSegment::InputField(name.into()))
    }

    /// Indicates if `self` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &ExplorerPath) -> bool {
        self.kind == ancestor.kind
            && self.segments.len() > ancestor.segments.len()
            && self.segments.starts_with(&ancestor.segments)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The final segment, or `None` for a bare operation root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    pub fn parent(&self) -> Option<ExplorerPath> {
        let (_, parent_segments) = self.segments.split_last()?;
        Some(Self {
            kind: self.kind,
            segments: parent_segments.to_vec(),
        })
    }

    /// The path made of the first `depth` segments of this one.
    pub fn prefix(&self, depth: usize) -> ExplorerPath {
        Self {
            kind: self.kind,
            segments: self.segments[..depth.min(self.segments.len())].to_vec(),
        }
    }

    pub fn root(kind: OperationKind) -> Self {
        Self {
            kind,
            segments: vec![],
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Checks that the path addresses an entity and that every segment may
    /// follow the one before it.
    pub fn validate(&self) -> Result<(), Diagnostic> {
        if self.segments.is_empty() {
            return Err(self.invalid("a path must name at least one field"));
        }

        let mut previous = None;
        for segment in &self.segments {
            if segment.name().is_empty() {
                return Err(self.invalid("path segments may not be empty"));
            }
            if !segment.can_follow(previous) {
                return Err(self.invalid(match previous {
                    None => format!("`{segment}` cannot follow the operation root"),
                    Some(previous) => format!("`{segment}` cannot follow `{previous}`"),
                }));
            }
            previous = Some(segment);
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> Diagnostic {
        Diagnostic::InvalidPath {
            path: self.to_string(),
            reason: reason.into(),
        }
    }

    fn push(mut self, segment: PathSegment) -> Self {
        self.segments.push(segment);
        self
    }
}
impl std::fmt::Display for ExplorerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
impl FromStr for ExplorerPath {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| Diagnostic::InvalidPath {
            path: s.to_string(),
            reason,
        };

        let mut parts = s.trim().split('/');
        let kind_str = parts.next().unwrap_or_default();
        let kind = kind_str.parse::<OperationKind>()
            .map_err(|err| invalid(err.to_string()))?;

        let mut path = Self::root(kind);
        for part in parts {
            let segment = match part.split_once(':') {
                None => PathSegment::Field(part.to_string()),
                Some(("arg", name)) => PathSegment::Argument(name.to_string()),
                Some(("field", name)) => PathSegment::InputField(name.to_string()),
                Some(("on", type_name)) => PathSegment::Fragment(type_name.to_string()),
                Some((prefix, _)) => return Err(invalid(format!(
                    "unknown segment prefix `{prefix}:` (expected `arg:`, \
                    `field:` or `on:`)",
                ))),
            };
            path.segments.push(segment);
        }

        path.validate()?;
        Ok(path)
    }
}
impl From<ExplorerPath> for String {
    fn from(path: ExplorerPath) -> Self {
        path.to_string()
    }
}
impl TryFrom<String> for ExplorerPath {
    type Error = Diagnostic;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
