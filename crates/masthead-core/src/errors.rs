use thiserror::Error;

use crate::rules::validation::{MAGAZINE_NAME_MAX, MAGAZINE_NAME_MIN, TITLE_MAX, TITLE_MIN};

/// Result type alias using ModelError
pub type Result<T> = std::result::Result<T, ModelError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Construction failures fall into exactly two kinds. Each kind maps to a
/// stable error code that can be used for programmatic error handling and
/// testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// An argument is of the wrong kind (non-text value, reference to
    /// something that is not the required entity)
    TypeError,
    /// An argument is of the right kind but carries an invalid value
    ValueError,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::TypeError => "ERR_TYPE",
            ExErrorKind::ValueError => "ERR_VALUE",
        }
    }
}

/// Canonical structured error type
///
/// Structured representation of a [`ModelError`] with classification fields
/// for programmatic handling and context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the name of the offending argument
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the offending argument name, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for entity construction and lookup
///
/// Every variant is raised before any state changes, so a failed
/// construction never leaves a partial entity behind or touches the
/// article log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    // ===== Type Errors =====
    /// A loosely typed argument was not text
    #[error("{field} must be a string")]
    NotText { field: String },

    /// An identifier did not parse
    #[error("{field} is not a valid identifier: {value}")]
    MalformedId { field: String, value: String },

    /// The author reference does not name a registered Author
    #[error("author must be an Author: {author_id}")]
    AuthorNotFound { author_id: String },

    /// The magazine reference does not name a registered Magazine
    #[error("magazine must be a Magazine: {magazine_id}")]
    MagazineNotFound { magazine_id: String },

    /// The article reference does not name a registered Article
    #[error("article must be an Article: {article_id}")]
    ArticleNotFound { article_id: String },

    // ===== Value Errors =====
    /// Author name was empty
    #[error("name must be non-empty")]
    EmptyAuthorName,

    /// Magazine name length out of range
    #[error(
        "name length must be between {} and {} (got {length})",
        MAGAZINE_NAME_MIN,
        MAGAZINE_NAME_MAX
    )]
    InvalidMagazineName { length: usize },

    /// Magazine category was empty
    #[error("category must be non-empty")]
    EmptyCategory,

    /// Article title length out of range
    #[error(
        "title must be between {} and {} characters (got {length})",
        TITLE_MIN,
        TITLE_MAX
    )]
    InvalidTitle { length: usize },
}

impl ModelError {
    /// Classify this error into its canonical kind
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ModelError::NotText { .. }
            | ModelError::MalformedId { .. }
            | ModelError::AuthorNotFound { .. }
            | ModelError::MagazineNotFound { .. }
            | ModelError::ArticleNotFound { .. } => ExErrorKind::TypeError,

            ModelError::EmptyAuthorName
            | ModelError::InvalidMagazineName { .. }
            | ModelError::EmptyCategory
            | ModelError::InvalidTitle { .. } => ExErrorKind::ValueError,
        }
    }

    /// Whether this is a type-kind error
    pub fn is_type_error(&self) -> bool {
        self.kind() == ExErrorKind::TypeError
    }

    /// Whether this is a value-kind error
    pub fn is_value_error(&self) -> bool {
        self.kind() == ExErrorKind::ValueError
    }
}

/// Conversion from ModelError to ExError
impl From<ModelError> for ExError {
    fn from(err: ModelError) -> Self {
        let message = err.to_string();
        let base = ExError::new(err.kind()).with_message(message);

        match err {
            ModelError::NotText { field } => base.with_field(field),
            ModelError::MalformedId { field, .. } => base.with_field(field),
            ModelError::AuthorNotFound { author_id } => {
                base.with_field("author").with_entity_id(author_id)
            }
            ModelError::MagazineNotFound { magazine_id } => {
                base.with_field("magazine").with_entity_id(magazine_id)
            }
            ModelError::ArticleNotFound { article_id } => {
                base.with_field("article").with_entity_id(article_id)
            }
            ModelError::EmptyAuthorName | ModelError::InvalidMagazineName { .. } => {
                base.with_field("name")
            }
            ModelError::EmptyCategory => base.with_field("category"),
            ModelError::InvalidTitle { .. } => base.with_field("title"),
        }
    }
}
