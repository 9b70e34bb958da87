use pricetrail_core_types::{RequestId, TraceId};

/// Result type alias using TrailError
pub type Result<T> = std::result::Result<T, TrailError>;

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the pricetrail system. Each kind maps to a stable error code that can
/// be used for programmatic error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailErrorKind {
    // Input/Validation
    InvalidInput,
    /// A required field was absent or unparseable where substitution was not possible
    MissingField,
    /// Two snapshots in one batch share an identity key (recovered last-wins)
    IdentityAmbiguity,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    /// Ledger could not be loaded or saved; fatal to the run
    Persistence,

    // Internal
    Internal,
}

impl TrailErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TrailErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            TrailErrorKind::MissingField => "ERR_MISSING_FIELD",
            TrailErrorKind::IdentityAmbiguity => "ERR_IDENTITY_AMBIGUITY",
            TrailErrorKind::NotFound => "ERR_NOT_FOUND",
            TrailErrorKind::Io => "ERR_IO",
            TrailErrorKind::Serialization => "ERR_SERIALIZATION",
            TrailErrorKind::Persistence => "ERR_PERSISTENCE",
            TrailErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification fields
/// for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct TrailError {
    kind: TrailErrorKind,
    op: Option<String>,
    product_key: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<TrailError>>,
}

impl TrailError {
    /// Create a new error with the specified kind
    pub fn new(kind: TrailErrorKind) -> Self {
        Self {
            kind,
            op: None,
            product_key: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add product key context
    pub fn with_product_key(mut self, key: impl Into<String>) -> Self {
        self.product_key = Some(key.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: TrailError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> TrailErrorKind {
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

    /// Get the product key context, if any
    pub fn product_key(&self) -> Option<&str> {
        self.product_key.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&TrailError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for TrailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.product_key {
            write!(f, " (product_key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for TrailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(TrailErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
        assert_eq!(TrailErrorKind::Persistence.code(), "ERR_PERSISTENCE");
        assert_eq!(
            TrailErrorKind::IdentityAmbiguity.code(),
            "ERR_IDENTITY_AMBIGUITY"
        );
    }

    #[test]
    fn test_builder_context() {
        let err = TrailError::new(TrailErrorKind::Persistence)
            .with_op("ledger_save")
            .with_product_key("https://example.com/p/1")
            .with_message("disk full");

        assert_eq!(err.kind(), TrailErrorKind::Persistence);
        assert_eq!(err.op(), Some("ledger_save"));
        assert_eq!(err.product_key(), Some("https://example.com/p/1"));
        assert_eq!(err.message(), "disk full");
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = TrailError::new(TrailErrorKind::Io)
            .with_op("report_sink")
            .with_message("permission denied");
        let text = format!("{}", err);

        assert!(text.contains("ERR_IO"));
        assert!(text.contains("report_sink"));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn test_source_chain() {
        let inner = TrailError::new(TrailErrorKind::Io).with_message("fsync failed");
        let outer = TrailError::new(TrailErrorKind::Persistence).with_source(inner);

        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(TrailErrorKind::Io)
        );
    }
}
