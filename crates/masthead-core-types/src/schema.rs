//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_AUTHOR_ID: &str = "author_id";
pub const FIELD_MAGAZINE_ID: &str = "magazine_id";
pub const FIELD_ARTICLE_ID: &str = "article_id";

// Collection sizes
pub const FIELD_REGISTRY_LEN: &str = "registry_len";

// Ignored mutations
pub const FIELD_IGNORED_FIELD: &str = "ignored_field";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_IGNORED: &str = "ignored";
