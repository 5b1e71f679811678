use soroban_sdk::contracttype;

/// Error categories for classifying ledger failures
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Malformed input: bad resource id, empty hash, zero or self-referencing principal
    Validation = 1,
    /// The actor is not the record creator or the ledger administrator
    Authorization = 2,
    /// Record lookup failures
    NotFound = 3,
    /// Duplicate identities and lifecycle conflicts
    StateConflict = 4,
    /// Ledger-wide conditions such as the circuit breaker
    System = 5,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Caller mistake, nothing to act on
    Low = 1,
    /// Worth surfacing to the caller's operator
    Medium = 2,
    /// Repeated occurrences point at misuse
    High = 3,
    /// The whole ledger is affected
    Critical = 4,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LedgerError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 3,
    RecordNotFound = 4,
    RecordAlreadyExists = 5,
    InvalidInput = 6,
    EmptyHash = 7,
    ZeroPrincipal = 8,
    SelfReferenceNotAllowed = 9,
    LedgerPaused = 10,
    LedgerNotPaused = 11,
}

impl LedgerError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::InvalidInput
            | LedgerError::EmptyHash
            | LedgerError::ZeroPrincipal
            | LedgerError::SelfReferenceNotAllowed => ErrorCategory::Validation,
            LedgerError::NotAuthorized => ErrorCategory::Authorization,
            LedgerError::RecordNotFound => ErrorCategory::NotFound,
            LedgerError::RecordAlreadyExists
            | LedgerError::AlreadyInitialized
            | LedgerError::LedgerNotPaused => ErrorCategory::StateConflict,
            LedgerError::NotInitialized | LedgerError::LedgerPaused => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LedgerError::InvalidInput
            | LedgerError::EmptyHash
            | LedgerError::ZeroPrincipal
            | LedgerError::SelfReferenceNotAllowed
            | LedgerError::RecordNotFound
            | LedgerError::RecordAlreadyExists
            | LedgerError::LedgerNotPaused => ErrorSeverity::Low,
            LedgerError::AlreadyInitialized => ErrorSeverity::Medium,
            LedgerError::NotAuthorized => ErrorSeverity::High,
            LedgerError::NotInitialized | LedgerError::LedgerPaused => ErrorSeverity::Critical,
        }
    }

    /// Returns whether the same call may succeed later without changing its inputs.
    /// The ledger never retries on its own; this is advice for callers.
    pub fn retryable(&self) -> bool {
        matches!(self, LedgerError::LedgerPaused)
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::NotInitialized => "Ledger has not been initialized",
            LedgerError::AlreadyInitialized => "Ledger is already initialized",
            LedgerError::NotAuthorized => "Caller is not authorized for this operation",
            LedgerError::RecordNotFound => "Record does not exist",
            LedgerError::RecordAlreadyExists => "Record already exists for this resource and owner",
            LedgerError::InvalidInput => "Invalid input parameters provided",
            LedgerError::EmptyHash => "Data hash must not be empty",
            LedgerError::ZeroPrincipal => "Principal must not be the zero address",
            LedgerError::SelfReferenceNotAllowed => "Caller cannot target itself",
            LedgerError::LedgerPaused => "Ledger is paused",
            LedgerError::LedgerNotPaused => "Ledger is not paused",
        }
    }
}
