use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("payment insufficient to amortize debt: payment {payment} does not cover monthly interest {monthly_interest}")]
    InsufficientPayment {
        payment: f64,
        monthly_interest: f64,
    },

    #[error("invalid income: {income}")]
    InvalidIncome {
        income: f64,
    },

    #[error("invalid time horizon: {message}")]
    InvalidTimeHorizon {
        message: String,
    },

    #[error("invalid age range: current age {current_age}, retirement age {retirement_age}")]
    InvalidAgeRange {
        current_age: u32,
        retirement_age: u32,
    },

    #[error("invalid input for {field}: {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
    },

    #[error("unknown expense category: {name}")]
    UnknownCategory {
        name: String,
    },

    #[error("duplicate expense category: {category}")]
    DuplicateCategory {
        category: String,
    },

    #[error("negative amount for {category}: {amount}")]
    NegativeAmount {
        category: String,
        amount: f64,
    },

    #[error("unknown user type: {name}")]
    UnknownUserType {
        name: String,
    },

    #[error("unknown goal: {name}")]
    UnknownGoal {
        name: String,
    },

    #[error("unknown risk tolerance: {name}")]
    UnknownRiskTolerance {
        name: String,
    },

    #[error("invalid profile: {message}")]
    InvalidProfile {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid export document: {message}")]
    InvalidExport {
        message: String,
    },

    #[error("export document missing field: {field}")]
    MissingExportField {
        field: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// broad error classification for callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// input violates a documented precondition of a calculation
    Domain,
    /// malformed profile, expense or export data rejected at the boundary
    Validation,
    Serialization,
}

impl AdvisorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdvisorError::InsufficientPayment { .. }
            | AdvisorError::InvalidIncome { .. }
            | AdvisorError::InvalidTimeHorizon { .. }
            | AdvisorError::InvalidAgeRange { .. }
            | AdvisorError::InvalidInput { .. } => ErrorKind::Domain,
            AdvisorError::UnknownCategory { .. }
            | AdvisorError::DuplicateCategory { .. }
            | AdvisorError::NegativeAmount { .. }
            | AdvisorError::UnknownUserType { .. }
            | AdvisorError::UnknownGoal { .. }
            | AdvisorError::UnknownRiskTolerance { .. }
            | AdvisorError::InvalidProfile { .. }
            | AdvisorError::InvalidConfiguration { .. }
            | AdvisorError::InvalidExport { .. }
            | AdvisorError::MissingExportField { .. } => ErrorKind::Validation,
            AdvisorError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
