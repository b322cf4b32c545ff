use crate::error::{ErrorSeverity, GameError};

/// A saved inventory line that could not be restored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryLineError {
    #[error("line {line}: expected name,category,effect[,quantity], got {content:?}")]
    MissingFields { line: usize, content: String },

    #[error("line {line}: unknown item category {category:?}")]
    UnknownCategory { line: usize, category: String },

    #[error("line {line}: zero quantity in {content:?}")]
    ZeroQuantity { line: usize, content: String },
}

impl InventoryLineError {
    /// 1-based line number within the inventory section; zero when unknown.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingFields { line, .. }
            | Self::UnknownCategory { line, .. }
            | Self::ZeroQuantity { line, .. } => *line,
        }
    }

    pub(crate) fn at_line(mut self, number: usize) -> Self {
        match &mut self {
            Self::MissingFields { line, .. }
            | Self::UnknownCategory { line, .. }
            | Self::ZeroQuantity { line, .. } => *line = number,
        }
        self
    }
}

impl GameError for InventoryLineError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "INVENTORY_MISSING_FIELDS",
            Self::UnknownCategory { .. } => "INVENTORY_UNKNOWN_CATEGORY",
            Self::ZeroQuantity { .. } => "INVENTORY_ZERO_QUANTITY",
        }
    }
}
