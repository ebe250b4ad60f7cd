use cookbook_store::StoreError;

/// Why a submission was refused admission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// `type` is missing or is neither `"recipe"` nor `"ingredient"`.
    #[error("invalid entry type: {found:?}")]
    InvalidEntryType { found: Option<String> },

    /// An ingredient without `cookTime`, or with a negative one.
    #[error("invalid cook time for {name:?}: {found:?}")]
    InvalidCookTime {
        name: Option<String>,
        found: Option<i64>,
    },

    /// The submission has no `name`.
    #[error("entry has no name")]
    MissingName,

    /// The name is already taken by another entry of either type.
    #[error("duplicate entry name: {name}")]
    DuplicateName { name: String },

    /// A recipe without a `requiredItems` field.
    #[error("recipe {name} has no requiredItems")]
    MissingRequiredItems { name: String },

    /// A required item lacks its `name` or `quantity`.
    #[error("recipe {recipe} has an incomplete required item at index {index}")]
    InvalidRequiredItem { recipe: String, index: usize },

    /// A recipe lists the same child twice.
    #[error("recipe {recipe} lists {child} more than once")]
    DuplicateChildReference { recipe: String, child: String },
}

/// Errors that can occur during admission.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The submission failed a validation stage.
    #[error("entry rejected: {0}")]
    Rejected(#[from] Rejection),

    /// The store could not be consulted or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl GateError {
    /// The rejection reason, if this is a validation failure.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            Self::Store(_) => None,
        }
    }
}
