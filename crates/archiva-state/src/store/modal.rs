use serde_json::Value;

/// Modal slot for the application.
///
/// At most one modal can be open at a time. This enum enforces the
/// non-stacking rule at compile-time: opening a modal while another is open
/// replaces it, last write wins, and the replaced modal's payload is dropped
/// with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    /// No modal is open.
    #[default]
    None,
    /// A modal is open.
    Open {
        /// Modal tag the view layer switches on (e.g. `upload`,
        /// `create-folder`).
        tag: String,
        /// Opaque payload forwarded to the modal component unchanged.
        data: Option<Value>,
    },
}

impl ModalState {
    /// Open a modal, replacing whatever was open before.
    pub fn open(tag: impl Into<String>, data: Option<Value>) -> Self {
        ModalState::Open {
            tag: tag.into(),
            data,
        }
    }

    /// Returns true if any modal is open.
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    /// The tag of the open modal, if any.
    pub fn active_tag(&self) -> Option<&str> {
        match self {
            ModalState::None => None,
            ModalState::Open { tag, .. } => Some(tag),
        }
    }

    /// The payload of the open modal, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ModalState::None => None,
            ModalState::Open { data, .. } => data.as_ref(),
        }
    }
}
