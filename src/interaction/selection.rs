//! Selection state machine
//!
//! Two states. A pointer-down resolves to a `PickClass`; the machine moves
//! only when the class disagrees with the current state, so repeated input
//! of the same class is a no-op.

/// Whether the cube is currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Inactive,
    Active,
}

/// What the nearest pick hit, as far as selection cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickClass {
    /// The cube, its outline, or one of its handles
    Subject,
    /// Some other node
    Other,
    /// Nothing under the pointer
    Empty,
}

/// A state change the caller must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activate,
    Deactivate,
}

impl Selection {
    pub fn is_active(self) -> bool {
        self == Selection::Active
    }

    /// Advance on a pick. Returns the new state and the transition, if any.
    pub fn next(self, pick: PickClass) -> (Selection, Option<Transition>) {
        match (self, pick) {
            (Selection::Inactive, PickClass::Subject) => (Selection::Active, Some(Transition::Activate)),
            (Selection::Active, PickClass::Other | PickClass::Empty) => {
                (Selection::Inactive, Some(Transition::Deactivate))
            }
            (state, _) => (state, None),
        }
    }
}
