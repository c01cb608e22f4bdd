/// What to do with a ticket form submission, given the browser's verdict on the form's
/// constraints. The form is marked as validated either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Submit,
    Block,
}

impl GateDecision {
    pub fn for_validity(valid: bool) -> Self {
        if valid {
            GateDecision::Submit
        } else {
            GateDecision::Block
        }
    }

    pub fn is_blocked(self) -> bool {
        self == GateDecision::Block
    }
}
