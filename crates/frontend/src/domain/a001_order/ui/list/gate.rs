use contracts::domain::a001_order::{OrderStatus, RowRef};

/// A status change the operator asked for but has not confirmed yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpdate {
    pub row_ref: RowRef,
    pub new_status: OrderStatus,
}

impl PendingUpdate {
    /// Question shown in the confirmation prompt
    pub fn prompt(&self) -> String {
        format!("আপনি কি \"{}\" স্ট্যাটাসে পরিবর্তন করতে চান?", self.new_status)
    }
}

/// Two-step commit for status changes.
///
/// Holds at most one [`PendingUpdate`]; nothing reaches the network until
/// [`ConfirmationGate::confirm`] hands the update back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfirmationGate {
    #[default]
    Idle,
    AwaitingConfirmation(PendingUpdate),
}

impl ConfirmationGate {
    /// Open the prompt. Refused while another update awaits confirmation.
    pub fn request(&mut self, update: PendingUpdate) -> bool {
        match self {
            ConfirmationGate::Idle => {
                *self = ConfirmationGate::AwaitingConfirmation(update);
                true
            }
            ConfirmationGate::AwaitingConfirmation(_) => false,
        }
    }

    pub fn pending(&self) -> Option<&PendingUpdate> {
        match self {
            ConfirmationGate::Idle => None,
            ConfirmationGate::AwaitingConfirmation(update) => Some(update),
        }
    }

    /// Close the prompt and release the update for committing
    pub fn confirm(&mut self) -> Option<PendingUpdate> {
        match std::mem::take(self) {
            ConfirmationGate::Idle => None,
            ConfirmationGate::AwaitingConfirmation(update) => Some(update),
        }
    }

    /// Close the prompt and drop the update (cancel button, overlay click, Escape)
    pub fn cancel(&mut self) -> Option<PendingUpdate> {
        self.confirm()
    }
}
