//! Mock reservation form.
//!
//! Nothing is sent or stored: a submission only moves the form through
//! input -> submitting -> success.

use khouse_content::room_card;
use khouse_content::tree::ReservationText;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ReservationRequest;

/// A required field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    RoomType,
    MoveIn,
}

impl Field {
    pub const REQUIRED: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::RoomType,
        Field::MoveIn,
    ];

    /// Form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::RoomType => "room_type",
            Field::MoveIn => "move_in",
        }
    }

    pub fn label(&self, text: &ReservationText) -> &'static str {
        match self {
            Field::Name => text.name,
            Field::Email => text.email,
            Field::Phone => text.phone,
            Field::RoomType => text.room_type,
            Field::MoveIn => text.move_in,
        }
    }
}

/// Values entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Room card id
    pub room_type: String,
    pub move_in: String,
    /// Index into the contract options
    pub contract: String,
    pub message: String,
}

impl ReservationDraft {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::RoomType => &self.room_type,
            Field::MoveIn => &self.move_in,
        }
    }

    fn is_filled(&self, field: Field) -> bool {
        let value = self.value(field).trim();
        match field {
            Field::RoomType => value
                .parse::<u32>()
                .ok()
                .and_then(room_card)
                .is_some(),
            _ => !value.is_empty(),
        }
    }

    /// Required fields left blank, in form order. A room type that names no
    /// room card counts as blank.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| !self.is_filled(*field))
            .collect()
    }
}

impl From<ReservationRequest> for ReservationDraft {
    fn from(req: ReservationRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            room_type: req.room_type,
            move_in: req.move_in,
            contract: req.contract.unwrap_or_default(),
            message: req.message.unwrap_or_default(),
        }
    }
}

/// What the modal currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum FormView {
    Input {
        draft: ReservationDraft,
        missing: Vec<Field>,
    },
    Submitting {
        ticket: Uuid,
    },
    Success {
        ticket: Uuid,
    },
}

impl Default for FormView {
    fn default() -> Self {
        FormView::Input {
            draft: ReservationDraft::default(),
            missing: Vec::new(),
        }
    }
}

/// Reservation modal state of one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub open: bool,
    pub view: FormView,
}

impl ReservationForm {
    /// Open the modal with an empty form.
    pub fn open(&mut self) {
        self.open = true;
        self.view = FormView::default();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Validate and start a submission. On failure the form keeps the draft
    /// with the missing fields marked.
    pub fn submit(&mut self, draft: ReservationDraft) -> Result<Uuid, Vec<Field>> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            self.view = FormView::Input {
                draft,
                missing: missing.clone(),
            };
            return Err(missing);
        }

        let ticket = Uuid::new_v4();
        self.view = FormView::Submitting { ticket };
        Ok(ticket)
    }

    /// Finish the submission `ticket`. True only for the first call on a
    /// pending submission.
    pub fn complete(&mut self, ticket: Uuid) -> bool {
        match self.view {
            FormView::Submitting { ticket: pending } if pending == ticket => {
                self.view = FormView::Success { ticket };
                true
            }
            _ => false,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.view, FormView::Success { .. })
    }
}
