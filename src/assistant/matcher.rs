//! Room matcher modal state.

use serde::{Deserialize, Serialize};

/// Room matcher state of one visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatcherState {
    pub open: bool,
    /// Last submitted question, kept in the text area
    pub query: String,
    /// Last displayed answer
    pub result: Option<String>,
}

impl MatcherState {
    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn answered(&mut self, query: &str, result: String) {
        self.query = query.to_string();
        self.result = Some(result);
    }
}
