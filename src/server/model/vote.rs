//! Vote choices shared by deadlines, reviews and resources.

use crate::server::{error::AppError, model::string_enum};

string_enum!(
    /// Agree/disagree vote on a deadline or review.
    VoteChoice, "vote type" {
        Agree => "agree",
        Disagree => "disagree",
    }
);

impl VoteChoice {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse()
            .map_err(|_| AppError::BadRequest("Invalid vote type".to_string()))
    }

    pub fn is_agree(&self) -> bool {
        matches!(self, VoteChoice::Agree)
    }

    pub fn from_agree(agree: bool) -> Self {
        if agree {
            VoteChoice::Agree
        } else {
            VoteChoice::Disagree
        }
    }
}

string_enum!(
    /// Action submitted against a resource.
    ResourceVoteAction, "vote action" {
        Up => "up",
        Down => "down",
        Clear => "clear",
    }
);

impl ResourceVoteAction {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse()
            .map_err(|_| AppError::BadRequest("Invalid vote action".to_string()))
    }
}

/// Counts of agree/disagree (or up/down) votes plus the viewer's own vote.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoteTally {
    pub positive: u64,
    pub negative: u64,
    /// `Some(true)` for agree/up, `Some(false)` for disagree/down.
    pub viewer: Option<bool>,
}

impl VoteTally {
    /// Builds the tally from `(user_id, positive)` pairs.
    pub fn from_votes(votes: impl IntoIterator<Item = (i32, bool)>, viewer_id: Option<i32>) -> Self {
        let mut tally = VoteTally::default();
        for (user_id, positive) in votes {
            if positive {
                tally.positive += 1;
            } else {
                tally.negative += 1;
            }
            if Some(user_id) == viewer_id {
                tally.viewer = Some(positive);
            }
        }
        tally
    }

    pub fn score(&self) -> i64 {
        self.positive as i64 - self.negative as i64
    }

    pub fn viewer_choice(&self) -> Option<String> {
        self.viewer
            .map(|agree| VoteChoice::from_agree(agree).as_str().to_string())
    }

    pub fn viewer_direction(&self) -> Option<String> {
        self.viewer.map(|up| {
            let action = if up {
                ResourceVoteAction::Up
            } else {
                ResourceVoteAction::Down
            };
            action.as_str().to_string()
        })
    }
}
