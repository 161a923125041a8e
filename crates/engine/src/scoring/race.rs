//! Race voter
//!
//! Plurality vote over the race questions. Ties go to the race declared first
//! in [`Race::ALL`], so the outcome never depends on map iteration order.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use charforge_domain::{AnswerSheet, QuestionBank, Race};

/// Vote tally, winner, and how decisive the win was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub race: Race,
    /// One entry per race, zero-filled
    pub votes: BTreeMap<Race, u32>,
    /// `(winner - runner_up) / total`, in [0, 1]; 0 when nobody voted
    pub confidence: f64,
}

impl Default for RaceResult {
    fn default() -> Self {
        tally(empty_votes())
    }
}

impl RaceResult {
    pub fn total_votes(&self) -> u32 {
        self.votes.values().sum()
    }

    pub fn votes_for(&self, race: Race) -> u32 {
        self.votes.get(&race).copied().unwrap_or(0)
    }

    /// Races by vote count, highest first; ties in canonical order.
    pub fn ranked(&self) -> [Race; 6] {
        let mut ranked = Race::ALL;
        ranked.sort_by_key(|race| Reverse(self.votes_for(*race)));
        ranked
    }
}

fn empty_votes() -> BTreeMap<Race, u32> {
    Race::ALL.iter().map(|&race| (race, 0)).collect()
}

fn tally(votes: BTreeMap<Race, u32>) -> RaceResult {
    let mut result = RaceResult {
        race: Race::ALL[0],
        votes,
        confidence: 0.0,
    };
    let ranked = result.ranked();
    let winner = result.votes_for(ranked[0]);
    let runner_up = result.votes_for(ranked[1]);
    let total = result.total_votes();

    result.race = ranked[0];
    if total > 0 {
        result.confidence = f64::from(winner - runner_up) / f64::from(total);
    }
    result
}

pub fn vote_race(bank: &QuestionBank, sheet: &AnswerSheet) -> RaceResult {
    let mut votes = empty_votes();

    for question in bank.race_questions() {
        let Some(selected) = sheet.selection(question.id.as_str()) else {
            continue;
        };
        let Some(race) = question.option(selected.as_str()).and_then(|o| o.race) else {
            tracing::trace!(
                question = %question.id,
                option = %selected,
                "No race vote for selection"
            );
            continue;
        };
        *votes.entry(race).or_insert(0) += 1;
    }

    tally(votes)
}
