//! Derived leaderboard entries
//!
//! The leaderboard is a reporting view recomputed on demand from persisted
//! feedback and submission state; entries are never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One ranked team on a project leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub team_id: Uuid,
    pub team_name: String,
    pub members: Vec<String>,
    pub supervisor_avg: f64,
    pub admin_score: f64,
    pub final_score: f64,
    pub submission_time: DateTime<Utc>,
}

/// Arithmetic mean of supervisor scores, 0 when none have been recorded
pub fn supervisor_average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Sort entries into leaderboard order and assign positional ranks.
///
/// Order: final score descending, ties broken by final-stage submission
/// time ascending (earlier submission ranks higher). Ranks are 1-based and
/// purely positional.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.submission_time.cmp(&b.submission_time))
    });

    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(name: &str, final_score: f64, submitted: DateTime<Utc>) -> LeaderboardEntry {
        LeaderboardEntry {
            rank: 0,
            team_id: Uuid::new_v4(),
            team_name: name.to_string(),
            members: vec![],
            supervisor_avg: 0.0,
            admin_score: 0.0,
            final_score,
            submission_time: submitted,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_supervisor_average() {
        assert_eq!(supervisor_average(&[]), 0.0);
        assert_eq!(supervisor_average(&[8.0, 9.0]), 8.5);
    }

    #[test]
    fn test_final_score_composition() {
        // Supervisor scores [8, 9] and admin score 15
        let avg = supervisor_average(&[8.0, 9.0]);
        let final_score = avg + 15.0;
        assert_eq!(avg, 8.5);
        assert_eq!(final_score, 23.5);
    }

    #[test]
    fn test_rank_by_score_descending() {
        let ranked = rank_entries(vec![
            entry("low", 10.0, at(9)),
            entry("high", 25.0, at(10)),
            entry("mid", 18.0, at(8)),
        ]);

        let names: Vec<&str> = ranked.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_ties_broken_by_earlier_submission() {
        // Equal final scores: the team that submitted its final stage
        // earlier ranks above the later one
        let ranked = rank_entries(vec![
            entry("later", 25.0, at(12)),
            entry("earlier", 25.0, at(9)),
        ]);

        assert_eq!(ranked[0].team_name, "earlier");
        assert_eq!(ranked[1].team_name, "later");
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let build = || {
            vec![
                entry("a", 20.0, at(9)),
                entry("b", 20.0, at(10)),
                entry("c", 12.5, at(8)),
            ]
        };

        let first: Vec<String> = rank_entries(build())
            .into_iter()
            .map(|e| e.team_name)
            .collect();
        let second: Vec<String> = rank_entries(build())
            .into_iter()
            .map(|e| e.team_name)
            .collect();

        assert_eq!(first, second);
    }
}
