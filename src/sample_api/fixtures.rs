//! Seed data served by the sample API
//!
//! The same records the backend's `populate_db` command creates: five
//! heroes, two teams, one activity and one leaderboard entry per user, and
//! five workouts. Related users are expanded inline like the serializers do.

use serde_json::{json, Value};

use crate::resources::ResourceKind;

/// All five collections, built once
#[derive(Debug, Clone)]
pub struct Fixtures {
    users: Value,
    teams: Value,
    activities: Value,
    leaderboard: Value,
    workouts: Value,
}

impl Fixtures {
    /// The `populate_db` data set
    pub fn seed() -> Self {
        let users: Vec<Value> = [
            ("6650a1f0c0ffee0000000001", "thundergod"),
            ("6650a1f0c0ffee0000000002", "metalgeek"),
            ("6650a1f0c0ffee0000000003", "zerocool"),
            ("6650a1f0c0ffee0000000004", "crashoverride"),
            ("6650a1f0c0ffee0000000005", "sleeptoken"),
        ]
        .iter()
        .map(|(id, username)| {
            json!({
                "_id": id,
                "username": username,
                "email": format!("{}@merington.edu", username),
            })
        })
        .collect();

        let teams = json!([
            {
                "_id": "6650a1f0c0ffee0000000101",
                "name": "Blue Team",
                "members": users[..3],
            },
            {
                "_id": "6650a1f0c0ffee0000000102",
                "name": "Gold Team",
                "members": users[3..],
            },
        ]);

        let activities: Vec<Value> = [
            ("Cycling", "01:00:00"),
            ("Crossfit", "02:00:00"),
            ("Running", "01:30:00"),
            ("Strength", "00:30:00"),
            ("Swimming", "01:15:00"),
        ]
        .iter()
        .zip(&users)
        .enumerate()
        .map(|(i, ((activity_type, duration), user))| {
            json!({
                "_id": format!("6650a1f0c0ffee00000002{:02}", i + 1),
                "user": user,
                "activity_type": activity_type,
                "duration": duration,
            })
        })
        .collect();

        // Served highest score first; clients rank by position
        let mut scored: Vec<(&Value, u32)> = users.iter().zip([100, 90, 95, 85, 80]).collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        let leaderboard: Vec<Value> = scored
            .into_iter()
            .enumerate()
            .map(|(i, (user, score))| {
                json!({
                    "_id": format!("6650a1f0c0ffee00000003{:02}", i + 1),
                    "user": user,
                    "score": score,
                })
            })
            .collect();

        let workouts: Vec<Value> = [
            ("Cycling Training", "Training for a road cycling event", "Intermediate"),
            ("Crossfit WOD", "Training for a crossfit competition", "Advanced"),
            ("Running Training", "Training for a marathon", "Intermediate"),
            ("Strength Training", "Training for strength building", "Beginner"),
            ("Swimming Training", "Training for a swimming competition", "Intermediate"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (name, description, difficulty))| {
            json!({
                "_id": format!("6650a1f0c0ffee00000004{:02}", i + 1),
                "name": name,
                "description": description,
                "difficulty_level": difficulty,
            })
        })
        .collect();

        Self {
            users: Value::Array(users),
            teams,
            activities: Value::Array(activities),
            leaderboard: Value::Array(leaderboard),
            workouts: Value::Array(workouts),
        }
    }

    /// The JSON array for one resource
    pub fn list(&self, kind: ResourceKind) -> &Value {
        match kind {
            ResourceKind::Activities => &self.activities,
            ResourceKind::Workouts => &self.workouts,
            ResourceKind::Teams => &self.teams,
            ResourceKind::Leaderboard => &self.leaderboard,
            ResourceKind::Users => &self.users,
        }
    }
}
