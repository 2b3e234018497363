use serde::{Deserialize, Serialize};

/// Top-level keys a generated plan must carry to be accepted.
pub const REQUIRED_PLAN_KEYS: [&str; 2] = ["planName", "weeks"];

/// Typed shape of a generated workout plan. Used to check a plan strictly;
/// the payload returned to callers is the model's JSON as produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub plan_name: String,
    pub plan_overview: String,
    pub progression_tips: Vec<String>,
    pub weeks: Vec<PlanWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWeek {
    pub week_number: u32,
    pub days: Vec<PlanDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<PlannedExercise>,
}

/// A single exercise prescription. Never a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub name: String,
    pub sets: Prescription,
    pub reps: Prescription,
    pub rest: Prescription,
}

/// Sets, reps and rest come back either as numbers (`3`) or text (`"8-12"`, `"60s"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prescription {
    Count(serde_json::Number),
    Text(String),
}

/// Successful plan generator payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    /// Model reasoning, empty when the model emitted none.
    pub thinking: String,
    pub plan: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_plan_accepts_mixed_prescriptions() {
        let plan: WorkoutPlan = serde_json::from_value(json!({
            "planName": "Beginner Full-Body Foundation",
            "planOverview": "Compound lifts three times a week.",
            "progressionTips": ["Add weight when all sets feel easy."],
            "weeks": [{
                "weekNumber": 1,
                "days": [{
                    "day": "Monday",
                    "focus": "Full Body A",
                    "exercises": [
                        {"name": "Goblet Squat", "sets": 3, "reps": "8-12", "rest": "60s"},
                        {"name": "Plank", "sets": 3, "reps": 45, "rest": 30}
                    ]
                }]
            }]
        }))
        .unwrap();

        let exercises = &plan.weeks[0].days[0].exercises;
        assert_eq!(exercises[0].reps, Prescription::Text("8-12".to_string()));
        assert_eq!(exercises[1].rest, Prescription::Count(30.into()));
    }

    #[test]
    fn test_typed_plan_rejects_string_exercises() {
        let result = serde_json::from_value::<WorkoutPlan>(json!({
            "planName": "Quick Plan",
            "planOverview": "",
            "progressionTips": [],
            "weeks": [{
                "weekNumber": 1,
                "days": [{ "day": "Monday", "focus": "Legs", "exercises": ["Squats 3x10"] }]
            }]
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_typed_plan_rejects_exercise_without_rest() {
        let result = serde_json::from_value::<WorkoutPlan>(json!({
            "planName": "Quick Plan",
            "planOverview": "",
            "progressionTips": [],
            "weeks": [{
                "weekNumber": 1,
                "days": [{
                    "day": "Monday",
                    "focus": "Legs",
                    "exercises": [{"name": "Squat", "sets": 3, "reps": "10"}]
                }]
            }]
        }));

        assert!(result.is_err());
    }
}
