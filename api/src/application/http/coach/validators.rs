use nutricoach_core::domain::coach::entities::{ActivityLevel, Goal, Sex, UserProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Profile as submitted by the HTML form (urlencoded) or the JSON endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProfileRequest {
    pub goal: Goal,
    pub sex: Sex,

    #[validate(range(min = 18, message = "age must be at least 18"))]
    #[schema(example = 30)]
    pub age: u32,

    #[validate(range(min = 30.0, message = "weight_kg must be at least 30"))]
    #[schema(example = 75.0)]
    pub weight_kg: f64,

    #[validate(range(min = 120, message = "height_cm must be at least 120"))]
    #[schema(example = 175)]
    pub height_cm: u32,

    pub activity_level: ActivityLevel,

    #[serde(default)]
    #[validate(length(max = 5000, message = "health_constraints must be at most 5000 characters"))]
    #[schema(example = "Végétarien")]
    pub health_constraints: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "sport_availability must be at most 5000 characters"))]
    #[schema(example = "3 séances/semaine")]
    pub sport_availability: String,
}

impl Default for ProfileRequest {
    fn default() -> Self {
        Self {
            goal: Goal::WeightLoss,
            sex: Sex::Male,
            age: 30,
            weight_kg: 75.0,
            height_cm: 175,
            activity_level: ActivityLevel::Sedentary,
            health_constraints: String::new(),
            sport_availability: String::new(),
        }
    }
}

const REQUIRED_FORM_FIELDS: [&str; 6] = [
    "goal",
    "sex",
    "age",
    "weight_kg",
    "height_cm",
    "activity_level",
];

impl ProfileRequest {
    /// Rebuilds a request from raw urlencoded pairs, keeping every value that parses.
    ///
    /// Fields that are missing or unparsable keep their default and yield one
    /// message each, so the form can be shown again with what the user typed.
    pub fn from_form_pairs(pairs: &[(String, String)]) -> (Self, Vec<String>) {
        let mut request = Self::default();
        let mut errors = Vec::new();

        for field in REQUIRED_FORM_FIELDS {
            if !pairs.iter().any(|(name, _)| name == field) {
                errors.push(format!("{field} is required"));
            }
        }

        for (name, raw) in pairs {
            match name.as_str() {
                "goal" => match parse_choice(&Goal::ALL, Goal::as_str, raw) {
                    Some(goal) => request.goal = goal,
                    None => errors.push(format!("goal has an unknown value: {raw}")),
                },
                "sex" => match parse_choice(&Sex::ALL, Sex::as_str, raw) {
                    Some(sex) => request.sex = sex,
                    None => errors.push(format!("sex has an unknown value: {raw}")),
                },
                "activity_level" => match parse_choice(&ActivityLevel::ALL, ActivityLevel::as_str, raw) {
                    Some(level) => request.activity_level = level,
                    None => errors.push(format!("activity_level has an unknown value: {raw}")),
                },
                "age" => match raw.trim().parse() {
                    Ok(age) => request.age = age,
                    Err(_) => errors.push("age must be a whole number".to_string()),
                },
                "height_cm" => match raw.trim().parse() {
                    Ok(height) => request.height_cm = height,
                    Err(_) => errors.push("height_cm must be a whole number".to_string()),
                },
                "weight_kg" => match raw.trim().parse::<f64>() {
                    Ok(weight) if weight.is_finite() => request.weight_kg = weight,
                    _ => errors.push("weight_kg must be a number".to_string()),
                },
                "health_constraints" => request.health_constraints = raw.clone(),
                "sport_availability" => request.sport_availability = raw.clone(),
                _ => {}
            }
        }

        (request, errors)
    }
}

fn parse_choice<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str, raw: &str) -> Option<T> {
    all.iter().copied().find(|choice| as_str(choice) == raw)
}

impl From<ProfileRequest> for UserProfile {
    fn from(request: ProfileRequest) -> Self {
        UserProfile {
            goal: request.goal,
            sex: request.sex,
            age: request.age,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            activity_level: request.activity_level,
            health_constraints: request.health_constraints,
            sport_availability: request.sport_availability,
        }
    }
}
