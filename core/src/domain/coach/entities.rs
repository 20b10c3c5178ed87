use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Recomposition,
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Recomposition,
        Goal::Maintenance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Perte de poids",
            Goal::MuscleGain => "Prise de masse musculaire",
            Goal::Recomposition => "Recomposition corporelle",
            Goal::Maintenance => "Maintien",
        }
    }

    /// Form value, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Recomposition => "recomposition",
            Goal::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Homme",
            Sex::Female => "Femme",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sédentaire",
            ActivityLevel::Light => "Léger",
            ActivityLevel::Moderate => "Modéré",
            ActivityLevel::Intense => "Intense",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Intense => "intense",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Health profile collected from the form, used for a single generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub goal: Goal,
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: u32,
    pub activity_level: ActivityLevel,
    pub health_constraints: String,
    pub sport_availability: String,
}

/// One entry of the model's reasoning log (planning or self-correction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReasoningStep {
    #[serde(rename = "titre")]
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "description_plat")]
    pub description: String,
    pub calories: i64,
    #[serde(rename = "proteines_g")]
    pub protein_g: f64,
    #[serde(rename = "lipides_g")]
    pub fat_g: f64,
    #[serde(rename = "glucides_g")]
    pub carbs_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionDay {
    #[serde(rename = "jour")]
    pub day: String,
    #[serde(rename = "repas")]
    pub meals: Vec<Meal>,
    #[serde(rename = "total_kcal_jour")]
    pub total_kcal: i64,
    #[serde(rename = "justification_adaptation")]
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSession {
    #[serde(rename = "jour_semaine")]
    pub weekday: String,
    #[serde(rename = "duree_minutes")]
    pub duration_minutes: i64,
    #[serde(rename = "type_seance")]
    pub session_type: String,
    #[serde(rename = "exercices")]
    pub exercises: Vec<String>,
}

/// Full program returned by the model once it has been validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoachResult {
    #[serde(rename = "logs_raisonnement")]
    pub reasoning_steps: Vec<ReasoningStep>,
    #[serde(rename = "estimation_kcal_cible")]
    pub target_kcal: i64,
    #[serde(rename = "macros_cible")]
    pub target_macros: String,
    #[serde(rename = "plan_nutritionnel")]
    pub nutrition_plan: Vec<NutritionDay>,
    #[serde(rename = "plan_sportif")]
    pub workout_plan: Vec<WorkoutSession>,
    #[serde(rename = "liste_courses_semaine")]
    pub shopping_list: Vec<String>,
}
