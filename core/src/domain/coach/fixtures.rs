use serde_json::{Value, json};

use crate::domain::coach::entities::{ActivityLevel, Goal, Sex, UserProfile};

pub fn sample_profile() -> UserProfile {
    UserProfile {
        goal: Goal::WeightLoss,
        sex: Sex::Male,
        age: 30,
        weight_kg: 75.0,
        height_cm: 175,
        activity_level: ActivityLevel::Moderate,
        health_constraints: "Végétarien".to_string(),
        sport_availability: "3 séances/semaine".to_string(),
    }
}

/// Well-formed model payload with `days` nutrition days and `sessions` workouts.
pub fn sample_result_json(days: usize, sessions: usize) -> Value {
    let nutrition: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "jour": format!("Jour {day}"),
                "repas": [
                    {
                        "nom": "Petit-déjeuner",
                        "description_plat": "Porridge d'avoine, banane et graines de chia",
                        "calories": 550,
                        "proteines_g": 20.5,
                        "lipides_g": 12.0,
                        "glucides_g": 85.0
                    },
                    {
                        "nom": "Déjeuner",
                        "description_plat": "Curry de lentilles corail et riz complet",
                        "calories": 800,
                        "proteines_g": 35.0,
                        "lipides_g": 20.0,
                        "glucides_g": 110.0
                    },
                    {
                        "nom": "Dîner",
                        "description_plat": "Tofu sauté aux légumes verts",
                        "calories": 850,
                        "proteines_g": 45.0,
                        "lipides_g": 35.0,
                        "glucides_g": 70.0
                    }
                ],
                "total_kcal_jour": 2200,
                "justification_adaptation": "Riche en protéines végétales, sans viande ni poisson."
            })
        })
        .collect();

    let workouts: Vec<Value> = (1..=sessions)
        .map(|session| {
            json!({
                "jour_semaine": format!("Séance {session}"),
                "duree_minutes": 45,
                "type_seance": "Force",
                "exercices": ["Squat 4x10", "Gainage 3x45s"]
            })
        })
        .collect();

    json!({
        "logs_raisonnement": [
            { "titre": "Calcul des besoins", "details": "TDEE estimé à 2700 kcal, cible à 2200 kcal." },
            { "titre": "Auto-critique", "details": "Le dîner du jour type contenait du poisson." },
            { "titre": "Correction finale", "details": "Poisson remplacé par du tofu." }
        ],
        "estimation_kcal_cible": 2200,
        "macros_cible": "30P/30L/40G",
        "plan_nutritionnel": nutrition,
        "plan_sportif": workouts,
        "liste_courses_semaine": ["Lentilles", "Tofu", "Flocons d'avoine"]
    })
}
