use maud::{Markup, html};
use nutricoach_core::domain::coach::entities::{
    CoachResult, Meal, NutritionDay, ReasoningStep, WorkoutSession,
};

/// Projection of a validated program into the dashboard sections.
pub fn dashboard(result: &CoachResult) -> Markup {
    html! {
        section id="program" {
            h2 { "✨ Programme Personnalisé Généré" }
            (reasoning_log(&result.reasoning_steps))
            hr;
            (targets(result))
            (nutrition_tabs(&result.nutrition_plan))
            hr;
            (workout_plan(&result.workout_plan))
            hr;
            (shopping_list(&result.shopping_list))
        }
    }
}

pub fn failure(message: &str) -> Markup {
    html! {
        div id="failure" class="error" role="alert" {
            p { strong { "Impossible de générer le programme. Vérifiez l'état de l'API." } }
            p { "Erreur lors de l'exécution de l'Agent IA : " (message) }
        }
    }
}

fn reasoning_log(steps: &[ReasoningStep]) -> Markup {
    html! {
        section id="reasoning" {
            h3 { "🧠 Logique et Raisonnement de l'Agent (CoT & Self-Correction)" }
            p class="info" {
                "Ce sont les étapes de pensée et de validation que l'Agent a suivies pour garantir la fiabilité du plan."
            }
            @for (index, step) in steps.iter().enumerate() {
                details class="reasoning-step" {
                    summary { "Étape " (index + 1) " : " (step.title) }
                    div class="details-body" { (step.details) }
                }
            }
        }
    }
}

fn targets(result: &CoachResult) -> Markup {
    html! {
        div class="columns" id="targets" {
            div {
                h3 { "🍽️ Objectifs Calculés" }
                p class="caption" { "Calories Cible Journalière" }
                p class="metric" { (result.target_kcal) " kcal" }
            }
            div {
                h3 { "🔬 Répartition des Macros" }
                p { strong { (result.target_macros) } " (Protéines/Lipides/Glucides)" }
            }
        }
    }
}

fn nutrition_tabs(days: &[NutritionDay]) -> Markup {
    html! {
        section id="nutrition" {
            h3 { "Menus Journaliers" }
            div class="tabs" {
                @for (index, day) in days.iter().enumerate() {
                    input type="radio" name="nutrition-day" id=(format!("day-{index}")) checked[index == 0];
                    label for=(format!("day-{index}")) { (day.day) }
                    div class="tab-panel" {
                        p { strong { "Justification : " } (day.justification) }
                        p class="caption" { "Total Kcal" }
                        p class="metric" { (day.total_kcal) " kcal" }
                        @for meal in &day.meals {
                            (meal_block(meal))
                        }
                    }
                }
            }
        }
    }
}

fn meal_block(meal: &Meal) -> Markup {
    html! {
        div class="meal" {
            p { strong { (meal.name) } " (" (meal.calories) " kcal)" }
            p { em { (meal.description) } }
            p class="caption" {
                "Macros: P:" (meal.protein_g) "g | L:" (meal.fat_g) "g | G:" (meal.carbs_g) "g"
            }
        }
    }
}

fn workout_plan(sessions: &[WorkoutSession]) -> Markup {
    html! {
        section id="workouts" {
            h3 { "💪 Programme Sportif" }
            @for session in sessions {
                div class="workout" {
                    p {
                        strong { (session.weekday) } " - " strong { (session.session_type) }
                        " (" (session.duration_minutes) " min)"
                    }
                    p { em { "Exercices :" } }
                    ul {
                        @for exercise in &session.exercises {
                            li { (exercise) }
                        }
                    }
                }
            }
        }
    }
}

fn shopping_list(items: &[String]) -> Markup {
    html! {
        section id="shopping-list" {
            h3 { "🛒 Liste de Courses" }
            p { "Voici la liste complète des ingrédients pour la semaine (regroupée par l'Agent) :" }
            ul {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}
