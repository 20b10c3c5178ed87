use maud::{Markup, html};
use nutricoach_core::domain::coach::entities::{ActivityLevel, Goal, Sex};

use crate::application::http::coach::{ui_config::UiConfig, validators::ProfileRequest};

pub fn profile_form(ui: &UiConfig, values: &ProfileRequest) -> Markup {
    html! {
        form id="profile-form" method="post" action=(ui.form_action()) {
            h2 { "🎯 Vos Objectifs et Profil" }
            div class="columns" {
                div {
                    div class="field" {
                        label for="goal" { "Objectif principal" }
                        select id="goal" name="goal" {
                            @for goal in Goal::ALL {
                                option value=(goal.as_str()) selected[goal == values.goal] { (goal.label()) }
                            }
                        }
                    }
                    div class="field" {
                        label for="sex" { "Sexe" }
                        select id="sex" name="sex" {
                            @for sex in Sex::ALL {
                                option value=(sex.as_str()) selected[sex == values.sex] { (sex.label()) }
                            }
                        }
                    }
                    div class="field" {
                        label for="age" { "Âge (années)" }
                        input id="age" name="age" type="number" min="18" step="1" required value=(values.age);
                    }
                    div class="field" {
                        label for="weight_kg" { "Poids (kg)" }
                        input id="weight_kg" name="weight_kg" type="number" min="30" step="0.5" required
                            value=(format!("{:?}", values.weight_kg));
                    }
                    div class="field" {
                        label for="height_cm" { "Taille (cm)" }
                        input id="height_cm" name="height_cm" type="number" min="120" step="1" required value=(values.height_cm);
                    }
                }
                div {
                    div class="field" {
                        label for="activity_level" { "Niveau d'activité physique" }
                        select id="activity_level" name="activity_level" {
                            @for level in ActivityLevel::ALL {
                                option value=(level.as_str()) selected[level == values.activity_level] { (level.label()) }
                            }
                        }
                    }
                    h3 { "⚠️ Contraintes / Antécédents" }
                    div class="field" {
                        label for="health_constraints" {
                            "Allergies, régimes, antécédents médicaux (ex: Diabète, Végétarien)."
                        }
                        textarea id="health_constraints" name="health_constraints" maxlength="5000"
                            placeholder="Ex: Allergie aux noix, végétarien." {
                            (values.health_constraints)
                        }
                    }
                    div class="field" {
                        label for="sport_availability" {
                            "Disponibilités et préférences sportives (équipement, jours, type)."
                        }
                        textarea id="sport_availability" name="sport_availability" maxlength="5000"
                            placeholder="Ex: 3 séances par semaine, préfère la musculation." {
                            (values.sport_availability)
                        }
                    }
                }
            }
            button type="submit" { "Générer mon Programme" }
            p id="pending" class="pending" {
                "L'Agent Coach procède à la planification et à l'auto-critique..."
            }
        }
    }
}

pub fn form_errors(messages: &[String]) -> Markup {
    html! {
        div class="error" role="alert" {
            p { "Le formulaire contient des erreurs :" }
            ul {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}
