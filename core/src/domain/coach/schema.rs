use serde_json::{Value, json};

use crate::domain::coach::{
    entities::CoachResult,
    errors::{MismatchKind, SchemaValidationError},
};

/// Returns the JSON schema the model must follow when generating a program.
///
/// The same descriptor is sent to the provider as `response_schema` and used by
/// [`validate_coach_result`] to check what comes back.
pub fn coach_result_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "logs_raisonnement": {
                "type": "array",
                "description": "Chaîne de pensée complète : planification puis auto-critique et correction.",
                "items": {
                    "type": "object",
                    "properties": {
                        "titre": {
                            "type": "string",
                            "description": "Titre de l'étape (ex: Calcul des besoins, Auto-critique)."
                        },
                        "details": {
                            "type": "string",
                            "description": "Calcul, décision ou critique effectuée à cette étape."
                        }
                    },
                    "required": ["titre", "details"]
                }
            },
            "estimation_kcal_cible": {
                "type": "integer",
                "description": "Apport calorique journalier cible."
            },
            "macros_cible": {
                "type": "string",
                "description": "Répartition macro-nutritionnelle cible (ex: 40P/30L/30G)."
            },
            "plan_nutritionnel": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "jour": {
                            "type": "string",
                            "description": "Nom du jour ou 'Jour type'."
                        },
                        "repas": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "nom": {
                                        "type": "string",
                                        "description": "Petit-déjeuner, Déjeuner, Dîner ou Collation."
                                    },
                                    "description_plat": {
                                        "type": "string",
                                        "description": "Ingrédients et préparation sommaire du plat."
                                    },
                                    "calories": { "type": "integer" },
                                    "proteines_g": { "type": "number" },
                                    "lipides_g": { "type": "number" },
                                    "glucides_g": { "type": "number" }
                                },
                                "required": [
                                    "nom", "description_plat", "calories",
                                    "proteines_g", "lipides_g", "glucides_g"
                                ]
                            }
                        },
                        "total_kcal_jour": { "type": "integer" },
                        "justification_adaptation": {
                            "type": "string",
                            "description": "Pourquoi ce jour respecte l'objectif et les contraintes."
                        }
                    },
                    "required": ["jour", "repas", "total_kcal_jour", "justification_adaptation"]
                }
            },
            "plan_sportif": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "jour_semaine": { "type": "string" },
                        "duree_minutes": { "type": "integer" },
                        "type_seance": {
                            "type": "string",
                            "description": "Force, Cardio, Flexibilité, HIIT..."
                        },
                        "exercices": {
                            "type": "array",
                            "description": "Exercices avec séries, répétitions et temps de repos.",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["jour_semaine", "duree_minutes", "type_seance", "exercices"]
                }
            },
            "liste_courses_semaine": {
                "type": "array",
                "description": "Liste de courses complète, regroupée par type d'aliments.",
                "items": { "type": "string" }
            }
        },
        "required": [
            "logs_raisonnement", "estimation_kcal_cible", "macros_cible",
            "plan_nutritionnel", "plan_sportif", "liste_courses_semaine"
        ]
    })
}

/// Checks a raw model payload against [`coach_result_schema`] and builds the typed result.
///
/// Fails on the first missing required field or type mismatch; nothing is
/// defaulted. Properties the schema does not declare are ignored. Whole-number
/// floats such as `2200.0` are accepted for `integer` fields.
pub fn validate_coach_result(mut raw: Value) -> Result<CoachResult, SchemaValidationError> {
    let schema = coach_result_schema();
    check_value(&mut raw, &schema, "$")?;

    serde_json::from_value(raw).map_err(|e| SchemaValidationError {
        path: "$".to_string(),
        kind: MismatchKind::InvalidValue(e.to_string()),
    })
}

fn check_value(value: &mut Value, schema: &Value, path: &str) -> Result<(), SchemaValidationError> {
    match schema.get("type").and_then(Value::as_str) {
        Some("object") => check_object(value, schema, path),
        Some("array") => {
            let found = json_type(value);
            let items = value
                .as_array_mut()
                .ok_or_else(|| SchemaValidationError::type_mismatch(path, "array", found))?;

            if let Some(item_schema) = schema.get("items") {
                for (index, item) in items.iter_mut().enumerate() {
                    check_value(item, item_schema, &format!("{path}[{index}]"))?;
                }
            }
            Ok(())
        }
        Some("string") => expect_type(value.is_string(), path, "string", value),
        Some("integer") => check_integer(value, path),
        Some("number") => expect_type(value.is_number(), path, "number", value),
        Some("boolean") => expect_type(value.is_boolean(), path, "boolean", value),
        _ => Ok(()),
    }
}

/// Accepts `i64` values and whole-number floats in `i64` range, rewriting the latter in place.
fn check_integer(value: &mut Value, path: &str) -> Result<(), SchemaValidationError> {
    if value.is_i64() {
        return Ok(());
    }

    if value.is_u64() {
        return Err(out_of_range(value, path));
    }

    match value.as_f64() {
        Some(n) if n.is_finite() && n.fract() == 0.0 => {
            if n < i64::MIN as f64 || n >= i64::MAX as f64 {
                return Err(out_of_range(value, path));
            }
            *value = Value::from(n as i64);
            Ok(())
        }
        _ => Err(SchemaValidationError::type_mismatch(path, "integer", json_type(value))),
    }
}

fn out_of_range(value: &Value, path: &str) -> SchemaValidationError {
    SchemaValidationError::invalid_value(
        path,
        format!("{value} does not fit in a 64-bit signed integer"),
    )
}

fn check_object(value: &mut Value, schema: &Value, path: &str) -> Result<(), SchemaValidationError> {
    let found = json_type(value);
    let object = value
        .as_object_mut()
        .ok_or_else(|| SchemaValidationError::type_mismatch(path, "object", found))?;

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);

    for name in required {
        if !object.contains_key(name) {
            return Err(SchemaValidationError::missing_field(format!("{path}.{name}")));
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, property_schema) in properties {
            if let Some(field) = object.get_mut(name) {
                check_value(field, property_schema, &format!("{path}.{name}"))?;
            }
        }
    }

    Ok(())
}

fn expect_type(
    matches: bool,
    path: &str,
    expected: &'static str,
    value: &Value,
) -> Result<(), SchemaValidationError> {
    if matches {
        Ok(())
    } else {
        Err(SchemaValidationError::type_mismatch(path, expected, json_type(value)))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
