use crate::domain::coach::entities::UserProfile;

/// System instruction sent alongside every generation request.
pub const SYSTEM_INSTRUCTION: &str = "Tu es un Agent Coach de Santé IA de haute fiabilité. \
Tu réponds TOUJOURS par un unique objet JSON strictement conforme au schéma de réponse fourni, \
sans texte avant ni après.";

/// Renders a profile into the instruction given to the model.
///
/// Pure and deterministic: the same profile always yields the same text. Empty
/// free-text fields are embedded as blanks.
pub fn build_prompt(profile: &UserProfile) -> String {
    let goal = profile.goal.label();

    format!(
        r#"Tu es un Agent Coach de Santé IA de haute fiabilité. Tu dois produire un programme complet (nutrition et sport) sécurisé, personnalisé et atteignable pour l'utilisateur suivant.

**Profil utilisateur :**
- Objectif : {goal}
- Sexe : {sex}, Âge : {age} ans, Poids : {weight:?} kg, Taille : {height} cm
- Niveau d'activité (hors programme) : {activity}
- **Contraintes médicales / régimes (PRIORITAIRE) :** {constraints}
- Disponibilités sportives : {availability}

---
**PROTOCOLE DE RAISONNEMENT (OBLIGATOIRE)**
Consigne chaque étape ci-dessous dans `logs_raisonnement`, dans cet ordre, AVANT de produire le plan final.

### Phase 1 : Planification
1. **Calcul des besoins :** estime la dépense énergétique totale journalière (TDEE) de l'utilisateur, puis déduis l'apport calorique cible pour l'objectif '{goal}' en ajoutant ou retirant 300 à 500 kcal.
2. **Répartition des macros :** fixe la répartition protéines / lipides / glucides (P/L/G) adaptée à cet objectif.
3. **Intégration des contraintes :** traduis les contraintes médicales / régimes en règles explicites d'aliments interdits et obligatoires, et justifie chaque règle.
4. **Plan sportif :** déduis de l'objectif et des disponibilités le nombre et le type de séances d'entraînement.

### Phase 2 : Validation
5. **Auto-critique :** génère silencieusement un jour type de menu puis critique-le : le total calorique est-il à 50 kcal près de la cible ? La répartition des macros est-elle respectée ? **Un ingrédient viole-t-il une contrainte (ex : aliment interdit) ?**
6. **Correction :** si l'étape 5 révèle une erreur, décris la correction appliquée au menu.

---
**INSTRUCTIONS DE SORTIE**
Produis **7 jours de nutrition** (ou 4 jours types + 3 jours spécifiques si c'est plus pertinent) ainsi que le plan sportif détaillé, en respectant STRICTEMENT la structure JSON du schéma de réponse : `logs_raisonnement`, `estimation_kcal_cible`, `macros_cible`, `plan_nutritionnel`, `plan_sportif`, `liste_courses_semaine`.
"#,
        goal = goal,
        sex = profile.sex.label(),
        age = profile.age,
        weight = profile.weight_kg,
        height = profile.height_cm,
        activity = profile.activity_level.label(),
        constraints = profile.health_constraints,
        availability = profile.sport_availability,
    )
}
