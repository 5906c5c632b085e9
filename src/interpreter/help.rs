//! Example phrasings per action category, for help display

use std::collections::BTreeMap;

const EXAMPLES: &[(&str, &[&str])] = &[
    ("Click", &["Clique sur le bouton OK", "Clique à 100, 200", "Appuie sur Enregistrer"]),
    ("Typing", &["Écris 'Bonjour le monde'", "Tape mon nom", "Saisis le mot de passe"]),
    ("Screenshot", &["Prends une capture d'écran", "Fais une photo de l'écran", "Copie l'écran"]),
    ("Search", &["Trouve le texte 'Connexion'", "Cherche 'mot de passe'", "Où est le bouton Valider ?"]),
    ("Scrolling", &["Scroll vers le bas", "Défile vers le haut", "Scroll de 5"]),
    ("Keys", &["Appuie sur Entrée", "Ctrl+C", "Alt+Tab"]),
    ("Applications", &["Lance Chrome", "Ouvre Word", "Va sur Google"]),
    ("Waiting", &["Attends 2 secondes", "Pause de 5", "Attends 1 minute"]),
    ("Windows", &["Ferme la fenêtre", "Minimise la fenêtre"]),
    ("Files", &["Crée un dossier Projets", "Supprime brouillon.txt"]),
    ("Mouse", &["Déplace la souris vers 500, 300", "Va à 100, 200"]),
    ("Screen reading", &["Lis ce qui est écrit", "Que dit l'écran ?"]),
];

/// Static catalog of example commands, keyed by category
pub fn get_action_help() -> BTreeMap<String, Vec<String>> {
    EXAMPLES
        .iter()
        .map(|(category, phrases)| {
            (
                category.to_string(),
                phrases.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}
