//! Lexicon: surface synonyms mapped to canonical verbs
//!
//! The pattern catalog already spells out these alternatives inside its
//! expressions; the lexicon is the reference list of supported synonyms and
//! canonicalizes vocabulary slots (window actions, file operations).

/// Synonym groups: canonical verb followed by its surface forms
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("click", &["clique", "cliquer", "cliquez", "clic", "click", "appuie", "appuyer", "appuyez"]),
    ("type", &["écris", "écrire", "écrivez", "tape", "taper", "tapez", "saisis", "saisir"]),
    ("screenshot", &["capture", "photo", "image", "screenshot", "copie écran"]),
    ("scroll", &["scroll", "scrolle", "défile", "défiler", "fais défiler", "fait défiler"]),
    ("window", &["fenêtre", "fenetre", "window"]),
    ("open", &["ouvre", "ouvrir", "lance", "lancer", "démarre", "démarrer"]),
    ("close", &["ferme", "fermer", "quitte", "quitter"]),
    ("find", &["trouve", "trouver", "cherche", "chercher", "recherche", "rechercher"]),
    ("move", &["déplace", "déplacer", "bouge", "bouger"]),
    ("wait", &["attends", "attendre", "attendez", "pause", "délai"]),
    ("minimize", &["minimise", "minimiser", "réduis", "réduire", "reduis", "reduire"]),
    ("maximize", &["maximise", "maximiser", "agrandis", "agrandir"]),
    ("resize", &["redimensionne", "redimensionner"]),
    ("create", &["crée", "créer", "créez", "cree", "creer"]),
    ("delete", &["supprime", "supprimer", "efface", "effacer"]),
    ("read", &["lis", "lire", "dis-moi"]),
];

/// Canonical verb for a surface form, if the lexicon knows it
pub fn canonical(word: &str) -> Option<&'static str> {
    let word = word.trim().to_lowercase();
    SYNONYM_GROUPS
        .iter()
        .find(|(canon, forms)| *canon == word || forms.contains(&word.as_str()))
        .map(|(canon, _)| *canon)
}

/// Normalize a word: its canonical verb, or the lowercased word itself
pub fn normalize(word: &str) -> String {
    canonical(word)
        .map(str::to_string)
        .unwrap_or_else(|| word.trim().to_lowercase())
}

/// Surface forms of a canonical verb
pub fn synonyms(canonical_verb: &str) -> &'static [&'static str] {
    SYNONYM_GROUPS
        .iter()
        .find(|(canon, _)| *canon == canonical_verb)
        .map(|(_, forms)| *forms)
        .unwrap_or(&[])
}
