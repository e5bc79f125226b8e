//! Keyword matching from free-text symptom descriptions to specialty names.
//!
//! No NLP, just case-insensitive substring search over a fixed Spanish keyword
//! dictionary. Dictionary order decides result order, which keeps the
//! assistant's recommendations stable for a given input.

/// Symptom keyword to specialty names, scanned in declaration order.
/// Multi-word keywords must match as a whole phrase.
const SYMPTOM_SPECIALTIES: &[(&str, &[&str])] = &[
    ("dolor de cabeza", &["Medicina General", "Neurología"]),
    ("migraña", &["Neurología", "Medicina General"]),
    ("fiebre", &["Medicina General", "Pediatría"]),
    ("tos", &["Medicina General", "Pediatría"]),
    ("dolor de pecho", &["Cardiología", "Medicina General"]),
    ("palpitaciones", &["Cardiología"]),
    ("manchas en la piel", &["Dermatología"]),
    ("acné", &["Dermatología"]),
    ("dolor de huesos", &["Traumatología"]),
    ("fractura", &["Traumatología"]),
    ("ansiedad", &["Psicología", "Medicina General"]),
    ("depresión", &["Psicología"]),
    ("problemas de visión", &["Oftalmología"]),
    ("ojos rojos", &["Oftalmología"]),
    ("embarazo", &["Ginecología"]),
    ("menstruación", &["Ginecología"]),
    ("nutrición", &["Nutrición"]),
    ("dieta", &["Nutrición"]),
    ("niño", &["Pediatría"]),
    ("bebé", &["Pediatría"]),
];

/// Fallback when no keyword matches.
const DEFAULT_SPECIALTY: &str = "Medicina General";

/// Map a symptom description to specialty names.
///
/// Every keyword found in the text contributes its specialties; duplicates
/// keep their first position. Unrecognized input falls back to general
/// medicine rather than returning nothing.
pub fn match_specialties(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut matches: Vec<String> = Vec::new();

    for &(keyword, specialties) in SYMPTOM_SPECIALTIES {
        if !lower.contains(keyword) {
            continue;
        }
        for &specialty in specialties {
            if !matches.iter().any(|m| m == specialty) {
                matches.push(specialty.to_string());
            }
        }
    }

    if matches.is_empty() {
        matches.push(DEFAULT_SPECIALTY.to_string());
    }

    matches
}
