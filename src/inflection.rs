//! Suffix heuristics that fill in the -ing and -s forms of a user-submitted
//! verb. Catalogue verbs carry every form explicitly and never go through
//! here. The rules do not double final consonants ("begin" gives "begining")
//! and know nothing about irregular stems.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// First matching rule wins: "-ie" becomes "-ying", a final "e" is dropped
/// before "ing", anything else takes "ing" as is.
pub fn derive_present_participle(infinitive: &str) -> String {
    if let Some(stem) = infinitive.strip_suffix("ie") {
        format!("{}ying", stem)
    } else if let Some(stem) = infinitive.strip_suffix('e') {
        format!("{}ing", stem)
    } else {
        format!("{}ing", infinitive)
    }
}

/// Sibilant endings take "es", consonant + "y" becomes "ies", anything else
/// takes "s". A bare "y" has no preceding vowel and so becomes "ies".
pub fn derive_third_person_singular(infinitive: &str) -> String {
    if ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| infinitive.ends_with(suffix))
    {
        return format!("{}es", infinitive);
    }

    if let Some(stem) = infinitive.strip_suffix('y') {
        let preceded_by_vowel = stem.chars().last().is_some_and(|c| VOWELS.contains(&c));
        if !preceded_by_vowel {
            return format!("{}ies", stem);
        }
    }

    format!("{}s", infinitive)
}

/// The gerund is spelled exactly like the present participle.
pub fn derive_gerund(present_participle: &str) -> String {
    present_participle.to_string()
}
