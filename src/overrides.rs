//! Per-verb exceptions to the derived forms, keyed by infinitive.
//!
//! This table is the only place that knows about individual verbs. Anything
//! that needs to treat "be" (or any other verb) specially asks here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCase {
    pub infinitive: &'static str,
    /// Replaces the heuristic present participle when none was supplied.
    pub present_participle: Option<&'static str>,
    /// Replaces the heuristic third person singular when none was supplied.
    pub third_person_singular: Option<&'static str>,
    /// Forced display form for the simple present slot.
    pub simple_present: Option<&'static str>,
    /// Replaces the "He ..." line of the narration script.
    pub narration_present: Option<&'static str>,
}

const SPECIAL_CASES: &[SpecialCase] = &[
    SpecialCase {
        infinitive: "be",
        present_participle: Some("being"),
        third_person_singular: Some("is"),
        simple_present: Some("am/is/are"),
        narration_present: Some("I am, you are, he is"),
    },
    SpecialCase {
        infinitive: "do",
        present_participle: None,
        third_person_singular: Some("does"),
        simple_present: None,
        narration_present: None,
    },
    SpecialCase {
        infinitive: "go",
        present_participle: None,
        third_person_singular: Some("goes"),
        simple_present: None,
        narration_present: None,
    },
    SpecialCase {
        infinitive: "have",
        present_participle: None,
        third_person_singular: Some("has"),
        simple_present: None,
        narration_present: None,
    },
];

pub fn lookup(infinitive: &str) -> Option<&'static SpecialCase> {
    SPECIAL_CASES.iter().find(|case| case.infinitive == infinitive)
}

pub fn present_participle(infinitive: &str) -> Option<&'static str> {
    lookup(infinitive).and_then(|case| case.present_participle)
}

pub fn third_person_singular(infinitive: &str) -> Option<&'static str> {
    lookup(infinitive).and_then(|case| case.third_person_singular)
}

/// The simple present display form: the forced value for the copula, the
/// third person singular for everything else.
pub fn simple_present(infinitive: &str, third_person_singular: &str) -> String {
    lookup(infinitive)
        .and_then(|case| case.simple_present)
        .unwrap_or(third_person_singular)
        .to_string()
}

pub fn narration_present(infinitive: &str) -> Option<&'static str> {
    lookup(infinitive).and_then(|case| case.narration_present)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copula_simple_present_is_forced() {
        assert_eq!(simple_present("be", "is"), "am/is/are");
        assert_eq!(simple_present("be", "whatever"), "am/is/are");
        assert_eq!(simple_present("go", "goes"), "goes");
        assert_eq!(simple_present("speak", "speaks"), "speaks");
    }

    #[test]
    fn test_copula_present_participle() {
        assert_eq!(present_participle("be"), Some("being"));
        assert_eq!(present_participle("like"), None);
    }

    #[test]
    fn test_third_person_exceptions() {
        assert_eq!(third_person_singular("go"), Some("goes"));
        assert_eq!(third_person_singular("do"), Some("does"));
        assert_eq!(third_person_singular("speak"), None);
    }

    #[test]
    fn test_narration_line() {
        assert_eq!(narration_present("be"), Some("I am, you are, he is"));
        assert_eq!(narration_present("go"), None);
    }
}
