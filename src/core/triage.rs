use crate::models::{CareLevel, TriageAssessment, Urgency};

// Phrase tables checked in descending severity; the first tier with a hit
// decides the assessment. Matching is case-insensitive substring, the same
// discipline the facility scorer uses.

const EMERGENCY_TERMS: &[&str] = &[
    "chest pain",
    "unconscious",
    "not breathing",
    "severe bleeding",
    "stroke",
    "seizure",
    "heart attack",
    "anaphyla",
];

const HIGH_TERMS: &[&str] = &[
    "difficulty breathing",
    "shortness of breath",
    "fracture",
    "broken bone",
    "high fever",
    "severe pain",
    "head injury",
    "deep cut",
];

const MEDIUM_TERMS: &[&str] = &[
    "fever",
    "vomiting",
    "diarrhea",
    "persistent cough",
    "infection",
    "migraine",
    "dehydration",
];

/// Assess free-text symptoms into a triage-level recommendation
///
/// Triage guidance only: no diagnosis, no prescription. Unassessable input
/// (empty or whitespace-only) gets the safe fallback assessment.
pub fn triage_symptoms(symptoms: &str) -> TriageAssessment {
    let trimmed = symptoms.trim();
    if trimmed.is_empty() {
        return fallback_assessment();
    }

    let lowered = trimmed.to_lowercase();
    let summary = format!("Reported symptoms: {}", trimmed);

    if hits_any(&lowered, EMERGENCY_TERMS) {
        return TriageAssessment {
            summary,
            urgency: Urgency::Emergency,
            recommended_care: CareLevel::TertiaryHospital,
            advice: "Seek emergency care immediately or call for an ambulance.".to_string(),
        };
    }

    if hits_any(&lowered, HIGH_TERMS) {
        return TriageAssessment {
            summary,
            urgency: Urgency::High,
            recommended_care: CareLevel::GeneralHospital,
            advice: "Visit a hospital as soon as possible today.".to_string(),
        };
    }

    if hits_any(&lowered, MEDIUM_TERMS) {
        return TriageAssessment {
            summary,
            urgency: Urgency::Medium,
            recommended_care: CareLevel::GeneralHospital,
            advice: "Book an appointment within the next day or two.".to_string(),
        };
    }

    TriageAssessment {
        summary,
        urgency: Urgency::Low,
        recommended_care: CareLevel::Clinic,
        advice: "Monitor your symptoms and visit a clinic if they persist.".to_string(),
    }
}

/// Safe default when symptoms cannot be assessed
pub fn fallback_assessment() -> TriageAssessment {
    TriageAssessment {
        summary: "Unable to summarize symptoms.".to_string(),
        urgency: Urgency::Unknown,
        recommended_care: CareLevel::GeneralHospital,
        advice: "Please seek professional medical attention.".to_string(),
    }
}

#[inline]
fn hits_any(symptoms: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| symptoms.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_terms_dominate() {
        let assessment = triage_symptoms("sudden chest pain and fever");

        assert_eq!(assessment.urgency, Urgency::Emergency);
        assert_eq!(assessment.recommended_care, CareLevel::TertiaryHospital);
    }

    #[test]
    fn test_high_urgency_routes_to_hospital() {
        let assessment = triage_symptoms("Shortness of Breath after exercise");

        assert_eq!(assessment.urgency, Urgency::High);
        assert_eq!(assessment.recommended_care, CareLevel::GeneralHospital);
    }

    #[test]
    fn test_medium_urgency() {
        let assessment = triage_symptoms("fever and vomiting since yesterday");

        assert_eq!(assessment.urgency, Urgency::Medium);
        assert_eq!(assessment.recommended_care, CareLevel::GeneralHospital);
    }

    #[test]
    fn test_unrecognized_symptoms_default_to_low() {
        let assessment = triage_symptoms("mild itch on one finger");

        assert_eq!(assessment.urgency, Urgency::Low);
        assert_eq!(assessment.recommended_care, CareLevel::Clinic);
    }

    #[test]
    fn test_blank_symptoms_use_fallback() {
        let assessment = triage_symptoms("   ");

        assert_eq!(assessment.urgency, Urgency::Unknown);
        assert_eq!(assessment.recommended_care, CareLevel::GeneralHospital);
        assert_eq!(assessment.advice, "Please seek professional medical attention.");
    }

    #[test]
    fn test_summary_echoes_input() {
        let assessment = triage_symptoms("persistent cough");

        assert_eq!(assessment.summary, "Reported symptoms: persistent cough");
    }
}
