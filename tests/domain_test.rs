use legalens::domain::{
    DocumentKind, Highlight, ReadabilityScore, RiskCategory, SentimentInsight, language_code,
};

#[test]
fn given_contract_categories_when_deserializing_then_accepts_all_three() {
    assert_eq!(
        serde_json::from_str::<RiskCategory>(r#""High-Risk""#).unwrap(),
        RiskCategory::HighRisk
    );
    assert_eq!(
        serde_json::from_str::<RiskCategory>(r#""Cautionary""#).unwrap(),
        RiskCategory::Cautionary
    );
    assert_eq!(
        serde_json::from_str::<RiskCategory>(r#""Standard""#).unwrap(),
        RiskCategory::Standard
    );
}

#[test]
fn given_category_outside_contract_when_deserializing_then_rejects() {
    assert!(serde_json::from_str::<RiskCategory>(r#""Severe""#).is_err());
    assert!(serde_json::from_str::<RiskCategory>(r#""high-risk""#).is_err());
}

#[test]
fn given_highlight_with_unknown_category_when_deserializing_then_rejects() {
    let json = r#"{"text": "clause", "category": "Critical", "explanation": "bad"}"#;
    assert!(serde_json::from_str::<Highlight>(json).is_err());
}

#[test]
fn given_highlight_when_serializing_then_category_uses_contract_name() {
    let highlight = Highlight {
        text: "clause".to_string(),
        category: RiskCategory::HighRisk,
        explanation: "no liability cap".to_string(),
    };
    let json = serde_json::to_value(&highlight).unwrap();
    assert_eq!(json["category"], "High-Risk");
}

#[test]
fn given_supported_extensions_when_inferring_kind_then_maps_to_mime() {
    assert_eq!(
        DocumentKind::from_filename("contract.pdf").unwrap().as_mime(),
        "application/pdf"
    );
    assert_eq!(
        DocumentKind::from_filename("scan.jpeg").unwrap().as_mime(),
        "image/jpeg"
    );
    assert_eq!(
        DocumentKind::from_filename("page.tif").unwrap().as_mime(),
        "image/tiff"
    );
    assert_eq!(
        DocumentKind::from_filename("fax.gif").unwrap().as_mime(),
        "image/gif"
    );
}

#[test]
fn given_uppercase_extension_when_inferring_kind_then_still_matches() {
    assert_eq!(
        DocumentKind::from_filename("SCAN.JPG"),
        Some(DocumentKind::Jpeg)
    );
}

#[test]
fn given_unknown_or_missing_extension_when_inferring_kind_then_none() {
    assert_eq!(DocumentKind::from_filename("contract.xyz"), None);
    assert_eq!(DocumentKind::from_filename("no_extension"), None);
}

#[test]
fn given_known_language_names_when_resolving_then_returns_codes() {
    assert_eq!(language_code("English"), "en");
    assert_eq!(language_code("Spanish"), "es");
    assert_eq!(language_code("Chinese"), "zh");
    assert_eq!(language_code("Dutch"), "nl");
}

#[test]
fn given_unknown_language_name_when_resolving_then_lowercases_input() {
    assert_eq!(language_code("Klingon"), "klingon");
    assert_eq!(language_code("PIRATE"), "pirate");
}

#[test]
fn given_boundary_scores_when_bucketing_readability_then_upper_bound_is_inclusive() {
    assert_eq!(ReadabilityScore::level_for(14.99), "Easy to read");
    assert_eq!(ReadabilityScore::level_for(15.0), "Moderate complexity");
    assert_eq!(ReadabilityScore::level_for(24.99), "Moderate complexity");
    assert_eq!(ReadabilityScore::level_for(25.0), "Complex legal language");
}

#[test]
fn given_syntax_figures_when_deriving_readability_then_weights_and_rounds() {
    // 0.6 * 20 + 0.4 * 12 = 16.8
    let readability = ReadabilityScore::derive(20.0, 12);
    assert_eq!(readability.score, 16.8);
    assert_eq!(readability.level, "Moderate complexity");
}

#[test]
fn given_empty_document_figures_when_deriving_readability_then_easy() {
    let readability = ReadabilityScore::derive(0.0, 0);
    assert_eq!(readability.score, 0.0);
    assert_eq!(readability.level, "Easy to read");
}

#[test]
fn given_sentiment_scores_when_interpreting_then_uses_neutral_band() {
    assert_eq!(SentimentInsight::new(0.3, 1.0).interpretation, "Positive");
    assert_eq!(SentimentInsight::new(-0.3, 1.0).interpretation, "Negative");
    assert_eq!(SentimentInsight::new(0.05, 1.0).interpretation, "Neutral");
    // The band is inclusive of both ends.
    assert_eq!(SentimentInsight::new(0.1, 1.0).interpretation, "Neutral");
    assert_eq!(SentimentInsight::new(-0.1, 1.0).interpretation, "Neutral");
}
