use medai_backend::services::prompt::{MISSING_VALUE, RULES, build_prompt, context_value};
use serde_json::{Map, Value, json};

fn context(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("context must be an object"),
    }
}

#[test]
fn full_context_renders_every_value() {
    let ctx = context(json!({
        "country": "Kenya",
        "age": 42,
        "sex": "F",
        "history": "asthma since childhood"
    }));
    let prompt = build_prompt("Is ibuprofen safe with asthma?", &ctx);

    assert!(prompt.contains("Country: Kenya"));
    assert!(prompt.contains("Age: 42"));
    assert!(prompt.contains("Sex: F"));
    assert!(prompt.contains("Patient history: asthma since childhood"));
    assert!(prompt.contains("User question:\nIs ibuprofen safe with asthma?"));
    assert!(prompt.contains(RULES));
}

#[test]
fn rules_follow_the_question() {
    let prompt = build_prompt("What is a fever?", &Map::new());
    let question = prompt.find("What is a fever?").unwrap();
    let rules = prompt.find(RULES).unwrap();
    assert!(question < rules);
    assert!(prompt.contains("You are MedAI, an educational healthcare AI assistant."));
}

#[test]
fn missing_keys_render_placeholder() {
    let ctx = context(json!({ "country": "US" }));
    let prompt = build_prompt("hello", &ctx);

    assert!(prompt.contains("Country: US"));
    assert!(prompt.contains(&format!("Age: {MISSING_VALUE}")));
    assert!(prompt.contains(&format!("Sex: {MISSING_VALUE}")));
    assert!(prompt.contains(&format!("Patient history: {MISSING_VALUE}")));
}

#[test]
fn empty_context_does_not_fail() {
    let prompt = build_prompt("hello", &Map::new());
    assert!(prompt.contains("Country: None"));
    assert!(prompt.contains(RULES));
}

#[test]
fn non_string_values_render_as_python_literals() {
    let ctx = context(json!({
        "age": null,
        "pregnant": true,
        "weight": 61.5,
        "history": { "allergies": ["penicillin", "o'clock"], "smoker": false }
    }));

    assert_eq!(context_value(&ctx, "age"), "None");
    assert_eq!(context_value(&ctx, "pregnant"), "True");
    assert_eq!(context_value(&ctx, "weight"), "61.5");
    assert_eq!(
        context_value(&ctx, "history"),
        r#"{'allergies': ['penicillin', "o'clock"], 'smoker': False}"#
    );
    assert_eq!(context_value(&ctx, "sex"), "None");
}

#[test]
fn numeric_age_renders_verbatim() {
    let ctx = context(json!({ "age": 30 }));
    assert!(build_prompt("hi", &ctx).contains("Age: 30\n"));
}

#[test]
fn extra_keys_are_ignored() {
    let ctx = context(json!({ "country": "FR", "mode": "advanced" }));
    let prompt = build_prompt("hello", &ctx);
    assert!(!prompt.contains("advanced"));
}
