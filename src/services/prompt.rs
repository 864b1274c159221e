// src/services/prompt.rs
use serde_json::{Map, Value};

/// Placeholder for a context key that is absent or null.
pub const MISSING_VALUE: &str = "None";

pub const RULES: &str = "Rules:
- Do not diagnose
- Do not prescribe
- Provide educational and safety-focused information only";

/// Render the fixed MedAI prompt for one user question.
pub fn build_prompt(message: &str, context: &Map<String, Value>) -> String {
    format!(
        "
You are MedAI, an educational healthcare AI assistant.

Context:
Country: {country}
Age: {age}
Sex: {sex}
Patient history: {history}

User question:
{message}

{rules}
",
        country = context_value(context, "country"),
        age = context_value(context, "age"),
        sex = context_value(context, "sex"),
        history = context_value(context, "history"),
        rules = RULES,
    )
}

/// Strings render verbatim; other values use Python literal notation
/// (`True`, `None`, `['a', 1]`, `{'k': 'v'}`).
pub fn context_value(context: &Map<String, Value>, key: &str) -> String {
    match context.get(key) {
        None => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => literal(other),
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::Null => MISSING_VALUE.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            let escaped = s.replace('\\', "\\\\");
            if s.contains('\'') && !s.contains('"') {
                format!("\"{escaped}\"")
            } else {
                format!("'{}'", escaped.replace('\'', "\\'"))
            }
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", literal(&Value::String(k.clone())), literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}
