use fuzzytext_core::{generate, Locale};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct PhraseRequest {
    locale: String,
    hour: i32,
    minute: i32,
}

#[derive(Serialize)]
struct PhraseResponse {
    locale: String,
    phrase: String,
}

#[wasm_bindgen]
pub fn phrase_from_json(request_json: &str) -> String {
    // 1) Deserialize input from JSON → PhraseRequest
    let request: PhraseRequest = match serde_json::from_str(request_json) {
        Ok(r) => r,
        Err(e) => {
            return format!("Error parsing JSON: {}", e);
        }
    };

    // 2) Resolve the locale tag (the only fallible input; hour/minute never fail)
    let locale = match Locale::from_tag(&request.locale) {
        Ok(l) => l,
        Err(err_str) => return err_str,
    };

    // 3) Render and hand the phrase back as JSON
    let response = PhraseResponse {
        locale: locale.tag().to_string(),
        phrase: generate(locale, request.hour, request.minute),
    };

    match serde_json::to_string(&response) {
        Ok(json) => json,
        Err(e) => format!("Error serializing phrase: {}", e),
    }
}
