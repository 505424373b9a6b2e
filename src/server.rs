// HTTP API for the bingo front end.
//
// Every endpoint is stateless: the client sends its card collection with each
// request and receives the updated collection back. JSON field names follow the
// front end's (Spanish) contract.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::application::BingoService;
use crate::card::Card;
use crate::enums::Language;

pub type SharedService = Arc<BingoService>;

const ENDPOINTS: [&str; 7] = [
    "/api/process-cards",
    "/api/call-word",
    "/api/check-winners",
    "/api/generate-rounds",
    "/api/validate-word",
    "/api/word-limits",
    "/api/word-banks",
];

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessCardsRequest {
    pub text: String,
    #[serde(default)]
    pub existing_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessCardsResponse {
    #[serde(rename = "cartones")]
    pub cards: Vec<Card>,
    #[serde(rename = "errores")]
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CallWordRequest {
    #[serde(rename = "cartones")]
    pub cards: Vec<Card>,
    #[serde(rename = "palabra")]
    pub word: String,
    #[serde(rename = "idioma_actual")]
    pub current_language: Language,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CallWordResponse {
    #[serde(rename = "cartones")]
    pub cards: Vec<Card>,
    pub found_in_any: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckWinnersRequest {
    #[serde(rename = "cartones")]
    pub cards: Vec<Card>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckWinnersResponse {
    #[serde(rename = "ganadores")]
    pub winners: Vec<Card>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRoundsRequest {
    #[serde(rename = "idiomas_disponibles")]
    pub languages: Vec<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRoundsResponse {
    #[serde(rename = "rondas")]
    pub rounds: Vec<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateWordRequest {
    #[serde(rename = "palabra")]
    pub word: String,
    #[serde(rename = "idioma")]
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateWordResponse {
    #[serde(rename = "es_valida")]
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordLimitsResponse {
    #[serde(rename = "limites")]
    pub limits: BTreeMap<Language, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordBanksResponse {
    #[serde(rename = "bancos")]
    pub banks: BTreeMap<Language, Vec<String>>,
}

// API Routes

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Bingo de Palabras API".to_string(),
        version: crate::VERSION.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

async fn word_limits(State(service): State<SharedService>) -> Json<WordLimitsResponse> {
    Json(WordLimitsResponse {
        limits: service.word_limits(),
    })
}

async fn word_banks(State(service): State<SharedService>) -> Json<WordBanksResponse> {
    Json(WordBanksResponse {
        banks: service.word_banks(),
    })
}

async fn process_cards(
    State(service): State<SharedService>,
    Json(request): Json<ProcessCardsRequest>,
) -> Json<ProcessCardsResponse> {
    log::info!(
        "Processing {} bytes of cards ({} ids already loaded)",
        request.text.len(),
        request.existing_ids.len()
    );

    let existing_ids: HashSet<String> = request.existing_ids.into_iter().collect();
    let outcome = service.process_cards(&request.text, &existing_ids);

    Json(ProcessCardsResponse {
        errors: outcome.error_messages(),
        cards: outcome.cards,
    })
}

async fn call_word(
    State(service): State<SharedService>,
    Json(request): Json<CallWordRequest>,
) -> Json<CallWordResponse> {
    let outcome = service.call_word(request.cards, &request.word, request.current_language);

    Json(CallWordResponse {
        cards: outcome.cards,
        found_in_any: outcome.found_in_any,
    })
}

async fn check_winners(
    State(service): State<SharedService>,
    Json(request): Json<CheckWinnersRequest>,
) -> Json<CheckWinnersResponse> {
    Json(CheckWinnersResponse {
        winners: service.check_winners(&request.cards),
    })
}

async fn generate_rounds(
    State(service): State<SharedService>,
    Json(request): Json<GenerateRoundsRequest>,
) -> Json<GenerateRoundsResponse> {
    let rounds = service.generate_rounds(&request.languages).await;
    log::info!("Generated round order: {:?}", rounds);

    Json(GenerateRoundsResponse { rounds })
}

async fn validate_word(
    State(service): State<SharedService>,
    Json(request): Json<ValidateWordRequest>,
) -> Json<ValidateWordResponse> {
    Json(ValidateWordResponse {
        valid: service.validate_word(&request.word, request.language),
    })
}

/// CORS for the given browser origins; any origin when the list is empty.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(allow_origin)
}

pub fn router(service: SharedService, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/api/word-limits", get(word_limits))
        .route("/api/word-banks", get(word_banks))
        .route("/api/process-cards", post(process_cards))
        .route("/api/call-word", post(call_word))
        .route("/api/check-winners", post(check_winners))
        .route("/api/generate-rounds", post(generate_rounds))
        .route("/api/validate-word", post(validate_word))
        .with_state(service)
        .layer(cors)
}
