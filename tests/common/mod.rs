#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use workout_planner::api::{create_routes, AppState};
use workout_planner::config::PlanGenerationConfig;
use workout_planner::models::{VideoSearchItem, VideoSearchQuery};
use workout_planner::services::{
    ChatCompletion, ExerciseVideoService, PlanGenerationService, PlanValidation, ProviderError,
    RetryPolicy, VideoSearch,
};

/// Completion provider that replays scripted responses in order.
#[derive(Default)]
pub struct ScriptedCompletion {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    user_prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedCompletion {
    pub fn new(responses: Vec<Result<String, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        })
    }

    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn user_prompts(&self) -> Vec<String> {
        self.user_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedCompletion {
    async fn complete(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.user_prompts.lock().unwrap().push(user_prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyResponse))
    }
}

/// Video search provider returning one fixed outcome.
pub struct FakeVideoSearch {
    outcome: Box<dyn Fn() -> Result<Vec<VideoSearchItem>, ProviderError> + Send + Sync>,
    queries: Mutex<Vec<VideoSearchQuery>>,
}

impl FakeVideoSearch {
    pub fn with<F>(outcome: F) -> Arc<Self>
    where
        F: Fn() -> Result<Vec<VideoSearchItem>, ProviderError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            outcome: Box::new(outcome),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn finding(video_id: &'static str) -> Arc<Self> {
        Self::with(move || {
            Ok(vec![VideoSearchItem {
                video_id: Some(video_id.to_string()),
                title: Some("Tutorial".to_string()),
            }])
        })
    }

    pub fn queries(&self) -> Vec<VideoSearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearch for FakeVideoSearch {
    async fn search(&self, query: &VideoSearchQuery) -> Result<Vec<VideoSearchItem>, ProviderError> {
        self.queries.lock().unwrap().push(query.clone());
        (self.outcome)()
    }
}

/// Router wired to the given fakes, retrying without delay.
pub fn test_app(completion: Arc<ScriptedCompletion>, search: Arc<FakeVideoSearch>) -> Router {
    let state = AppState {
        plan_generation_service: PlanGenerationService::new(
            completion,
            PlanGenerationConfig {
                retry: RetryPolicy::fixed(3, Duration::ZERO),
                validation: PlanValidation::Presence,
            },
        ),
        exercise_video_service: ExerciseVideoService::new(search),
    };

    create_routes(state, &[])
}

pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub const VALID_PLAN: &str = r#"{
    "planName": "Strength Foundation",
    "planOverview": "Four weeks of compound lifting.",
    "progressionTips": ["Add 2.5 kg when every set is completed."],
    "weeks": [{
        "weekNumber": 1,
        "days": [{
            "day": "Monday",
            "focus": "Lower Body",
            "exercises": [{"name": "Back Squat", "sets": 5, "reps": "5", "rest": "120s"}]
        }]
    }]
}"#;
