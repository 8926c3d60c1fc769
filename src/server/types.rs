use crate::pipeline::{DemoSlot, FixedEvent, Question};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub fixed_events: Vec<FixedEvent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub demo_slots: Vec<DemoSlot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub topic: String,
    #[serde(default)]
    pub is_retake: bool,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
