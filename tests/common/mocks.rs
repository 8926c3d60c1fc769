use async_trait::async_trait;
use skilldesk::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

type ErrorFactory = Box<dyn Fn() -> Error + Send + Sync>;

/// Stub LLM client returning canned free-text replies, so pipeline and
/// server tests run deterministically without a live gateway.
pub struct StubLlmClient {
    replies: Arc<Mutex<Vec<String>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
    error: Option<ErrorFactory>,
}

impl StubLlmClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        let stub = Self::new();
        stub.add_reply(reply);
        stub
    }

    pub fn with_error(factory: impl Fn() -> Error + Send + Sync + 'static) -> Self {
        let mut stub = Self::new();
        stub.error = Some(Box::new(factory));
        stub
    }

    pub fn add_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push(reply.into());
    }

    /// Returns the (system, user) prompt pairs sent so far.
    pub fn recorded_requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for StubLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for StubLlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));

        if let Some(ref factory) = self.error {
            return Err(factory());
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::Extraction);
        }

        Ok(replies.remove(0))
    }
}

/// A well-formed 3-slot schedule reply with no Monday-morning slot.
pub const SCHEDULE_REPLY: &str = r#"Here are your optimal demo slots:
[
  {"day": "Tuesday", "time": "2:00 PM - 2:30 PM", "duration": "30 minutes"},
  {"day": "Wednesday", "time": "11:00 AM - 11:30 AM", "duration": "30 minutes"},
  {"day": "Friday", "time": "3:30 PM - 4:00 PM", "duration": "30 minutes"}
]"#;

/// A well-formed 5-question quiz reply.
pub fn quiz_reply() -> String {
    let questions: Vec<String> = (1..=5)
        .map(|i| {
            format!(
                r#"{{"question": "Product question {i}?", "options": ["Option A", "Option B", "Option C", "Option D"], "correctAnswer": {}}}"#,
                i % 4
            )
        })
        .collect();
    format!("[{}]", questions.join(", "))
}
