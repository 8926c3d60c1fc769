use super::types::FixedEvent;
use std::fmt::Write;

/// Fixed system instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Always respond with valid JSON only.";

const QUIZ_QUESTION_COUNT: usize = 5;

/// Renders the schedule prompt. Fixed events are enumerated in insertion
/// order so identical requests produce identical prompts.
pub fn schedule_prompt(fixed_events: &[FixedEvent]) -> String {
    let mut listing = String::new();
    for event in fixed_events {
        let _ = writeln!(listing, "- {}: {} at {}", event.name, event.day, event.time);
    }

    format!(
        r#"You are a scheduling assistant. Given these fixed events:
{listing}
Generate 3 optimal 30-minute time blocks during the week's working hours (9 AM - 6 PM, Monday-Friday) for "Online Demo Recording" sessions. Avoid conflicts with the fixed events and aim for balanced distribution throughout the week.

Respond ONLY with a JSON array of exactly 3 demo slots in this format:
[
  {{"day": "Monday", "time": "2:00 PM - 2:30 PM", "duration": "30 minutes"}},
  {{"day": "Wednesday", "time": "11:00 AM - 11:30 AM", "duration": "30 minutes"}},
  {{"day": "Friday", "time": "3:30 PM - 4:00 PM", "duration": "30 minutes"}}
]"#
    )
}

/// Renders the quiz prompt. The retake variant asks for a different question
/// set, so a second attempt never repeats the first.
pub fn quiz_prompt(topic: &str, is_retake: bool) -> String {
    let retake_note = if is_retake {
        "\nThis is a retake attempt. Generate a completely different set of questions than a typical first attempt would contain.\n"
    } else {
        ""
    };

    format!(
        r#"You are a corporate trainer. Create {QUIZ_QUESTION_COUNT} multiple-choice questions testing knowledge of "{topic}". Each question must have exactly 4 answer options with exactly one correct answer.
{retake_note}
Respond ONLY with a JSON array of question objects in this format:
[
  {{"question": "What does the product do?", "options": ["A", "B", "C", "D"], "correctAnswer": 0}}
]
where correctAnswer is the 0-based index of the correct option."#
    )
}
