use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied recurring commitment that generated demo slots must not
/// conflict with. Day and time are kept as the free-form strings the user
/// entered; they are rendered verbatim into the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedEvent {
    pub name: String,
    pub day: String,
    pub time: String,
}

/// Working weekdays accepted in generated demo slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated 30-minute block recommended for recording a product demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSlot {
    pub day: Weekday,
    pub time: String,
    pub duration: String,
}

/// A generated multiple-choice question. `correct_answer` is always a valid
/// index into `options`; the validator rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

/// One request kind per prompt/validation schema; the linear pipeline itself
/// is shared.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    Schedule { fixed_events: Vec<FixedEvent> },
    Quiz { topic: String, is_retake: bool },
}

#[derive(Debug, Clone)]
pub enum GenerationResult {
    Schedule(Vec<DemoSlot>),
    Quiz(Vec<Question>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weekday_from_name() {
        assert_eq!(Weekday::from_name("Monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("Friday"), Some(Weekday::Friday));
        assert_eq!(Weekday::from_name("Saturday"), None);
        assert_eq!(Weekday::from_name("monday"), None);
    }

    #[test]
    fn test_weekday_round_trips_through_name() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_name(day.as_str()), Some(day));
        }
    }

    #[test]
    fn test_demo_slot_serializes_day_as_name() {
        let slot = DemoSlot {
            day: Weekday::Wednesday,
            time: "11:00 AM - 11:30 AM".to_string(),
            duration: "30 minutes".to_string(),
        };

        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["day"], "Wednesday");
    }

    #[test]
    fn test_question_uses_camel_case_correct_answer() {
        let question = Question {
            question: "What is the flagship product?".to_string(),
            options: vec![
                "Alpha".to_string(),
                "Beta".to_string(),
                "Gamma".to_string(),
                "Delta".to_string(),
            ],
            correct_answer: 2,
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correctAnswer"], 2);
    }
}
