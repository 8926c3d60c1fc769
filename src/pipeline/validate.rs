use super::types::{DemoSlot, Question, Weekday};
use crate::{Error, Result};
use serde_json::Value;

pub const EXPECTED_SLOT_COUNT: usize = 3;
pub const EXPECTED_OPTION_COUNT: usize = 4;

/// Checks a parsed model reply against the schedule shape: exactly 3 slots,
/// each with a working-weekday `day` and non-empty `time`/`duration`.
/// Fails fast on the first offending field; never coerces or truncates.
pub fn validate_schedule(value: &Value) -> Result<Vec<DemoSlot>> {
    let items = as_array(value, "demo slots")?;

    if items.len() != EXPECTED_SLOT_COUNT {
        return Err(Error::validation(format!(
            "expected exactly {} demo slots, got {}",
            EXPECTED_SLOT_COUNT,
            items.len()
        )));
    }

    let mut slots = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        slots.push(validate_slot(item, index)?);
    }
    Ok(slots)
}

fn validate_slot(item: &Value, index: usize) -> Result<DemoSlot> {
    let day_name = required_string(item, index, "slots", "day")?;
    let day = Weekday::from_name(&day_name).ok_or_else(|| {
        Error::validation(format!(
            "slots[{index}].day: \"{day_name}\" is not a working weekday (Monday-Friday)"
        ))
    })?;

    Ok(DemoSlot {
        day,
        time: required_string(item, index, "slots", "time")?,
        duration: required_string(item, index, "slots", "duration")?,
    })
}

/// Checks a parsed model reply against the quiz shape: at least one question,
/// each with a non-empty prompt, exactly 4 non-empty options, and a
/// `correctAnswer` index inside its own options array.
pub fn validate_quiz(value: &Value) -> Result<Vec<Question>> {
    let items = as_array(value, "questions")?;

    if items.is_empty() {
        return Err(Error::validation("expected at least 1 question, got 0"));
    }

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        questions.push(validate_question(item, index)?);
    }
    Ok(questions)
}

fn validate_question(item: &Value, index: usize) -> Result<Question> {
    let question = required_string(item, index, "questions", "question")?;

    let options_value = item.get("options").ok_or_else(|| {
        Error::validation(format!("questions[{index}].options: missing field"))
    })?;
    let raw_options = options_value.as_array().ok_or_else(|| {
        Error::validation(format!("questions[{index}].options: expected an array"))
    })?;

    if raw_options.len() != EXPECTED_OPTION_COUNT {
        return Err(Error::validation(format!(
            "questions[{index}].options: expected exactly {} options, got {}",
            EXPECTED_OPTION_COUNT,
            raw_options.len()
        )));
    }

    let mut options = Vec::with_capacity(raw_options.len());
    for (option_index, option) in raw_options.iter().enumerate() {
        let text = option.as_str().ok_or_else(|| {
            Error::validation(format!(
                "questions[{index}].options[{option_index}]: expected a string"
            ))
        })?;
        if text.is_empty() {
            return Err(Error::validation(format!(
                "questions[{index}].options[{option_index}]: must be a non-empty string"
            )));
        }
        options.push(text.to_string());
    }

    let correct_value = item.get("correctAnswer").ok_or_else(|| {
        Error::validation(format!("questions[{index}].correctAnswer: missing field"))
    })?;
    let correct_answer = correct_value.as_u64().ok_or_else(|| {
        Error::validation(format!(
            "questions[{index}].correctAnswer: expected a non-negative integer"
        ))
    })? as usize;

    if correct_answer >= options.len() {
        return Err(Error::validation(format!(
            "questions[{index}].correctAnswer: index {} out of range for {} options",
            correct_answer,
            options.len()
        )));
    }

    Ok(Question {
        question,
        options,
        correct_answer,
    })
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::validation(format!("expected a JSON array of {what}")))
}

fn required_string(item: &Value, index: usize, kind: &str, field: &str) -> Result<String> {
    let value = item
        .get(field)
        .ok_or_else(|| Error::validation(format!("{kind}[{index}].{field}: missing field")))?;
    let text = value.as_str().ok_or_else(|| {
        Error::validation(format!("{kind}[{index}].{field}: expected a string"))
    })?;
    if text.is_empty() {
        return Err(Error::validation(format!(
            "{kind}[{index}].{field}: must be a non-empty string"
        )));
    }
    Ok(text.to_string())
}
