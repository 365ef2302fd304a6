use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Raw `POST /predictdata` body. Every field is optional here; absent
/// categoricals are passed through and absent scores fail later.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PredictForm {
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    pub reading_score: Option<String>,
    pub writing_score: Option<String>,
}

impl PredictForm {
    /// Decodes an `application/x-www-form-urlencoded` body. The first value of
    /// a repeated key wins; unknown keys are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();

        for pair in body.split(|&b| b == b'&').filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(idx) => (&pair[..idx], &pair[idx + 1..]),
                None => (pair, &[][..]),
            };

            let slot = match decode_component(key).as_str() {
                "gender" => &mut form.gender,
                "ethnicity" => &mut form.ethnicity,
                "parental_level_of_education" => &mut form.parental_level_of_education,
                "lunch" => &mut form.lunch,
                "test_preparation_course" => &mut form.test_preparation_course,
                "reading_score" => &mut form.reading_score,
                "writing_score" => &mut form.writing_score,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(decode_component(value));
            }
        }

        form
    }
}

fn decode_component(raw: &[u8]) -> String {
    let plus_as_space: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    let decoded = urlencoding::decode_binary(&plus_as_space);
    String::from_utf8_lossy(&decoded).into_owned()
}

/// One row handed to the pipeline. Serialized keys are the model's column
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gender: Option<String>,
    #[serde(rename = "race_ethnicity")]
    pub ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    pub reading_score: f64,
    pub writing_score: f64,
}

impl TryFrom<PredictForm> for StudentRecord {
    type Error = Error;

    fn try_from(form: PredictForm) -> Result<Self> {
        let reading_score = parse_score("reading_score", form.reading_score.as_deref())?;
        let writing_score = parse_score("writing_score", form.writing_score.as_deref())?;

        Ok(Self {
            gender: form.gender,
            ethnicity: form.ethnicity,
            parental_level_of_education: form.parental_level_of_education,
            lunch: form.lunch,
            test_preparation_course: form.test_preparation_course,
            reading_score,
            writing_score,
        })
    }
}

/// Scores must be finite: the row travels as JSON, which has no NaN or
/// infinity.
fn parse_score(field: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| Error::missing_field(field))?;
    let digits =
        strip_digit_separators(raw.trim()).ok_or_else(|| Error::invalid_input(field, raw))?;

    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::invalid_input(field, raw))
}

/// `1_000` is accepted, but only with a digit on both sides of every `_`.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    for (idx, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = idx.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(idx + 1).copied();
        let digit = |c: Option<u8>| c.is_some_and(|c| c.is_ascii_digit());
        if !digit(before) || !digit(after) {
            return None;
        }
    }

    Some(Cow::Owned(text.replace('_', "")))
}
