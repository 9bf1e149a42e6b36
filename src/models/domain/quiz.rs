use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{AppError, AppResult};

/// One question as the model writes it: `{"mcq": .., "options": {..}, "correct": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSpec {
    #[serde(rename = "mcq")]
    pub question_text: String,
    #[serde(deserialize_with = "unique_keys::deserialize")]
    pub options: IndexMap<String, String>, // label -> text, e.g. "a".."d"
    #[serde(rename = "correct")]
    pub correct_label: String,
}

impl QuizSpec {
    /// Checks that there is a real choice and the correct label names one of the options.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.len() < 2 {
            return Err(format!(
                "question '{}' has {} option(s), expected at least 2",
                self.question_text,
                self.options.len()
            ));
        }
        if !self.options.contains_key(&self.correct_label) {
            return Err(format!(
                "question '{}' marks '{}' as correct but has no such option",
                self.question_text, self.correct_label
            ));
        }
        Ok(())
    }
}

/// Questions keyed by the model's question index, in the order they were written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: IndexMap<String, QuizSpec>,
}

impl<'de> Deserialize<'de> for Quiz {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        unique_keys::deserialize(deserializer).map(|questions| Quiz { questions })
    }
}

impl Quiz {
    /// Parses quiz text returned by the model.
    ///
    /// The reply may wrap the JSON object in a code fence or prose, so only the
    /// outermost `{ .. }` span is read. Any shape mismatch, including a missing
    /// field on a single question, fails the whole parse.
    pub fn parse(text: &str) -> AppResult<Self> {
        let json = extract_json_object(text).ok_or_else(|| {
            AppError::ParseError("no JSON object found in model response".to_string())
        })?;

        let quiz: Quiz = serde_json::from_str(json)?;
        if quiz.is_empty() {
            return Err(AppError::ParseError(
                "model response contains no questions".to_string(),
            ));
        }

        Ok(quiz)
    }

    /// One message per question that parsed but breaks a question invariant.
    pub fn warnings(&self) -> Vec<String> {
        self.questions
            .values()
            .filter_map(|spec| spec.validate().err())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuizSpec)> {
        self.questions.iter().map(|(index, spec)| (index.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// `IndexMap` deserialization that rejects a key written twice instead of keeping the last value.
mod unique_keys {
    use std::{fmt, marker::PhantomData};

    use indexmap::IndexMap;
    use serde::{
        de::{self, MapAccess, Visitor},
        Deserialize, Deserializer,
    };

    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = IndexMap<String, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                if map.contains_key(&key) {
                    return Err(de::Error::custom(format!("duplicate key `{}`", key)));
                }
                map.insert(key, value);
            }
            Ok(map)
        }
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        deserializer.deserialize_map(UniqueKeys(PhantomData))
    }
}
