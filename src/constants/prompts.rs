pub const QUIZ_GENERATION_TEMPLATE: &str = "
Text:{text}
You are an expert MCQ maker. Given the above text, it is your job to create a quiz of {number} multiple choice questions for {subject} students in {tone} tone.
Make sure the questions are not repeated and check all the questions to be conforming the text as well.
Make sure to format your response like RESPONSE_JSON below and use it as a guide. Ensure to make {number} MCQs.
The \"correct\" field must be the label of the right option, such as \"a\", not the answer text.
Return only the JSON object, with no commentary before or after it.
### RESPONSE_JSON
{response_json}
";

pub const QUIZ_GENERATION_VARIABLES: &[&str] = &["text", "number", "subject", "tone", "response_json"];

pub const QUIZ_REVIEW_TEMPLATE: &str = "
You are an expert english grammarian and writer. Given a Multiple Choice Quiz for {subject} students, you need to evaluate the complexity of the questions and give a complete analysis of the quiz. Only use at max 50 words for complexity analysis.
If the quiz is not at par with the cognitive and analytical abilities of the students, update the quiz questions which need to be changed and change the tone such that it perfectly fits the student abilities.
Quiz_MCQs:
{quiz}

Check from an expert English Writer of the above quiz:
";

pub const QUIZ_REVIEW_VARIABLES: &[&str] = &["subject", "quiz"];

/// Example reply shape embedded in the generation prompt.
pub const DEFAULT_RESPONSE_JSON: &str = r#"{
    "1": {
        "mcq": "multiple choice question",
        "options": {
            "a": "choice here",
            "b": "choice here",
            "c": "choice here",
            "d": "choice here"
        },
        "correct": "a"
    },
    "2": {
        "mcq": "multiple choice question",
        "options": {
            "a": "choice here",
            "b": "choice here",
            "c": "choice here",
            "d": "choice here"
        },
        "correct": "c"
    },
    "3": {
        "mcq": "multiple choice question",
        "options": {
            "a": "choice here",
            "b": "choice here",
            "c": "choice here",
            "d": "choice here"
        },
        "correct": "b"
    }
}"#;
