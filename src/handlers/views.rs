use crate::{
    errors::AppError,
    models::dto::{
        request::{MAX_FIELD_CHARS, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT},
        response::TABLE_DATA_ERROR,
    },
    services::{http_helpers::escape_html, quiz_pipeline::QuizOutcome},
};

const TITLE: &str = "MCQs Creator Application";

const STYLE: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem}\
table{border-collapse:collapse;width:100%;margin-top:1rem}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left;vertical-align:top}\
textarea{width:100%;min-height:8rem}\
.error{color:#b00020}\
.warning{color:#8a6d00}";

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = TITLE,
        style = STYLE,
        body = body
    )
}

pub fn render_form() -> String {
    let form = format!(
        r#"<form action="/quizzes" method="post" enctype="multipart/form-data">
<label>Upload a PDF or txt file <input type="file" name="file" accept=".pdf,.txt,application/pdf,text/plain" required></label>
<label>No. of MCQs <input type="number" name="number" min="{min}" max="{max}" value="{min}" required></label>
<label>Subject <input type="text" name="subject" maxlength="{chars}" required></label>
<label>Complexity Level Of Questions <input type="text" name="tone" maxlength="{chars}" placeholder="Simple" required></label>
<p><button type="submit">Create MCQs</button></p>
</form>"#,
        min = MIN_QUESTION_COUNT,
        max = MAX_QUESTION_COUNT,
        chars = MAX_FIELD_CHARS
    );
    page(&form)
}

pub fn render_results(outcome: &QuizOutcome) -> String {
    let mut body = String::new();

    match outcome.table() {
        Ok(rows) => {
            body.push_str("<table>\n<thead><tr><th></th><th>MCQ</th><th>Choices</th><th>Correct</th></tr></thead>\n<tbody>\n");
            for (i, row) in rows.iter().enumerate() {
                body.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    i + 1,
                    escape_html(&row.mcq),
                    escape_html(&row.choices),
                    escape_html(&row.correct)
                ));
            }
            body.push_str("</tbody>\n</table>\n");
            if !outcome.warnings.is_empty() {
                body.push_str("<ul class=\"warning\">\n");
                for warning in &outcome.warnings {
                    body.push_str(&format!("<li>{}</li>\n", escape_html(warning)));
                }
                body.push_str("</ul>\n");
            }
        }
        Err(e) => {
            log::warn!("Rendering raw quiz text: {}", e);
            body.push_str(&format!(
                "<p class=\"error\">{}</p>\n<pre>{}</pre>\n",
                TABLE_DATA_ERROR,
                escape_html(&outcome.raw_quiz)
            ));
        }
    }

    body.push_str(&format!(
        "<label>Review <textarea readonly>{}</textarea></label>\n<p><a href=\"/\">Create another quiz</a></p>",
        escape_html(&outcome.review)
    ));

    page(&body)
}

/// Only errors the user can fix themselves are described; everything else is a bare "Error".
pub fn render_error(error: &AppError) -> String {
    let detail = match error {
        AppError::ValidationError(_) | AppError::FileReadError(_) => {
            format!("<p>{}</p>\n", escape_html(&error.to_string()))
        }
        _ => String::new(),
    };

    page(&format!(
        "<p class=\"error\">Error</p>\n{}<p><a href=\"/\">Back</a></p>",
        detail
    ))
}
