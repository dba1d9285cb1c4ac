const STYLE: &str = r#"
body {
    font-family: 'Roboto', sans-serif;
    background: linear-gradient(120deg, #ffffff, #f0f4ff);
    color: #333333;
    max-width: 760px;
    margin: 40px auto;
    padding: 0 16px;
}
.main-header {
    background-color: #4a90e2;
    color: #ffffff;
    padding: 20px;
    border-radius: 15px;
    text-align: center;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.main-header h1 { margin: 0; font-size: 38px; }
.main-header p { margin: 5px 0 0; font-size: 18px; }
.input-section {
    background-color: #ffffff;
    padding: 25px;
    border-radius: 15px;
    margin: 20px 0;
    border: 2px solid #e0e6ed;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.input-section label { font-size: 18px; font-weight: bold; display: block; margin-bottom: 10px; }
.input-section input[type=text] {
    width: 100%;
    box-sizing: border-box;
    padding: 10px;
    font-size: 16px;
    border: 1px solid #d0d7e2;
    border-radius: 8px;
    margin-bottom: 15px;
}
.input-section button {
    background: linear-gradient(45deg, #6a11cb, #2575fc);
    color: white;
    border: none;
    padding: 10px 20px;
    border-radius: 25px;
    font-size: 18px;
    cursor: pointer;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.input-section button:hover { background: linear-gradient(45deg, #5b0dbf, #1959d1); }
.response-section {
    background-color: #f9fcff;
    padding: 25px;
    border-radius: 15px;
    margin-top: 20px;
    border: 2px solid #d6e4ff;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.response-section h3 { color: #2c3e50; font-weight: bold; }
.response-section p { white-space: pre-wrap; }
.notice { padding: 15px 20px; border-radius: 10px; margin-top: 20px; }
.notice.warning { background-color: #fff8e1; border: 1px solid #ffd54f; color: #6d4c00; }
.notice.error { background-color: #fdecea; border: 1px solid #f5a6a0; color: #8a1c12; }
"#;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Answer(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Echoed back into the input field.
    pub question: String,
    pub outcome: Outcome,
}

pub fn render(view: &PageView) -> String {
    let result = match &view.outcome {
        Outcome::Empty => String::new(),
        Outcome::Answer(text) => format!(
            r#"<div class="response-section"><h3>Answer:</h3><p>{}</p></div>"#,
            escape_html(text)
        ),
        Outcome::Warning(text) => format!(
            r#"<div class="notice warning" role="alert">&#9888;&#65039; {}</div>"#,
            escape_html(text)
        ),
        Outcome::Error(text) => format!(
            r#"<div class="notice error" role="alert">{}</div>"#,
            escape_html(text)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Groq LLM Q&amp;A</title>
<style>{style}</style>
</head>
<body>
<div class="main-header">
<h1>Groq LLM Q&amp;A &#10024;</h1>
<p>Get instant, accurate answers powered by Groq AI!</p>
</div>
<form class="input-section" method="post" action="/ask">
<label for="question">Enter your question:</label>
<input type="text" id="question" name="question" placeholder="Type your question here..." value="{question}">
<button type="submit">Get Answer</button>
</form>
{result}
</body>
</html>
"#,
        style = STYLE,
        question = escape_html(&view.question),
        result = result,
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
