//! Prompt templates for the advisor and the document drafter.
//!
//! Templates use `{name}` placeholders filled by literal substitution.
//! `{{` and `}}` produce literal braces. Values are inserted as given,
//! with no escaping.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("missing template field '{0}'")]
    MissingField(String),

    #[error("malformed template: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub body: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    pub fn render(&self, fields: &[(&str, &str)]) -> Result<String, PromptError> {
        let mut out = String::with_capacity(self.body.len() + 256);
        let mut chars = self.body.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        out.push('{');
                        continue;
                    }
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, ch)) => key.push(ch),
                            None => {
                                return Err(PromptError::Malformed(format!(
                                    "unterminated placeholder at byte {pos} in {}",
                                    self.name
                                )));
                            }
                        }
                    }
                    let value = fields
                        .iter()
                        .find(|(k, _)| *k == key)
                        .map(|(_, v)| *v)
                        .ok_or(PromptError::MissingField(key))?;
                    out.push_str(value);
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        out.push('}');
                    } else {
                        return Err(PromptError::Malformed(format!(
                            "single '}}' at byte {pos} in {}",
                            self.name
                        )));
                    }
                }
                _ => out.push(c),
            }
        }

        Ok(out)
    }
}

pub const CHAT_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "chat",
    r#"
You are an AI Legal Advisor. Your response MUST be in the user's specified language: {language}.

Your primary function is to provide information based on the laws of the specified country ({country}) and, if provided, the specific state/region ({location}).

When a user describes an issue, structure your response in {language} as follows:

1.  **Analysis & Relevant Laws:** Analyze the issue, referencing laws from {country}, with specific attention to local laws from {location} if applicable.
2.  **Suggested Legal Process:** Provide a step-by-step legal process.
3.  **Appropriate Forum:** Suggest the correct authority to approach (e.g., local police in {location}, State High Court).
4.  **Case Risk & Outcome Analysis (Qualitative):** Provide a general analysis of the case's strengths and weaknesses. DO NOT give a statistical probability.

**Crucial Guidelines:**
* Respond ONLY in {language}.
* When citing legal sections (e.g., IPC Section 302), keep the citation in English for universal legal reference.
* Conclude EVERY response with a bold disclaimer in {language}: "**Disclaimer: This is for educational purposes and is not legal advice. Consult a qualified human lawyer for formal advice.**"
"#,
);

pub const DRAFT_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "draft",
    r#"
You are an AI assistant specialized in drafting legal documents. Your task is to generate a basic draft based on the user's provided details and the laws of the specified country.

**Instructions:**
1.  Generate a draft for a **{doc_type}**.
2.  The document must be compliant with the laws of **{country}**.
3.  Use the following details provided by the user:
    {details}
4.  Structure the document with clear headings, clauses, and placeholders.
5.  Add a clear disclaimer at the very top: "**This is an AI-generated draft. It must be reviewed by a qualified lawyer before use.**"
"#,
);

#[derive(Debug, Clone, Copy)]
pub struct ChatFields<'a> {
    pub message: &'a str,
    pub country: &'a str,
    pub language: &'a str,
    pub location: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct DraftFields<'a> {
    pub doc_type: &'a str,
    pub country: &'a str,
    pub details: &'a str,
}

pub fn build_chat_prompt(fields: &ChatFields<'_>) -> Result<String, PromptError> {
    let prompt = CHAT_TEMPLATE.render(&[
        ("language", fields.language),
        ("country", fields.country),
        ("location", fields.location),
    ])?;
    Ok(format!(
        "{prompt}\n\nHere is the user's issue: \"{}\"",
        fields.message
    ))
}

pub fn build_draft_prompt(fields: &DraftFields<'_>) -> Result<String, PromptError> {
    DRAFT_TEMPLATE.render(&[
        ("doc_type", fields.doc_type),
        ("country", fields.country),
        ("details", fields.details),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let t = PromptTemplate::new("t", "{a} and {a} then {b}");
        assert_eq!(
            t.render(&[("a", "x"), ("b", "y")]).unwrap(),
            "x and x then y"
        );
    }

    #[test]
    fn missing_field_is_an_error() {
        let t = PromptTemplate::new("t", "hello {who}");
        assert_eq!(
            t.render(&[("other", "x")]),
            Err(PromptError::MissingField("who".to_string()))
        );
    }

    #[test]
    fn escaped_braces_and_literal_values() {
        let t = PromptTemplate::new("t", "{{json}} {v}");
        assert_eq!(t.render(&[("v", "{raw}")]).unwrap(), "{json} {raw}");
    }

    #[test]
    fn malformed_templates() {
        let open = PromptTemplate::new("t", "oops {never");
        assert!(matches!(open.render(&[]), Err(PromptError::Malformed(_))));
        let close = PromptTemplate::new("t", "oops }");
        assert!(matches!(close.render(&[]), Err(PromptError::Malformed(_))));
    }

    #[test]
    fn fixed_templates_render_with_their_fields() {
        let chat = build_chat_prompt(&ChatFields {
            message: "m",
            country: "c",
            language: "l",
            location: "loc",
        })
        .unwrap();
        assert!(!chat.contains('{'));
        assert!(chat.ends_with("Here is the user's issue: \"m\""));

        let draft = build_draft_prompt(&DraftFields {
            doc_type: "d",
            country: "c",
            details: "x",
        })
        .unwrap();
        assert!(!draft.contains('{'));
        assert!(draft.contains("**d**"));
    }
}
