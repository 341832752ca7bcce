/// Terminal state of one article within one stage invocation.
///
/// Every article ends in exactly one of these states; the stage writes
/// the corresponding field text in a final mapping step instead of
/// scattering sentinel literals through its control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The model produced a result, stored verbatim.
    Success(String),
    /// The model could not be constructed; applies to the whole batch.
    Unavailable,
    /// No usable input text; the model was never invoked.
    EmptyInput,
    /// The model call failed for this article only.
    Failed,
}

impl Outcome {
    pub fn category_text(self) -> String {
        match self {
            Outcome::Success(label) => label,
            Outcome::Unavailable => "Classification Unavailable".to_string(),
            Outcome::EmptyInput => "Uncategorized".to_string(),
            Outcome::Failed => "Classification Failed".to_string(),
        }
    }

    pub fn summary_text(self) -> String {
        match self {
            Outcome::Success(summary) => summary,
            Outcome::Unavailable => "Summarization Unavailable (model load error)".to_string(),
            Outcome::EmptyInput => "No content to summarize.".to_string(),
            Outcome::Failed => "Summarization Failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sentinels() {
        assert_eq!(
            Outcome::Success("Sports".to_string()).category_text(),
            "Sports"
        );
        assert_eq!(
            Outcome::Unavailable.category_text(),
            "Classification Unavailable"
        );
        assert_eq!(Outcome::EmptyInput.category_text(), "Uncategorized");
        assert_eq!(Outcome::Failed.category_text(), "Classification Failed");
    }

    #[test]
    fn summary_sentinels() {
        assert_eq!(
            Outcome::Success("A summary.".to_string()).summary_text(),
            "A summary."
        );
        assert_eq!(
            Outcome::Unavailable.summary_text(),
            "Summarization Unavailable (model load error)"
        );
        assert_eq!(Outcome::EmptyInput.summary_text(), "No content to summarize.");
        assert_eq!(Outcome::Failed.summary_text(), "Summarization Failed");
    }
}
