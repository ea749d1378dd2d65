/// One row of the search results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub city: String,
    pub school: String,
    pub grade: String,
    pub year: String,
    pub subject: String,
    pub exam_type: String,
    pub version: String,
    pub id: String,
    /// Raw `href` of the first anchor in the exam paper cell.
    pub exam_link: Option<String>,
    /// Raw `href` of the first anchor in the answer key cell.
    pub answer_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    ExamPaper,
    AnswerKey,
}

impl DocumentRole {
    pub const ALL: [DocumentRole; 2] = [DocumentRole::ExamPaper, DocumentRole::AnswerKey];

    /// Segment used in output file names.
    pub fn label(self) -> &'static str {
        match self {
            DocumentRole::ExamPaper => "試卷",
            DocumentRole::AnswerKey => "答案",
        }
    }
}

impl Record {
    pub fn link(&self, role: DocumentRole) -> Option<&str> {
        match role {
            DocumentRole::ExamPaper => self.exam_link.as_deref(),
            DocumentRole::AnswerKey => self.answer_link.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_follows_role() {
        let record = Record {
            city: String::new(),
            school: String::new(),
            grade: String::new(),
            year: String::new(),
            subject: String::new(),
            exam_type: String::new(),
            version: String::new(),
            id: String::new(),
            exam_link: Some("/exam.pdf".to_string()),
            answer_link: None,
        };
        assert_eq!(record.link(DocumentRole::ExamPaper), Some("/exam.pdf"));
        assert_eq!(record.link(DocumentRole::AnswerKey), None);
        assert_ne!(DocumentRole::ExamPaper.label(), DocumentRole::AnswerKey.label());
    }
}
