use sanitize_filename::{Options, sanitize_with_options};
use url::Url;

use crate::record::{DocumentRole, Record};

const SEGMENT_OPTIONS: Options<'static> = Options {
    windows: false,
    truncate: false,
    replacement: "_",
};

/// Output file name for one document of a record:
/// `{city}_{school}_{grade}_{year}_{subject}_{type}_{version}_{role}{ext}`.
///
/// The extension comes from the source URL, so a `.doc` stays a `.doc`.
/// Path separators, control characters and the characters Windows reserves
/// (`? < > \\ : * | "`) become `_` inside each segment, so the file always
/// lands directly in the output directory. Everything else is kept as is.
pub fn derive_file_name(record: &Record, role: DocumentRole, source: &Url) -> String {
    let segments = [
        &record.city,
        &record.school,
        &record.grade,
        &record.year,
        &record.subject,
        &record.exam_type,
        &record.version,
    ];
    let mut name = segments
        .iter()
        .map(|segment| sanitize_with_options(segment.as_str(), SEGMENT_OPTIONS))
        .collect::<Vec<_>>()
        .join("_");
    name.push('_');
    name.push_str(role.label());
    name.push_str(&source_extension(source));
    name
}

/// Extension of the last path segment including the leading `.`, or an empty
/// string. Leading dots don't count, so `/.htaccess` has none.
pub fn source_extension(source: &Url) -> String {
    let last_segment = source.path().rsplit('/').next().unwrap_or_default();
    let stem_start = last_segment.len() - last_segment.trim_start_matches('.').len();
    match last_segment[stem_start..].rfind('.') {
        Some(dot) => last_segment[stem_start + dot..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            city: "新北市".to_string(),
            school: "板橋國小".to_string(),
            grade: "一年級".to_string(),
            year: "113".to_string(),
            subject: "數學".to_string(),
            exam_type: "期中考".to_string(),
            version: "康軒".to_string(),
            id: "A123".to_string(),
            exam_link: None,
            answer_link: None,
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn name_follows_metadata_and_keeps_extension() {
        let name = derive_file_name(
            &record(),
            DocumentRole::ExamPaper,
            &url("https://exam.naer.edu.tw/upload/113/exam.pdf"),
        );
        assert_eq!(name, "新北市_板橋國小_一年級_113_數學_期中考_康軒_試卷.pdf");
    }

    #[test]
    fn id_is_not_part_of_the_name() {
        let name = derive_file_name(
            &record(),
            DocumentRole::AnswerKey,
            &url("https://exam.naer.edu.tw/a.pdf"),
        );
        assert!(!name.contains("A123"));
    }

    #[test]
    fn role_only_changes_role_segment() {
        let source = url("https://exam.naer.edu.tw/upload/answer.docx");
        let exam = derive_file_name(&record(), DocumentRole::ExamPaper, &source);
        let answer = derive_file_name(&record(), DocumentRole::AnswerKey, &source);
        assert_eq!(exam.replace("試卷", "答案"), answer);
        assert!(answer.ends_with("_答案.docx"));
    }

    #[test]
    fn extension_ignores_query_and_fragment() {
        assert_eq!(
            source_extension(&url("https://exam.naer.edu.tw/dl.php?file=x.pdf")),
            ".php"
        );
        assert_eq!(
            source_extension(&url("https://exam.naer.edu.tw/files/paper.tar.gz#top")),
            ".gz"
        );
    }

    #[test]
    fn missing_extension_is_empty() {
        assert_eq!(source_extension(&url("https://exam.naer.edu.tw/download/42")), "");
        assert_eq!(source_extension(&url("https://exam.naer.edu.tw/")), "");
        assert_eq!(source_extension(&url("https://exam.naer.edu.tw/.hidden")), "");
        assert_eq!(source_extension(&url("https://exam.naer.edu.tw/dir.v2/file")), "");
    }

    #[test]
    fn separators_in_metadata_do_not_create_directories() {
        let mut record = record();
        record.exam_type = "期中/期末".to_string();
        let name = derive_file_name(
            &record,
            DocumentRole::ExamPaper,
            &url("https://exam.naer.edu.tw/a.pdf"),
        );
        assert!(!name.contains('/'));
    }

    #[test]
    fn reserved_characters_become_underscores_and_the_rest_is_kept() {
        let mut record = record();
        record.city = "A:B".to_string();
        record.version = "V1.".to_string();
        let name = derive_file_name(
            &record,
            DocumentRole::ExamPaper,
            &url("https://exam.naer.edu.tw/a.pdf"),
        );
        assert_eq!(name, "A_B_板橋國小_一年級_113_數學_期中考_V1._試卷.pdf");
    }
}
