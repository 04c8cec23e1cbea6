use crate::{CourseType, DecodeError, Decoder, Link, LinkType};
use std::collections::BTreeSet;

/// Title prefixes marking a teacher line when the cell has no teacher links.
const ACADEMIC_TITLES: [&str; 5] = ["dr", "mgr", "prof", "inż", "hab"];

/// What a course cell's label says about the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseContent {
    pub name: String,
    pub course_type: CourseType,
    pub teachers: BTreeSet<String>,
    pub classrooms: BTreeSet<String>,
    pub additional_info: Option<String>,
}

impl Decoder {
    /// Splits a cell label into name, type, people, rooms and notes.
    ///
    /// The first line may open with a type code (`wyk`, `lab`, ...). Lines
    /// behind the notes marker become the note. Link texts are people or
    /// rooms depending on the link's type code and are cut out of every
    /// line. Whatever remains is the course name.
    pub fn parse_content(
        &self,
        text: &str,
        links: &BTreeSet<Link>,
    ) -> Result<CourseContent, DecodeError> {
        let mut teachers = BTreeSet::new();
        let mut classrooms = BTreeSet::new();
        for link in links {
            let label = normalize_ws(&link.text);
            if label.is_empty() {
                continue;
            }
            match link.kind() {
                Some(LinkType::Teacher) => {
                    teachers.insert(label);
                }
                Some(LinkType::Room) => {
                    classrooms.insert(label);
                }
                None => {}
            }
        }

        // Longest first, so "J. Kowalski-Nowak" goes before "J. Kowalski".
        let mut labels: Vec<String> = teachers.iter().chain(classrooms.iter()).cloned().collect();
        labels.sort_by(|a, b| b.len().cmp(&a.len()));
        let teacher_links = !teachers.is_empty();

        let mut course_type = CourseType::Other;
        let mut candidates = Vec::new();
        let mut notes = Vec::new();

        let segments = text.lines().map(normalize_ws).filter(|s| !s.is_empty());
        for (i, segment) in segments.enumerate() {
            let mut segment = segment.as_str();
            let mut title_line = false;

            if i == 0 {
                let (code, rest) = split_first_token(segment);
                if let Some(known) = CourseType::from_code(code) {
                    course_type = known;
                    segment = rest;
                    title_line = true;
                }
            }

            if let Some(note) = strip_prefix_ci(segment, &self.layout.notes_marker) {
                let note = note.trim();
                if !note.is_empty() {
                    notes.push(note.to_string());
                }
                continue;
            }

            // The line opened by a type code is the title; room numbers in
            // it ("Fizyka 1") belong to the name.
            let remaining = if title_line {
                segment.to_string()
            } else {
                remove_labels(segment, &labels)
            };
            if remaining.is_empty() {
                continue;
            }

            if !title_line && !teacher_links && starts_with_title(&remaining) {
                teachers.insert(remaining);
                continue;
            }

            candidates.push(remaining);
        }

        let name = normalize_ws(&candidates.join(" "));
        if name.is_empty() {
            return Err(DecodeError::MissingName);
        }

        let additional_info = if notes.is_empty() {
            None
        } else {
            Some(notes.join("; "))
        };

        Ok(CourseContent {
            name,
            course_type,
            teachers,
            classrooms,
            additional_info,
        })
    }
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ")
}

fn split_first_token(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (s, ""),
    }
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = s.char_indices();
    for p in prefix.chars() {
        let (_, c) = chars.next()?;
        if !c.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
    match chars.next() {
        Some((i, _)) => Some(&s[i..]),
        None => Some(""),
    }
}

fn starts_with_title(s: &str) -> bool {
    let (first, _) = split_first_token(s);
    let first = first.trim_end_matches(|c| c == '.' || c == ',').to_lowercase();
    ACADEMIC_TITLES.contains(&first.as_str())
}

fn bare(token: &str) -> &str {
    token.trim_matches(|c| c == ',' || c == ';')
}

fn is_separator(token: &str) -> bool {
    token.chars().all(|c| matches!(c, ',' | ';' | '-' | '/' | '|'))
}

/// Cuts whole-word occurrences of each label out of `segment`.
fn remove_labels(segment: &str, labels: &[String]) -> String {
    let mut tokens: Vec<&str> = segment.split(' ').collect();

    for label in labels {
        let phrase: Vec<&str> = label.split(' ').collect();
        let mut i = 0;
        while i + phrase.len() <= tokens.len() {
            let matches = tokens[i..i + phrase.len()]
                .iter()
                .zip(phrase.iter())
                .all(|(token, word)| bare(token) == bare(word));
            if matches {
                tokens.drain(i..i + phrase.len());
            } else {
                i += 1;
            }
        }
    }

    tokens
        .into_iter()
        .filter(|t| !t.is_empty() && !is_separator(t))
        .collect::<Vec<&str>>()
        .join(" ")
}
