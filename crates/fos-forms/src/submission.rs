//! Form Submissions
//!
//! Decoded request bodies: text fields and uploaded file metadata, keyed by
//! field name in submission order.

use std::collections::BTreeMap;

use crate::form::{MULTIPART_DATA, URL_ENCODED_DATA};
use crate::FormConfig;

/// Submission decoding error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("invalid form encoding: {0}")]
    InvalidEncoding(String),
    #[error("multipart body has no boundary")]
    MissingBoundary,
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("submission of {size} bytes exceeds the limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

/// Metadata of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadedFile {
    pub filename: String,
    pub size: u64,
    pub content_type: Option<String>,
}

impl UploadedFile {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }
}

/// Decoded form submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Submission {
    content_type: String,
    fields: BTreeMap<String, Vec<String>>,
    files: BTreeMap<String, Vec<UploadedFile>>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.trim().to_string();
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.add_field(name, value);
        self
    }

    pub fn with_file(mut self, name: &str, file: UploadedFile) -> Self {
        self.add_file(name, file);
        self
    }

    pub fn add_field(&mut self, name: &str, value: &str) -> &mut Self {
        self.fields
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    pub fn add_file(&mut self, name: &str, file: UploadedFile) -> &mut Self {
        self.files.entry(name.to_string()).or_default().push(file);
        self
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn is_multipart(&self) -> bool {
        media_type(&self.content_type).starts_with("multipart/")
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    pub fn files(&self) -> &BTreeMap<String, Vec<UploadedFile>> {
        &self.files
    }

    /// First submitted value of a field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Decode a query string (leading `?` optional)
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut submission = Self::new();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            submission.add_field(&name, &value);
        }
        submission
    }

    /// Decode a request body according to its `Content-Type`.
    ///
    /// URL-encoded bodies are decoded as `application/x-www-form-urlencoded`
    /// and `multipart/*` bodies as `multipart/form-data`. An unlabelled body
    /// is treated as `application/octet-stream`; it and any other media type
    /// yield no fields.
    pub fn parse(
        content_type: &str,
        body: &[u8],
        config: &FormConfig,
    ) -> Result<Self, SubmissionError> {
        if body.len() > config.max_memory {
            return Err(SubmissionError::TooLarge {
                size: body.len(),
                limit: config.max_memory,
            });
        }

        let mut submission = Self::new().with_content_type(content_type);
        let media = media_type(content_type);

        if media == URL_ENCODED_DATA {
            check_percent_escapes(body)?;
            for (name, value) in url::form_urlencoded::parse(body) {
                submission.add_field(&name, &value);
            }
        } else if media.starts_with("multipart/") {
            if media != MULTIPART_DATA {
                tracing::debug!("Treating {} as {}", media, MULTIPART_DATA);
            }
            let boundary = parameter(content_type, "boundary")
                .filter(|boundary| !boundary.is_empty())
                .ok_or(SubmissionError::MissingBoundary)?;
            parse_multipart(&mut submission, body, &boundary)?;
        } else if media.is_empty() {
            tracing::debug!("Ignoring submission body without a content type");
        } else {
            tracing::debug!("Ignoring submission body of type {}", media);
        }

        tracing::debug!(
            "Decoded submission: {} fields, {} file fields",
            submission.fields.len(),
            submission.files.len()
        );
        Ok(submission)
    }
}

/// Lowercased media type without parameters
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn check_percent_escapes(body: &[u8]) -> Result<(), SubmissionError> {
    let mut pos = 0;
    while pos < body.len() {
        if body[pos] == b'%' {
            let valid = body
                .get(pos + 1..pos + 3)
                .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(SubmissionError::InvalidEncoding(format!(
                    "malformed percent escape at byte {}",
                    pos
                )));
            }
            pos += 3;
        } else {
            pos += 1;
        }
    }
    Ok(())
}

/// Split a header value on `;`, ignoring separators inside quotes
fn split_parameters(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;

    for (i, c) in value.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ';' if !quoted => {
                parts.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(value[start..].trim());
    parts
}

/// Look up a header parameter, unquoting its value
fn parameter(header: &str, name: &str) -> Option<String> {
    split_parameters(header).into_iter().skip(1).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case(name) {
            return None;
        }
        let value = value.trim();
        let value = match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            Some(quoted) => quoted.replace("\\\"", "\""),
            None => value.to_string(),
        };
        Some(value)
    })
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Delimiter line found in a multipart body
struct Delimiter {
    /// Offset of the `--boundary` text
    start: usize,
    /// Offset just past the delimiter line
    end: usize,
    closing: bool,
}

/// Find the next delimiter line at or after `from`.
///
/// A match counts only at the start of a line and when followed by `--`, or
/// by optional blanks and a line break or the end of input.
fn find_delimiter(body: &[u8], delimiter: &[u8], mut from: usize) -> Option<Delimiter> {
    while let Some(start) = find(body, delimiter, from) {
        from = start + 1;
        if start > 0 && body[start - 1] != b'\n' {
            continue;
        }

        let mut end = start + delimiter.len();
        if body[end..].starts_with(b"--") {
            return Some(Delimiter {
                start,
                end: body.len(),
                closing: true,
            });
        }
        while matches!(body.get(end), Some(b' ' | b'\t')) {
            end += 1;
        }
        let rest = &body[end..];
        let line_break = if rest.starts_with(b"\r\n") {
            2
        } else if rest.starts_with(b"\n") {
            1
        } else if rest.is_empty() {
            0
        } else {
            continue;
        };
        return Some(Delimiter {
            start,
            end: end + line_break,
            closing: false,
        });
    }
    None
}

/// Drop the line break that belongs to the following delimiter
fn strip_line_break(content: &[u8]) -> &[u8] {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content.strip_suffix(b"\r").unwrap_or(content)
}

fn parse_multipart(
    submission: &mut Submission,
    body: &[u8],
    boundary: &str,
) -> Result<(), SubmissionError> {
    let delimiter = format!("--{}", boundary);

    let mut current = find_delimiter(body, delimiter.as_bytes(), 0)
        .ok_or_else(|| SubmissionError::Multipart("missing opening boundary".to_string()))?;

    while !current.closing {
        let next = find_delimiter(body, delimiter.as_bytes(), current.end)
            .ok_or_else(|| SubmissionError::Multipart("unterminated part".to_string()))?;
        parse_part(submission, strip_line_break(&body[current.end..next.start]))?;
        current = next;
    }
    Ok(())
}

/// Split a part at its first blank line
fn split_part(part: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(content) = part.strip_prefix(b"\r\n").or_else(|| part.strip_prefix(b"\n")) {
        return Some((&part[..0], content));
    }

    let crlf = find(part, b"\r\n\r\n", 0).map(|pos| (pos, 4));
    let lf = find(part, b"\n\n", 0).map(|pos| (pos, 2));
    let (pos, len) = match (crlf, lf) {
        (Some(crlf), Some(lf)) => crlf.min(lf),
        (crlf, lf) => crlf.or(lf)?,
    };
    Some((&part[..pos], &part[pos + len..]))
}

fn parse_part(submission: &mut Submission, part: &[u8]) -> Result<(), SubmissionError> {
    let (head, content) = split_part(part).ok_or_else(|| {
        SubmissionError::Multipart("part headers are not terminated".to_string())
    })?;

    let head = std::str::from_utf8(head)
        .map_err(|_| SubmissionError::Multipart("part headers are not valid UTF-8".to_string()))?;

    let mut disposition = None;
    let mut content_type = None;
    for line in head.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.eq_ignore_ascii_case("content-disposition") {
            disposition = Some(value.trim());
        } else if name.eq_ignore_ascii_case("content-type") {
            content_type = Some(value.trim());
        }
    }

    let disposition = disposition.ok_or_else(|| {
        SubmissionError::Multipart("part without Content-Disposition".to_string())
    })?;
    let name = parameter(disposition, "name")
        .ok_or_else(|| SubmissionError::Multipart("part without a field name".to_string()))?;

    match parameter(disposition, "filename") {
        Some(filename) => {
            let filename = filename.rsplit(['/', '\\']).next().unwrap_or_default();
            let mut file = UploadedFile::new(filename).with_size(content.len() as u64);
            if let Some(content_type) = content_type {
                file = file.with_content_type(content_type);
            }
            tracing::trace!("Multipart file {} = {:?}", name, file.filename);
            submission.add_file(&name, file);
        }
        None => {
            let value = std::str::from_utf8(content).map_err(|_| {
                SubmissionError::Multipart(format!("field {} is not valid UTF-8", name))
            })?;
            tracing::trace!("Multipart field {}", name);
            submission.add_field(&name, value);
        }
    }
    Ok(())
}
