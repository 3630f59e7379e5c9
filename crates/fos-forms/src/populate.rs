//! Request Population
//!
//! Copies submitted values into the elements of a form.

use crate::{Form, Submission, SubmissionError};

impl Form {
    /// Copy a submission into matching elements, then revalidate.
    ///
    /// The first value of a repeated field wins. File fields take the
    /// non-empty filenames joined with `", "`.
    pub fn populate_from_submission(&mut self, submission: &Submission) -> &mut Self {
        let mut populated = 0;
        {
            let mut elements = self.elements_mut();

            for (name, values) in submission.fields() {
                let (Some(element), Some(value)) = (elements.get_mut(name), values.first()) else {
                    continue;
                };
                tracing::trace!("Populating {} from submission", name);
                element.set_value(value);
                populated += 1;
            }

            for (name, files) in submission.files() {
                let Some(element) = elements.get_mut(name) else {
                    continue;
                };
                let filenames: Vec<&str> = files
                    .iter()
                    .map(|file| file.filename.as_str())
                    .filter(|filename| !filename.is_empty())
                    .collect();
                tracing::trace!("Populating {} with {} files", name, filenames.len());
                element.set_value(&filenames.join(", "));
                populated += 1;
            }
        }

        let invalid = self.revalidate();
        tracing::debug!(
            "Populated {} fields from submission, {} invalid",
            populated,
            invalid
        );
        self
    }

    /// Decode a request body with this form's configuration and populate
    pub fn populate_from_request(
        &mut self,
        content_type: &str,
        body: &[u8],
    ) -> Result<(), SubmissionError> {
        let submission = Submission::parse(content_type, body, self.config())?;
        self.populate_from_submission(&submission);
        Ok(())
    }
}
