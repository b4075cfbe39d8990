//! DNS Message Builder
//!
//! Constructs query messages in wire format. Queries are sent with all flags
//! cleared: no Recursion Desired bit, since walkdns walks the delegation
//! chain itself instead of asking a recursive server to do it.

use super::header::encode_header;
use super::record::encode_question;
use walkdns_domain::{DomainError, Header, Question, RecordType};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query for one question with an id drawn from `rng`.
    ///
    /// Returns the id alongside the bytes so callers can match the response.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
        rng: &mut fastrand::Rng,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = rng.u16(..);
        let bytes = Self::build_query_with_id(id, domain, record_type)?;
        Ok((id, bytes))
    }

    pub fn build_query_with_id(
        id: u16,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>, DomainError> {
        let question = Question::new(domain, record_type);
        Self::serialize_message(id, 0, &[question])
    }

    /// Serialize a header and question section; the header counts are
    /// derived from `questions`.
    pub fn serialize_message(
        id: u16,
        flags: u16,
        questions: &[Question],
    ) -> Result<Vec<u8>, DomainError> {
        let num_questions = u16::try_from(questions.len()).map_err(|_| {
            DomainError::Encoding(format!("{} questions do not fit in a header", questions.len()))
        })?;

        let header = Header {
            id,
            flags,
            num_questions,
            ..Header::default()
        };

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&encode_header(&header));
        for question in questions {
            buf.extend_from_slice(&encode_question(question)?);
        }

        Ok(buf)
    }
}
