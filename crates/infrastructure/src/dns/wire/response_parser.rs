use super::header::decode_header;
use super::reader::WireReader;
use super::record::{decode_question, decode_record};
use tracing::debug;
use walkdns_domain::{DomainError, Packet, Record};

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a full message. Section sizes come from the header; running
    /// out of bytes before they are satisfied fails the whole parse.
    pub fn parse(response_bytes: &[u8]) -> Result<Packet, DomainError> {
        let mut reader = WireReader::new(response_bytes);
        let header = decode_header(&mut reader)?;

        let questions = (0..header.num_questions)
            .map(|_| decode_question(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = Self::records(&mut reader, header.num_answers, "answer")?;
        let authorities = Self::records(&mut reader, header.num_authorities, "authority")?;
        let additionals = Self::records(&mut reader, header.num_additionals, "additional")?;

        debug!(
            id = header.id,
            flags = header.flags,
            answers = answers.len(),
            authorities = authorities.len(),
            additionals = additionals.len(),
            trailing = reader.remaining(),
            "DNS response parsed"
        );

        Ok(Packet {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn records(
        reader: &mut WireReader<'_>,
        count: u16,
        section: &str,
    ) -> Result<Vec<Record>, DomainError> {
        (0..count)
            .map(|i| {
                decode_record(reader).map_err(|e| match e {
                    DomainError::MalformedMessage(msg) => DomainError::MalformedMessage(format!(
                        "{} record {} of {}: {}",
                        section,
                        i + 1,
                        count,
                        msg
                    )),
                    other => other,
                })
            })
            .collect()
    }
}
