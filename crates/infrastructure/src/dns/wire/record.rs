//! Question and resource record codec (RFC 1035 §4.1.2, §4.1.3).

use super::name::{decode_name, decode_name_simple, encode_name};
use super::reader::WireReader;
use std::net::Ipv4Addr;
use tracing::debug;
use walkdns_domain::{DomainError, Question, Record, RecordData, RecordType};

pub fn encode_question(question: &Question) -> Result<Vec<u8>, DomainError> {
    let mut buf = encode_name(&question.name)?;
    buf.extend_from_slice(&question.qtype.to_be_bytes());
    buf.extend_from_slice(&question.qclass.to_be_bytes());
    Ok(buf)
}

pub fn decode_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
    let name = decode_name_simple(reader)?;
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;
    Ok(Question {
        name,
        qtype,
        qclass,
    })
}

pub fn decode_record(reader: &mut WireReader<'_>) -> Result<Record, DomainError> {
    let name = decode_name(reader)?;
    let rtype = reader.read_u16()?;
    let rclass = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let data_len = reader.read_u16()? as usize;

    let data = match RecordType::from_u16(rtype) {
        // The target name may use compression; the cursor follows the name
        // decoder rather than data_len.
        Some(RecordType::NS) => RecordData::Ns(decode_name(reader)?),
        Some(RecordType::A) => {
            if data_len != 4 {
                return Err(DomainError::malformed(format!(
                    "A record for '{}' has rdlength {}, expected 4",
                    name, data_len
                )));
            }
            let b = reader.read_bytes(4)?;
            RecordData::A(Ipv4Addr::new(b[0], b[1], b[2], b[3]))
        }
        _ => RecordData::Raw(reader.read_bytes(data_len)?.to_vec()),
    };

    debug!(name = %name, rtype = rtype, ttl = ttl, "Decoded record");

    Ok(Record {
        name,
        rtype,
        rclass,
        ttl,
        data,
    })
}
