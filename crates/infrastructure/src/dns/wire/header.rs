use super::reader::WireReader;
use walkdns_domain::{DomainError, Header, HEADER_LEN};

pub fn encode_header(header: &Header) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    let fields = [
        header.id,
        header.flags,
        header.num_questions,
        header.num_answers,
        header.num_authorities,
        header.num_additionals,
    ];
    for (chunk, field) in buf.chunks_exact_mut(2).zip(fields) {
        chunk.copy_from_slice(&field.to_be_bytes());
    }
    buf
}

pub fn decode_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    if reader.remaining() < HEADER_LEN {
        return Err(DomainError::malformed(format!(
            "message of {} bytes is shorter than the {}-byte header",
            reader.remaining(),
            HEADER_LEN
        )));
    }

    Ok(Header {
        id: reader.read_u16()?,
        flags: reader.read_u16()?,
        num_questions: reader.read_u16()?,
        num_answers: reader.read_u16()?,
        num_authorities: reader.read_u16()?,
        num_additionals: reader.read_u16()?,
    })
}
