//! Domain name encoding and decoding (RFC 1035 §3.1, §4.1.4).

use super::reader::WireReader;
use walkdns_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Encodes a dotted ASCII name as length-prefixed labels ending in the root label.
///
/// A single trailing dot is accepted; `""` and `"."` encode the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    if !name.is_ascii() {
        return Err(DomainError::Encoding(format!(
            "domain name '{}' is not ASCII",
            name
        )));
    }

    let name = name.strip_suffix('.').unwrap_or(name);
    let mut buf = Vec::with_capacity(name.len() + 2);

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::Encoding(format!(
                    "empty label in domain name '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::Encoding(format!(
                    "label '{}' is {} bytes, limit is {}",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);

    if buf.len() > MAX_NAME_LEN {
        return Err(DomainError::Encoding(format!(
            "domain name '{}' encodes to {} bytes, limit is {}",
            name,
            buf.len(),
            MAX_NAME_LEN
        )));
    }

    Ok(buf)
}

/// Decodes an uncompressed name. Used for the question section.
pub fn decode_name_simple(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let mut labels: Vec<&str> = Vec::new();

    loop {
        let offset = reader.position();
        let len = reader.read_u8()?;
        if len == 0 {
            break;
        }
        if len & LABEL_TYPE_MASK != 0 {
            return Err(DomainError::malformed(format!(
                "label type 0x{:02x} at offset {} not allowed in an uncompressed name",
                len, offset
            )));
        }
        labels.push(label_str(reader.read_bytes(len as usize)?, offset)?);
    }

    finish(labels)
}

/// Decodes a name that may end in a compression pointer.
///
/// On return the reader sits just past the name as it appears at the
/// starting position, regardless of how many pointers were followed.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let mut labels: Vec<&str> = Vec::new();
    let mut resume_at: Option<usize> = None;
    let mut hops = 0usize;
    let max_hops = reader.len();

    loop {
        let offset = reader.position();
        let len = reader.read_u8()?;

        match len & LABEL_TYPE_MASK {
            0x00 => {
                if len == 0 {
                    break;
                }
                labels.push(label_str(reader.read_bytes(len as usize)?, offset)?);
            }
            LABEL_TYPE_MASK => {
                let low = reader.read_u8()?;
                let target = (((len & POINTER_OFFSET_MASK) as usize) << 8) | low as usize;

                if target >= offset {
                    return Err(DomainError::malformed(format!(
                        "compression pointer at offset {} targets offset {}, not an earlier position",
                        offset, target
                    )));
                }

                hops += 1;
                if hops > max_hops {
                    return Err(DomainError::malformed(format!(
                        "compression pointers did not terminate within {} hops",
                        max_hops
                    )));
                }

                if resume_at.is_none() {
                    resume_at = Some(reader.position());
                }
                reader.seek(target)?;
            }
            _ => {
                return Err(DomainError::malformed(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    len, offset
                )));
            }
        }
    }

    if let Some(pos) = resume_at {
        reader.seek(pos)?;
    }

    finish(labels)
}

fn label_str(bytes: &[u8], offset: usize) -> Result<&str, DomainError> {
    if !bytes.is_ascii() {
        return Err(DomainError::malformed(format!(
            "non-ASCII label at offset {}",
            offset
        )));
    }
    std::str::from_utf8(bytes)
        .map_err(|_| DomainError::malformed(format!("non-ASCII label at offset {}", offset)))
}

fn finish(labels: Vec<&str>) -> Result<String, DomainError> {
    let name = labels.join(".");
    // Dotted length plus the length bytes and root label of the wire form.
    if !labels.is_empty() && name.len() + 2 > MAX_NAME_LEN {
        return Err(DomainError::malformed(format!(
            "decoded name exceeds {} bytes",
            MAX_NAME_LEN
        )));
    }
    Ok(name)
}
