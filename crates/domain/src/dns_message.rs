//! In-memory model of a DNS message (RFC 1035 §4.1).
//!
//! These types carry no wire logic; encoding and decoding live in the
//! infrastructure crate. A decoded [`Packet`] owns all of its sections.

use crate::RecordType;
use std::fmt;
use std::net::Ipv4Addr;

/// Size of the fixed message header in bytes.
pub const HEADER_LEN: usize = 12;

/// The Internet class.
pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    /// Kept as an opaque bitfield.
    pub flags: u16,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype: record_type.to_u16(),
            qclass: CLASS_IN,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}

/// Record payload, interpreted according to the record's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Ns(String),
    Raw(Vec<u8>),
}

impl RecordData {
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::A(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            RecordData::Ns(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) => write!(f, "{}", name),
            RecordData::Raw(bytes) => {
                // TXT payloads are mostly printable; show anything else escaped
                write!(f, "\"")?;
                for b in bytes {
                    if b.is_ascii_graphic() || *b == b' ' {
                        write!(f, "{}", *b as char)?;
                    } else {
                        write!(f, "\\{:03}", b)?;
                    }
                }
                write!(f, "\"")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl Record {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.rtype == record_type.to_u16()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = if self.rclass == CLASS_IN {
            "IN".to_string()
        } else {
            format!("CLASS{}", self.rclass)
        };
        match self.record_type() {
            Some(rt) => write!(f, "{} {} {} {} {}", self.name, self.ttl, class, rt, self.data),
            None => write!(
                f,
                "{} {} {} TYPE{} {}",
                self.name, self.ttl, class, self.rtype, self.data
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Packet {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Packet {
    /// First answer record of the requested type.
    pub fn answer(&self, record_type: RecordType) -> Option<&Record> {
        self.answers.iter().find(|r| r.is_type(record_type))
    }

    /// First A record in the additional section (glue).
    pub fn glue_address(&self) -> Option<Ipv4Addr> {
        self.additionals
            .iter()
            .filter(|r| r.is_type(RecordType::A))
            .find_map(|r| r.data.as_ipv4())
    }

    /// First NS target named in the authority section.
    pub fn referral_nameserver(&self) -> Option<&str> {
        self.authorities
            .iter()
            .filter(|r| r.is_type(RecordType::NS))
            .find_map(|r| r.data.as_name())
    }
}
