#![allow(dead_code)]
use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_TXT: u16 = 16;

/// Hand-rolled name encoding so fixtures never depend on the codec under test.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[derive(Debug, Clone)]
pub enum TestRecord {
    A { name: String, addr: Ipv4Addr },
    Ns { name: String, target: String },
    Raw { name: String, rtype: u16, data: Vec<u8> },
}

impl TestRecord {
    pub fn a(name: &str, addr: &str) -> Self {
        TestRecord::A {
            name: name.to_string(),
            addr: addr.parse().unwrap(),
        }
    }

    pub fn ns(name: &str, target: &str) -> Self {
        TestRecord::Ns {
            name: name.to_string(),
            target: target.to_string(),
        }
    }

    pub fn raw(name: &str, rtype: u16, data: &[u8]) -> Self {
        TestRecord::Raw {
            name: name.to_string(),
            rtype,
            data: data.to_vec(),
        }
    }

    fn encode(&self, out: &mut Vec<u8>) {
        let (name, rtype, rdata) = match self {
            TestRecord::A { name, addr } => (name, TYPE_A, addr.octets().to_vec()),
            TestRecord::Ns { name, target } => (name, TYPE_NS, encode_name(target)),
            TestRecord::Raw { name, rtype, data } => (name, *rtype, data.clone()),
        };
        out.extend_from_slice(&encode_name(name));
        out.extend_from_slice(&rtype.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&3600u32.to_be_bytes());
        out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(&rdata);
    }
}

/// Builds response messages byte by byte with uncompressed names.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    question: Option<(String, u16)>,
    answers: Vec<TestRecord>,
    authorities: Vec<TestRecord>,
    additionals: Vec<TestRecord>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8000,
            question: None,
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.question = Some((name.to_string(), qtype));
        self
    }

    pub fn answer(mut self, record: TestRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: TestRecord) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: TestRecord) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&(self.question.is_some() as u16).to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authorities.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additionals.len() as u16).to_be_bytes());

        if let Some((name, qtype)) = &self.question {
            out.extend_from_slice(&encode_name(name));
            out.extend_from_slice(&qtype.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.encode(&mut out);
        }
        out
    }
}
