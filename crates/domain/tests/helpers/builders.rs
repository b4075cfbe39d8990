#![allow(dead_code)]
use walkdns_domain::{Record, RecordData, RecordType, CLASS_IN};
use std::net::Ipv4Addr;

pub struct RecordBuilder {
    name: String,
    rtype: u16,
    ttl: u32,
    data: RecordData,
}

impl RecordBuilder {
    pub fn a(name: &str, addr: Ipv4Addr) -> Self {
        Self {
            name: name.to_string(),
            rtype: RecordType::A.to_u16(),
            ttl: 3600,
            data: RecordData::A(addr),
        }
    }

    pub fn ns(name: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            rtype: RecordType::NS.to_u16(),
            ttl: 172_800,
            data: RecordData::Ns(target.to_string()),
        }
    }

    pub fn raw(name: &str, rtype: u16, bytes: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            rtype,
            ttl: 300,
            data: RecordData::Raw(bytes.to_vec()),
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> Record {
        Record {
            name: self.name,
            rtype: self.rtype,
            rclass: CLASS_IN,
            ttl: self.ttl,
            data: self.data,
        }
    }
}
