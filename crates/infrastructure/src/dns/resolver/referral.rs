use std::net::Ipv4Addr;
use walkdns_domain::{Packet, RecordData, RecordType};

/// What a response tells the resolver to do next, checked in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// The answer section holds a record of the requested type.
    Answer(RecordData),
    /// Glue: continue at this nameserver address.
    Glue(Ipv4Addr),
    /// Only a nameserver name was given; resolve it first.
    Delegate(String),
    /// Nothing usable.
    DeadEnd,
}

impl NextStep {
    pub fn from_response(packet: &Packet, record_type: RecordType) -> Self {
        if let Some(record) = packet.answer(record_type) {
            return NextStep::Answer(record.data.clone());
        }
        if let Some(addr) = packet.glue_address() {
            return NextStep::Glue(addr);
        }
        if let Some(ns) = packet.referral_nameserver() {
            return NextStep::Delegate(ns.to_string());
        }
        NextStep::DeadEnd
    }
}
