//! RFC 1035 message codec.
//!
//! Names, questions and records are decoded from a single [`WireReader`]
//! spanning the whole message so compression pointers can reach any
//! earlier byte, including the question section.

pub mod header;
pub mod message_builder;
pub mod name;
pub mod reader;
pub mod record;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use reader::WireReader;
pub use response_parser::ResponseParser;
