use walkdns_application::ports::DnsResolution;
use walkdns_domain::{Packet, Question, Record, RecordType, CLASS_IN};

pub fn print_resolution(resolution: &DnsResolution) {
    println!("{}", resolution.data);
}

pub fn print_packet(packet: &Packet) {
    println!(
        ";; id {:#06x}, flags {:#06x}",
        packet.header.id, packet.header.flags
    );

    println!(";; QUESTION ({})", packet.questions.len());
    for question in &packet.questions {
        println!("{}", format_question(question));
    }

    print_section("ANSWER", &packet.answers);
    print_section("AUTHORITY", &packet.authorities);
    print_section("ADDITIONAL", &packet.additionals);
}

fn print_section(title: &str, records: &[Record]) {
    println!(";; {} ({})", title, records.len());
    for record in records {
        println!("{}", record);
    }
}

fn format_question(question: &Question) -> String {
    let class = if question.qclass == CLASS_IN {
        "IN".to_string()
    } else {
        format!("CLASS{}", question.qclass)
    };
    let qtype = RecordType::from_u16(question.qtype)
        .map(|t| t.to_string())
        .unwrap_or_else(|| format!("TYPE{}", question.qtype));

    format!("{} {} {}", question.name, class, qtype)
}
