use ferrous_lookup_application::ports::{QueryTrace, QueryTracer, ResponseTrace};
use ferrous_lookup_domain::{RecordType, ResourceRecord};

/// Prints every query sent and every response accepted to stdout (`-t`).
pub struct ConsoleTracer;

impl QueryTracer for ConsoleTracer {
    fn query_sent(&self, query: &QueryTrace<'_>) {
        print!("{}", render_query(query));
    }

    fn response_received(&self, response: &ResponseTrace<'_>) {
        print!("{}", render_response(response));
    }
}

pub fn render_query(query: &QueryTrace<'_>) -> String {
    let qtype = match query.record_type {
        RecordType::AAAA => "AAAA",
        _ => "A ",
    };
    format!(
        "\n\nQuery ID     {} {}  {} --> {}\n",
        query.id,
        query.domain,
        qtype,
        query.server.ip().to_canonical()
    )
}

pub fn render_response(response: &ResponseTrace<'_>) -> String {
    let mut out = format!(
        "Response ID: {} Authoritative = {}\n",
        response.id, response.authoritative
    );

    for (heading, records) in [
        ("Answers", response.answers),
        ("Nameservers", response.nameservers),
        ("Additional Information", response.additional),
    ] {
        out.push_str(&format!("  {} {}\n", heading, records.len()));
        for record in records {
            out.push_str(&render_record(record));
        }
    }

    out
}

fn render_record(record: &ResourceRecord) -> String {
    format!(
        "       {:<30} {:<10} {:<4} {}\n",
        record.name,
        record.ttl,
        record.record_type.label(),
        record.value
    )
}
