mod tracer;

pub use tracer::ConsoleTracer;

use ferrous_lookup_domain::ResourceRecord;

/// One result line. The owner name printed is always the name that was
/// asked for, whatever name the record itself carries.
pub fn format_answer_line(fqdn: &str, record: &ResourceRecord) -> String {
    format!(
        "{} {}   {} {}",
        fqdn,
        record.ttl,
        record.record_type.label(),
        record.value
    )
}

pub fn print_answers(fqdn: &str, records: &[ResourceRecord]) {
    for record in records {
        println!("{}", format_answer_line(fqdn, record));
    }
}
