use std::fmt;

/// Record types the resolver distinguishes. Everything else is carried as
/// `Other` with its wire code so the parser can skip it structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    AAAA,
    Other(u16),
}

impl RecordType {
    /// The address type a lookup asks for.
    pub fn address(want_ipv6: bool) -> Self {
        if want_ipv6 {
            RecordType::AAAA
        } else {
            RecordType::A
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::AAAA => "AAAA",
            RecordType::Other(_) => "OTHER",
        }
    }

    /// Short label used on the console: CNAME prints as `CN` and SOA as its
    /// type number, unknown types print empty.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CN",
            RecordType::SOA => "6",
            RecordType::AAAA => "AAAA",
            RecordType::Other(_) => "",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Other(code) => write!(f, "TYPE{}", code),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
