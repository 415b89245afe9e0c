//! Domain name wire encoding (RFC 1035 §3.1, §4.1.4)
//!
//! Names travel as a sequence of length-prefixed labels terminated by a
//! zero byte. Inside a message a name may end in a compression pointer: two
//! bytes whose top bits are `11`, the remaining 14 bits giving an absolute
//! offset into the message where the rest of the name continues.

use ferrous_lookup_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const POINTER_TAG: u8 = 0xC0;

pub struct NameCodec;

impl NameCodec {
    /// Encode a dotted name as a label sequence.
    ///
    /// A single trailing dot is accepted. `""` and `"."` encode the root.
    pub fn encode(name: &str) -> Result<Vec<u8>, DomainError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);

        let mut buf = Vec::with_capacity(trimmed.len() + 2);

        if !trimmed.is_empty() {
            for label in trimmed.split('.') {
                if label.is_empty() {
                    return Err(DomainError::InvalidDomainName(format!(
                        "Empty label in '{}'",
                        name
                    )));
                }
                if label.len() > MAX_LABEL_LEN {
                    return Err(DomainError::InvalidDomainName(format!(
                        "Label '{}' exceeds {} bytes",
                        label, MAX_LABEL_LEN
                    )));
                }
                buf.push(label.len() as u8);
                buf.extend_from_slice(label.as_bytes());
            }
        }
        buf.push(0);

        if buf.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' encodes to {} bytes, limit is {}",
                name,
                buf.len(),
                MAX_NAME_LEN
            )));
        }

        Ok(buf)
    }

    /// Decode the name starting at `offset` in `message`.
    ///
    /// Returns the dotted name and the number of bytes the name occupies at
    /// `offset` itself (a followed pointer counts as its two bytes, not as
    /// the bytes it points to). At most `max_hops` pointers are followed.
    pub fn decode(
        message: &[u8],
        offset: usize,
        max_hops: usize,
    ) -> Result<(String, usize), DomainError> {
        let mut labels: Vec<String> = Vec::new();
        let mut pos = offset;
        let mut consumed: Option<usize> = None;
        let mut hops = 0usize;
        let mut name_len = 0usize;

        loop {
            let len = *message
                .get(pos)
                .ok_or_else(|| malformed(format!("name at offset {} runs past end", offset)))?;

            if len & POINTER_TAG == POINTER_TAG {
                let low = *message
                    .get(pos + 1)
                    .ok_or_else(|| malformed("truncated compression pointer".to_string()))?;
                let target = (((len & !POINTER_TAG) as usize) << 8) | low as usize;

                if consumed.is_none() {
                    consumed = Some(pos + 2 - offset);
                }

                hops += 1;
                if hops > max_hops {
                    return Err(malformed(format!(
                        "more than {} compression pointers in name at offset {}",
                        max_hops, offset
                    )));
                }
                if target >= message.len() {
                    return Err(malformed(format!(
                        "compression pointer to {} outside message of {} bytes",
                        target,
                        message.len()
                    )));
                }

                pos = target;
                continue;
            }

            if len & POINTER_TAG != 0 {
                return Err(malformed(format!("reserved label type 0x{:02x}", len)));
            }

            if len == 0 {
                pos += 1;
                break;
            }

            let start = pos + 1;
            let end = start + len as usize;
            let label = message
                .get(start..end)
                .ok_or_else(|| malformed(format!("label at offset {} runs past end", pos)))?;

            name_len += label.len() + 1;
            if name_len > MAX_NAME_LEN {
                return Err(malformed(format!(
                    "name at offset {} exceeds {} bytes",
                    offset, MAX_NAME_LEN
                )));
            }

            labels.push(String::from_utf8_lossy(label).into_owned());
            pos = end;
        }

        let consumed = consumed.unwrap_or(pos - offset);
        Ok((labels.join("."), consumed))
    }
}

fn malformed(msg: String) -> DomainError {
    DomainError::MalformedMessage(msg)
}
