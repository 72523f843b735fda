use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    /// The header block is not valid UTF-8.
    InvalidEncoding,
    /// A header line has no `": "` separator.
    MalformedHeaderLine,
}

/// The parsed start-line and headers of one request.
///
/// The request line is carried opaquely; this server never splits it into
/// method, target, and version. Header names map to a single value each:
/// a repeated name silently overwrites the earlier occurrence.
#[derive(Debug)]
pub struct RequestHead {
    pub request_line: String,
    pub headers: HashMap<String, String>,
}

/// Tokenizes a header block (terminator already stripped) into a
/// [`RequestHead`].
///
/// Lines split on CRLF; the first is the request line, each of the rest
/// splits on the first `": "` into a trimmed name and value. A line
/// without the separator fails the whole request.
pub fn parse_request_head(block: &[u8]) -> Result<RequestHead, ParseError> {
    let text = std::str::from_utf8(block).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = text.split("\r\n");

    // split always yields at least one item, the empty string for an
    // empty block
    let request_line = lines.next().unwrap_or("").to_string();

    let mut headers = HashMap::new();
    for line in lines {
        let (name, value) = line
            .split_once(": ")
            .ok_or(ParseError::MalformedHeaderLine)?;

        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    Ok(RequestHead {
        request_line,
        headers,
    })
}
