// Minimal multipart/form-data parsing: just enough for the single-file
// upload form, without pulling in an async stack.

/// Returns the index of the first occurrence of `needle` in `haystack`.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits `haystack` on every occurrence of `needle`, returning the pieces
/// between occurrences (excluding the needle itself).
fn split_on<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        if let Some(pos) = find_subsequence(&haystack[start..], needle) {
            result.push(&haystack[start..start + pos]);
            start += pos + needle.len();
        } else {
            result.push(&haystack[start..]);
            break;
        }
    }
    result
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with("boundary="))
        .map(|s| s["boundary=".len()..].trim_matches('"').to_owned())
}

/// Extracts the first file part from a multipart/form-data body, returning
/// the declared filename (path components stripped) and the raw bytes.
pub fn extract_file(body: &[u8], boundary: &str) -> Option<(String, Vec<u8>)> {
    let delimiter = format!("--{}", boundary);
    let parts = split_on(body, delimiter.as_bytes());

    for part in parts {
        let sep = b"\r\n\r\n";
        let Some(sep_pos) = find_subsequence(part, sep) else {
            continue;
        };
        let headers = String::from_utf8_lossy(&part[..sep_pos]);
        let Some(filename) = parse_filename(&headers) else {
            continue;
        };
        let raw = &part[sep_pos + sep.len()..];
        let data = raw.strip_suffix(b"\r\n").unwrap_or(raw);
        // Browsers send an empty part when no file was chosen.
        if filename.is_empty() || data.is_empty() {
            return None;
        }
        return Some((filename, data.to_vec()));
    }
    None
}

/// Parses `filename="..."` from a Content-Disposition header section and
/// strips any path the browser may have left in front of the name.
fn parse_filename(headers: &str) -> Option<String> {
    let key = "filename=\"";
    let pos = headers.find(key)?;
    let rest = &headers[pos + key.len()..];
    let end = rest.find('"')?;
    let raw = &rest[..end];
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    Some(name.to_owned())
}
