/// Value of `key` in a raw query string, only when it appears exactly once.
///
/// A key repeated in the query arrives as a list of values, which callers
/// treat the same as a missing key. A leading `?` is ignored and `+` decodes
/// to a space, as in form encoding.
pub fn single_query_value(search: &str, key: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);

    let mut values = search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(name) == key).then(|| decode(value))
        });

    let first = values.next()?;
    match values.next() {
        Some(_) => None,
        None => Some(first),
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}
