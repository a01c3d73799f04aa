use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same set of untouched characters as `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn decode_component(value: &str) -> String {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Route of the full results page.
pub const SEARCH_PAGE: &str = "/search";

/// Link to the results page for `query`.
pub fn search_url(query: &str) -> String {
    format!("{SEARCH_PAGE}?q={}", encode_component(query))
}

fn pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn key_of(pair: &str) -> String {
    decode_component(pair.split_once('=').map(|(k, _)| k).unwrap_or(pair))
}

/// Reads `key` out of a `?a=b&c=d` string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    pairs(search).find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(k) == key).then(|| decode_component(v))
    })
}

/// Sets `key` in a `?a=b&c=d` string, leaving the other parameters where they were.
pub fn replace_query_param(search: &str, key: &str, value: &str) -> String {
    let replacement = format!("{}={}", encode_component(key), encode_component(value));
    let mut replaced = false;
    let mut out = Vec::new();
    for pair in pairs(search) {
        if key_of(pair) == key {
            if !replaced {
                out.push(replacement.clone());
                replaced = true;
            }
        } else {
            out.push(pair.to_string());
        }
    }
    if !replaced {
        out.push(replacement);
    }
    format!("?{}", out.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("alpha beta"), "alpha%20beta");
        assert_eq!(encode_component("a&b=c/d"), "a%26b%3Dc%2Fd");
        assert_eq!(encode_component("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_component("café"), "caf%C3%A9");
        assert_eq!(search_url("alpha beta"), "/search?q=alpha%20beta");
    }

    #[test]
    fn reads_params() {
        assert_eq!(query_param("?q=test", "q").as_deref(), Some("test"));
        assert_eq!(
            query_param("?page=2&q=alpha+beta%21", "q").as_deref(),
            Some("alpha beta!")
        );
        assert_eq!(query_param("?q=", "q").as_deref(), Some(""));
        assert_eq!(query_param("", "q"), None);
        assert_eq!(query_param("?query=x", "q"), None);
    }

    #[test]
    fn replaces_params_in_place() {
        assert_eq!(replace_query_param("", "q", "alpha beta"), "?q=alpha%20beta");
        assert_eq!(
            replace_query_param("?q=old&page=2", "q", "alpha beta"),
            "?q=alpha%20beta&page=2"
        );
        assert_eq!(
            replace_query_param("?page=2&q=a&q=b", "q", "new"),
            "?page=2&q=new"
        );
        assert_eq!(replace_query_param("?page=2", "q", "x"), "?page=2&q=x");
    }
}
