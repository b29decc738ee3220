use std::collections::HashMap;

/// Read access to the session cookies.
pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;
}

impl CookieStore for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Cookies parsed from a `Cookie` request header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    /// Parses `name=value; other=value`. One pair of surrounding quotes is dropped and
    /// each run of `%xx` escapes is decoded on its own; a run that is not UTF-8 stays
    /// as sent. The first occurrence of a name wins.
    pub fn parse(header: &str) -> Self {
        let mut cookies = HashMap::new();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = decode_cookie_value(unquote(value.trim()));
            cookies.entry(name.to_string()).or_insert(value);
        }
        Self { cookies }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

/// `"abc"` -> `abc`. A leading quote also drops the last character, whatever it is.
fn unquote(value: &str) -> &str {
    match value.strip_prefix('"') {
        Some(rest) => {
            let mut chars = rest.chars();
            chars.next_back();
            chars.as_str()
        }
        None => value,
    }
}

fn is_escape_at(bytes: &[u8], at: usize) -> bool {
    at + 2 < bytes.len()
        && bytes[at] == b'%'
        && bytes[at + 1].is_ascii_hexdigit()
        && bytes[at + 2].is_ascii_hexdigit()
}

fn decode_cookie_value(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = String::with_capacity(value.len());
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !is_escape_at(bytes, i) {
            i += 1;
            continue;
        }
        let mut end = i;
        while is_escape_at(bytes, end) {
            end += 3;
        }
        decoded.push_str(&value[plain_start..i]);
        let run = &value[i..end];
        match urlencoding::decode(run) {
            Ok(text) => decoded.push_str(&text),
            Err(_) => decoded.push_str(run),
        }
        plain_start = end;
        i = end;
    }

    decoded.push_str(&value[plain_start..]);
    decoded
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}

impl From<HashMap<String, String>> for CookieJar {
    fn from(cookies: HashMap<String, String>) -> Self {
        Self { cookies }
    }
}
