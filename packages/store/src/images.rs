//! Hotel image URL normalisation.

/// Turn a raw image field into something an `<img>` can load.
///
/// Missing or blank values become `placeholder`. Absolute `http(s)` URLs are
/// kept as they are. Anything else is a path on the API host.
pub fn resolve_image_url(raw: Option<&str>, base_url: &str, placeholder: &str) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return placeholder.to_string();
    };

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    let path = collapse_slashes(raw.trim_start_matches('/'));
    if path.is_empty() {
        return placeholder.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }
    out
}
