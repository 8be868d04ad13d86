//! UniProtKB endpoint URL builders

/// Query parameter asking the service for JSON
pub const FORMAT_JSON: (&str, &str) = ("format", "json");

/// Build the UniProtKB base URL
pub fn uniprotkb_url(service_root: &str) -> String {
    format!("{}/uniprotkb", service_root.trim_end_matches('/'))
}

/// Build the entry URL for an accession
pub fn entry_url(service_root: &str, accession: &str) -> String {
    format!(
        "{}/{}",
        uniprotkb_url(service_root),
        urlencoding::encode(accession.trim())
    )
}

/// Build the stream (search) URL
pub fn stream_url(service_root: &str) -> String {
    format!("{}/stream", uniprotkb_url(service_root))
}
