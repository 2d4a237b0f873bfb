//! HTTP span helpers.

use larder_app::domain::short_links::links::is_well_formed_token;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replace identifiers with placeholders so span names and metric labels stay bounded.
fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let mut normalised = String::new();
    let mut previous = "";

    for segment in segments {
        normalised.push('/');

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else if previous == "s" && is_well_formed_token(segment) {
            normalised.push_str("{token}");
        } else {
            normalised.push_str(segment);
        }

        previous = segment;
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_are_replaced() {
        let names = request_span_name(
            "DELETE",
            "/api/recipes/0190f5e4-7c1a-7b2e-9a3b-1c2d3e4f5a6b/favorite",
        );

        assert_eq!(names.otel_path, "/api/recipes/{uuid}/favorite");
        assert_eq!(names.otel_span_name, "DELETE /api/recipes/{uuid}/favorite");
    }

    #[test]
    fn short_link_tokens_are_replaced() {
        assert_eq!(request_span_name("GET", "/s/AbCdEfG").otel_path, "/s/{token}");
    }

    #[test]
    fn literal_segments_are_kept() {
        assert_eq!(
            request_span_name("GET", "/api/recipes/download_shopping_cart").otel_path,
            "/api/recipes/download_shopping_cart"
        );
        assert_eq!(request_span_name("GET", "/").otel_path, "/");
    }
}
