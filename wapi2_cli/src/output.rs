use serde_json::Value;
use wapi2_api::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// Indented JSON.
    Pretty,
    /// One JSON document per line.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Pretty,
        }
    }
}

pub fn render_json(data: &Value, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json => data.to_string(),
        OutputFormat::Pretty => {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
        }
    }
}

pub fn print_json(data: &Value, format: &OutputFormat) {
    println!("{}", render_json(data, format));
}

/// First line of an API error report.
pub fn format_api_error(err: &Error) -> String {
    let kind = if err.is_validation_error() {
        " (validation)"
    } else if err.is_authentication_error() {
        " (authentication)"
    } else {
        ""
    };
    format!("error [code {}]{}: {}", err.code(), kind, err.message())
}

/// Reports an API error on stderr, followed by the server's error body if there is one.
pub fn print_api_error(err: &Error) {
    eprintln!("{}", format_api_error(err));
    if let Some(data) = err.error_data() {
        eprintln!("{}", render_json(data, &OutputFormat::Pretty));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wapi2_api::ErrorCode;

    #[test]
    fn parse_output_format() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("pretty"), OutputFormat::Pretty);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Pretty);
    }

    #[test]
    fn compact_json_is_single_line() {
        let out = render_json(&json!({"status": "success", "data": [1]}), &OutputFormat::Json);
        assert_eq!(out, r#"{"data":[1],"status":"success"}"#);
    }

    #[test]
    fn pretty_json_is_indented() {
        let out = render_json(&json!({"status": "success"}), &OutputFormat::Pretty);
        assert_eq!(out, "{\n  \"status\": \"success\"\n}");
    }

    #[test]
    fn api_error_line_for_validation() {
        let err = Error::from(ErrorCode::CaptionLength);
        assert_eq!(
            format_api_error(&err),
            "error [code 1003] (validation): Caption exceeds the maximum length of 1024 characters"
        );
    }

    #[test]
    fn api_error_line_for_authentication() {
        let err = Error::with_code(1006, None, None);
        assert_eq!(
            format_api_error(&err),
            "error [code 1006] (authentication): The session is invalid or has expired"
        );
    }

    #[test]
    fn api_error_line_for_transport() {
        let err = Error::new("Request error: Connection timeout", 0);
        assert_eq!(
            format_api_error(&err),
            "error [code 0]: Request error: Connection timeout"
        );
    }
}
