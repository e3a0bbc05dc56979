//! Tests for source collection and line normalization.

use std::collections::HashMap;
use std::io::Write;

use super::collector::{SourceCollector, normalize_lines};
use super::error::SourceError;
use super::fetch::{Fetch, FetchedBody};

/// Mock fetcher serving canned bodies by URL.
struct MockFetcher {
    bodies: HashMap<String, (http::StatusCode, String)>,
}

impl MockFetcher {
    fn with_body(url: &str, body: &str) -> Self {
        Self::with_status(url, http::StatusCode::OK, body)
    }

    fn with_status(url: &str, status: http::StatusCode, body: &str) -> Self {
        let mut bodies = HashMap::new();
        bodies.insert(url.to_string(), (status, body.to_string()));
        Self { bodies }
    }
}

impl Fetch for MockFetcher {
    async fn fetch_text(&self, url: &url::Url) -> Result<FetchedBody, SourceError> {
        self.bodies.get(url.as_str()).map_or_else(
            || {
                Err(SourceError::Connection {
                    url: url.to_string(),
                    source: "connection refused".into(),
                })
            },
            |(status, body)| {
                Ok(FetchedBody {
                    status: *status,
                    body: body.clone(),
                })
            },
        )
    }
}

fn collector(fetcher: MockFetcher) -> SourceCollector<MockFetcher> {
    SourceCollector::new(fetcher)
}

mod normalization {
    use super::*;

    #[test]
    fn strips_whitespace_comments_and_empties() {
        let input = "  192.168.1.1  \n# full comment\n10.0.0.0/24 # inline\n\n";
        assert_eq!(normalize_lines(input), vec!["192.168.1.1", "10.0.0.0/24"]);
    }

    #[test]
    fn drops_lines_that_are_only_an_inline_comment() {
        assert_eq!(normalize_lines("   # nothing here\n"), Vec::<String>::new());
    }

    #[test]
    fn preserves_surviving_line_order() {
        let input = "3.3.3.3\n1.1.1.1\n2.2.2.2\n";
        assert_eq!(normalize_lines(input), vec!["3.3.3.3", "1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(normalize_lines(""), Vec::<String>::new());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let input = "1.1.1.1\r\n2.2.2.2\r\n";
        assert_eq!(normalize_lines(input), vec!["1.1.1.1", "2.2.2.2"]);
    }
}

mod static_sources {
    use super::*;

    #[test]
    fn returns_configured_addresses_verbatim() {
        let collector = collector(MockFetcher {
            bodies: HashMap::new(),
        });
        let addresses = vec!["8.8.8.8".to_string(), " 1.1.1.1 ".to_string()];

        assert_eq!(collector.from_static(&addresses), addresses);
    }
}

mod file_sources {
    use super::*;

    #[tokio::test]
    async fn reads_and_normalizes_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header\n10.0.0.1\n10.0.0.2 # gateway").unwrap();

        let collector = collector(MockFetcher {
            bodies: HashMap::new(),
        });
        let addresses = collector
            .from_file(file.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(addresses, vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let collector = collector(MockFetcher {
            bodies: HashMap::new(),
        });

        let err = collector
            .from_file("/nonexistent/addresses.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::File { .. }));
    }
}

mod url_sources {
    use super::*;

    #[tokio::test]
    async fn fetches_and_normalizes_body() {
        let collector = collector(MockFetcher::with_body(
            "https://example.com/list.txt",
            "# remote list\n203.0.113.1\n203.0.113.2\n",
        ));

        let addresses = collector
            .from_url("https://example.com/list.txt")
            .await
            .unwrap();
        assert_eq!(addresses, vec!["203.0.113.1", "203.0.113.2"]);
    }

    #[tokio::test]
    async fn transport_failure_is_unavailable() {
        let collector = collector(MockFetcher {
            bodies: HashMap::new(),
        });

        let err = collector
            .from_url("https://unreachable.example.com/list.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Connection { .. }));
    }

    #[tokio::test]
    async fn error_status_body_is_still_scanned() {
        // Only transport errors fail a fetch; a 404 body is line-scanned
        // like any other.
        let collector = collector(MockFetcher::with_status(
            "https://example.com/gone.txt",
            http::StatusCode::NOT_FOUND,
            "198.51.100.1\n",
        ));

        let addresses = collector
            .from_url("https://example.com/gone.txt")
            .await
            .unwrap();
        assert_eq!(addresses, vec!["198.51.100.1"]);
    }

    #[tokio::test]
    async fn unparseable_url_is_rejected() {
        let collector = collector(MockFetcher {
            bodies: HashMap::new(),
        });

        let err = collector.from_url("not a url").await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidUrl { .. }));
    }
}
