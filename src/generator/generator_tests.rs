//! Tests for the generation orchestrator.

use std::collections::HashMap;
use std::sync::Arc;

use super::{GenerateError, Generator};
use crate::config::{ValidatedConfig, YamlConfig};
use crate::source::{Fetch, FetchedBody, SourceError};

struct MapFetcher {
    bodies: HashMap<String, String>,
}

impl MapFetcher {
    fn empty() -> Self {
        Self {
            bodies: HashMap::new(),
        }
    }
}

impl Fetch for MapFetcher {
    async fn fetch_text(&self, url: &url::Url) -> Result<FetchedBody, SourceError> {
        self.bodies.get(url.as_str()).map_or_else(
            || {
                Err(SourceError::Connection {
                    url: url.to_string(),
                    source: "connection refused".into(),
                })
            },
            |body| {
                Ok(FetchedBody {
                    status: http::StatusCode::OK,
                    body: body.clone(),
                })
            },
        )
    }
}

fn generator(yaml: &str, fetcher: MapFetcher) -> Generator<MapFetcher> {
    let config = ValidatedConfig::from_raw(YamlConfig::parse(yaml).unwrap()).unwrap();
    Generator::new(Arc::new(config), fetcher)
}

#[tokio::test]
async fn generates_script_for_named_list() {
    let generator = generator(
        r#"
config:
  timeout: 4h
  commentPrefix: managed
lists:
  lan:
    addresses: [192.168.1.0/24]
"#,
        MapFetcher::empty(),
    );

    let script = generator.generate_list("lan").await.unwrap();

    assert!(script.contains(r#"/ip/firewall/address-list/remove [ find where list="lan" ];"#));
    assert!(script.contains(r#":$lanAddIP "192.168.1.0/24" "managed" "4h""#));
}

#[tokio::test]
async fn unknown_list_is_not_found() {
    let generator = generator(
        r"
config:
  timeout: 4h
lists:
  lan:
    addresses: [192.168.1.0/24]
",
        MapFetcher::empty(),
    );

    let err = generator.generate_list("missing").await.unwrap_err();
    assert!(matches!(err, GenerateError::NotFound { name } if name == "missing"));
}

#[tokio::test]
async fn source_failure_surfaces_with_list_context() {
    let generator = generator(
        r"
config:
  timeout: 4h
lists:
  remote:
    urls: [https://unreachable.example.com/list.txt]
",
        MapFetcher::empty(),
    );

    let err = generator.generate_list("remote").await.unwrap_err();
    assert!(matches!(err, GenerateError::Source { name, .. } if name == "remote"));
}

#[tokio::test]
async fn generate_all_is_lexicographic_and_stable() {
    let yaml = r"
config:
  timeout: 4h
lists:
  list2:
    addresses: [10.0.0.0/8]
  list1:
    addresses: [192.168.1.0/24]
";
    let generator = generator(yaml, MapFetcher::empty());

    let report = generator.generate_all().await;
    assert!(report.is_complete());

    let names: Vec<_> = report.scripts.keys().cloned().collect();
    assert_eq!(names, vec!["list1", "list2"]);
    assert!(report.scripts["list1"].contains("192.168.1.0/24"));
    assert!(report.scripts["list2"].contains("10.0.0.0/8"));

    // Repeated runs produce identical output.
    let again = generator.generate_all().await;
    assert_eq!(report.concatenated(), again.concatenated());
}

#[tokio::test]
async fn generate_all_reports_failures_per_list() {
    let generator = generator(
        r"
config:
  timeout: 4h
lists:
  good:
    addresses: [8.8.8.8]
  bad:
    urls: [https://unreachable.example.com/list.txt]
",
        MapFetcher::empty(),
    );

    let report = generator.generate_all().await;

    assert!(!report.is_complete());
    assert!(report.scripts.contains_key("good"));
    assert!(matches!(
        report.failures.get("bad"),
        Some(GenerateError::Source { .. })
    ));

    // Strict view picks the failure over the partial result.
    assert!(report.into_strict().is_err());
}

#[tokio::test]
async fn concatenated_output_joins_scripts() {
    let generator = generator(
        r"
config:
  timeout: 4h
lists:
  a:
    addresses: [1.1.1.1]
  b:
    addresses: [2.2.2.2]
",
        MapFetcher::empty(),
    );

    let combined = generator.generate_all().await.concatenated();

    let a_pos = combined.find("list=\"a\"").unwrap();
    let b_pos = combined.find("list=\"b\"").unwrap();
    assert!(a_pos < b_pos);
}
