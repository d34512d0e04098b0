use terminal::api::ApiClient;
use url::Url;

fn client() -> ApiClient {
    ApiClient::new(Url::parse("http://localhost:8080/room7").unwrap())
}

#[test]
fn move_path_composes_index_and_credentials() {
    // Relative resolution drops the match segment, exactly like the
    // browser original resolving `./4/abc123` from the match page.
    let url = client().move_url(4, "abc123").unwrap();
    assert_eq!(url.path(), "/4/abc123");
    assert_eq!(url.host_str(), Some("localhost"));
}

#[test]
fn rematch_path_carries_credentials() {
    let url = client().rematch_url("abc123").unwrap();
    assert_eq!(url.path(), "/rematch/abc123");
}

#[test]
fn events_path_points_at_the_push_stream() {
    let url = client().events_url().unwrap();
    assert_eq!(url.path(), "/events");
}
