//! 查询测试：查询串编码、流式取回、`exist:result` 统计信息解析。

use httpmock::prelude::*;

use crate::ExistError;
use crate::query::{QueryOptions, QueryResult};
use crate::tests::mock_connection;

const WRAPPED: &str = r#"<exist:result xmlns:exist="http://exist.sourceforge.net/NS/exist" exist:hits="42" exist:start="1" exist:count="2" exist:session="7">
    <item>1</item>
    <item>2</item>
</exist:result>"#;

#[tokio::test]
async fn query_string_encodes_text_and_options() {
    let server = MockServer::start_async().await;
    let query = mock_connection(&server).query(
        "for $i in 1 to 3 return $i",
        QueryOptions::default()
            .with_start(11)
            .with_how_many(5)
            .with_wrap(false)
            .with_cache(true)
            .with_session("abc"),
    );

    assert_eq!(
        query.query_string(),
        "?_query=for%20%24i%20in%201%20to%203%20return%20%24i\
         &_start=11&_howmany=5&_wrap=no&_indent=yes&_cache=yes&_session=abc"
    );
    assert_eq!(
        query.request().unwrap().url.path(),
        "/exist/rest/db"
    );
}

#[tokio::test]
async fn execute_parses_result_summary() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/exist/rest/db/apps")
                .query_param("_query", "count(//item)")
                .query_param("_howmany", "10")
                .query_param("_wrap", "yes");
            then.status(200).body(WRAPPED);
        })
        .await;

    let result = mock_connection(&server)
        .query(
            "count(//item)",
            QueryOptions::default().with_collection("/db/apps"),
        )
        .execute()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.hits, Some(42));
    assert_eq!(result.start, Some(1));
    assert_eq!(result.count, Some(2));
    assert_eq!(result.session.as_deref(), Some("7"));
    assert_eq!(result.body, WRAPPED);
}

#[tokio::test]
async fn query_error_status_propagates() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/exist/rest/db");
            then.status(400).body("<exception>syntax error</exception>");
        })
        .await;

    let err = mock_connection(&server)
        .query("for $", QueryOptions::default())
        .execute()
        .await
        .unwrap_err();

    assert!(matches!(err, ExistError::Status { status: 400 }));
}

#[test]
fn unwrapped_result_has_no_summary() {
    let result = QueryResult::parse("<item>1</item>".to_string()).unwrap();
    assert_eq!(result.hits, None);
    assert_eq!(result.count, None);

    let result = QueryResult::parse("3".to_string()).unwrap();
    assert_eq!(result.body, "3");
    assert_eq!(result.session, None);
}

#[test]
fn empty_wrapped_result() {
    let body = r#"<exist:result xmlns:exist="http://exist.sourceforge.net/NS/exist" exist:hits="0" exist:start="1" exist:count="0"/>"#;
    let result = QueryResult::parse(body.to_string()).unwrap();

    assert_eq!(result.hits, Some(0));
    assert_eq!(result.count, Some(0));
}
