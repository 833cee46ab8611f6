//! 删除测试：整体返回响应体、默认不校验状态码、可选严格策略。

use httpmock::prelude::*;

use crate::config::StatusPolicy;
use crate::tests::{GUEST_AUTHORIZATION, mock_config, mock_connection, refused_connection};
use crate::{Connection, ExistError};

#[tokio::test]
async fn delete_returns_whole_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/exist/rest/db/test.xml")
                .header("authorization", GUEST_AUTHORIZATION);
            then.status(200).body("<deleted/>");
        })
        .await;

    let body = mock_connection(&server).del("/db/test.xml").await.unwrap();

    mock.assert_async().await;
    assert_eq!(body, "<deleted/>");
}

#[tokio::test]
async fn delete_does_not_send_get_suffix() {
    let server = MockServer::start_async().await;
    let with_suffix = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/exist/rest/db/test.xml")
                .query_param_exists("_xsl");
            then.status(500);
        })
        .await;
    let plain = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/exist/rest/db/test.xml");
            then.status(200);
        })
        .await;

    mock_connection(&server).del("/db/test.xml").await.unwrap();

    with_suffix.assert_hits_async(0).await;
    plain.assert_hits_async(1).await;
}

#[tokio::test]
async fn delete_passes_through_404_by_default() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/exist/rest/db/missing.xml");
            then.status(404).body("Document /db/missing.xml not found");
        })
        .await;

    let body = mock_connection(&server).del("/db/missing.xml").await.unwrap();

    assert_eq!(body, "Document /db/missing.xml not found");
}

#[tokio::test]
async fn delete_require_success_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/exist/rest/db/missing.xml");
            then.status(404);
        })
        .await;

    let config =
        mock_config(&server).with_delete_status_policy(StatusPolicy::RequireSuccess);
    let err = Connection::new(config)
        .unwrap()
        .del("/db/missing.xml")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn delete_transport_error() {
    let err = refused_connection().del("/db/test.xml").await.unwrap_err();

    assert!(matches!(err, ExistError::Transport(_)));
}
