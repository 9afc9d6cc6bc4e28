mod common;

use cors_policy_rs::constants::header;
use cors_policy_rs::{AllowedHeaders, BoxError, Origin};
use common::asserts::{assert_preflight, assert_simple};
use common::builders::{cors, preflight_request, simple_request};
use common::headers::header_value;
use futures::FutureExt;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cors_can_be_shared_across_tasks() {
    let cors = Arc::new(
        cors()
            .origin(Origin::custom(|request_origin| {
                let allowed = request_origin.is_some_and(|origin| origin.ends_with(".example"));
                async move { Ok::<_, BoxError>(Origin::Bool(allowed)) }.boxed()
            }))
            .credentials(true)
            .allowed_headers(AllowedHeaders::list(["X-Thread"]))
            .build(),
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let cors = Arc::clone(&cors);
        handles.push(tokio::spawn(async move {
            let origin = format!("https://thread{}.example", i);
            let (headers, _, _) = assert_preflight(
                preflight_request()
                    .origin(origin.as_str())
                    .request_headers("X-Thread")
                    .check(&cors)
                    .await,
            );

            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
                Some("X-Thread"),
            );

            let simple_headers =
                assert_simple(simple_request().origin(origin.as_str()).check(&cors).await);
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );
        }));
    }

    for handle in handles {
        handle.await.expect("task panic");
    }
}
