use crate::helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_report_liveness() {
    let ctx = TestContext::with_audio(vec![]).await;

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_report_readiness_with_provider_name() {
    let ctx = TestContext::with_audio(vec![]).await;

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().expect("expected JSON body");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["tts"], "google");
}
