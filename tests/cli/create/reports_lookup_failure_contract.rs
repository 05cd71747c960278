use crate::harness::TestContext;
use crate::harness::partner_api::{CARTS_PATH, SKU_PATH};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn create_reports_lookup_failure_and_skips_submission() {
    let mut server = mockito::Server::new();
    let _sku = server
        .mock("GET", SKU_PATH)
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":600008,"description":"The requested SKU was not found."}"#)
        .create();
    let cart = server.mock("POST", CARTS_PATH).expect(0).create();
    let ctx = TestContext::new().with_api(&server);

    ctx.create_with_flags(&[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKU lookup failed: The requested SKU was not found."))
        .stderr(predicate::str::contains("(HTTP 404)"));

    cart.assert();
}
