use crate::harness::TestContext;
use crate::harness::partner_api::{CARTS_PATH, mock_scope_sku};
use predicates::prelude::*;

#[test]
fn create_reports_submission_failure_once() {
    let mut server = mockito::Server::new();
    let _sku = mock_scope_sku(&mut server).create();
    let cart = server
        .mock("POST", CARTS_PATH)
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"description":"Upstream order service unavailable"}"#)
        .expect(1)
        .create();
    let ctx = TestContext::new().with_api(&server);

    ctx.create_with_flags(&["--scope", "rg1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Cart to be created:"))
        .stdout(predicate::str::contains("Created cart:").not())
        .stderr(predicate::str::contains(
            "Cart submission failed: Upstream order service unavailable",
        ));

    cart.assert();
}
