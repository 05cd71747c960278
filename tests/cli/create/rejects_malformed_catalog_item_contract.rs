use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_rejects_malformed_catalog_item_before_any_request() {
    let mut server = mockito::Server::new();
    let any_request = server.mock("GET", mockito::Matcher::Any).expect(0).create();
    let any_post = server.mock("POST", mockito::Matcher::Any).expect(0).create();
    let ctx = TestContext::new().with_api(&server);

    ctx.cli()
        .args([
            "create",
            "--customer-id",
            "customer-1",
            "--catalog-item-id",
            "prod1-sku1",
            "--country",
            "US",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed catalog item id 'prod1-sku1'"));

    any_request.assert();
    any_post.assert();
}
