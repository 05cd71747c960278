use crate::harness::TestContext;
use crate::harness::partner_api::{mock_cart_created, mock_scope_sku};

#[test]
fn create_json_prints_preview_and_result_as_json_lines() {
    let mut server = mockito::Server::new();
    let _sku = mock_scope_sku(&mut server).create();
    let _cart = mock_cart_created(&mut server).create();
    let ctx = TestContext::new().with_api(&server);

    let output = ctx.create_with_flags(&["--scope", "rg1", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let documents: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("every stdout line should be JSON"))
        .collect();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["lineItems"][0]["billingCycle"], "monthly");
    assert_eq!(documents[0]["lineItems"][0]["provisioningContext"]["scope"], "rg1");
    assert_eq!(documents[1]["id"], "cart-1");
    assert_eq!(documents[1]["status"], "Active");
}
