use crate::harness::TestContext;
use crate::harness::partner_api::{mock_cart_created, mock_scope_sku};
use predicates::prelude::*;

#[test]
fn create_reads_api_url_from_local_config_file() {
    let mut server = mockito::Server::new();
    let sku = mock_scope_sku(&mut server).expect(1).create();
    let _cart = mock_cart_created(&mut server).create();
    let ctx = TestContext::new();
    ctx.write_config(&format!("[api]\napi_url = \"{}/v1/\"\ntimeout_secs = 5\n", server.url()));

    ctx.create_with_flags(&["--scope", "rg1"]).assert().success();

    sku.assert();
}

#[test]
fn create_rejects_invalid_config_file() {
    let ctx = TestContext::new();
    let path = ctx.write_config("[api]\ntimeout_secs = 0\n");

    ctx.cli()
        .args(["--config", path.to_str().unwrap(), "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs must be greater than 0"));
}

#[test]
fn create_rejects_missing_explicit_config() {
    let ctx = TestContext::new();
    let missing = ctx.work_dir().join("nope.toml");

    ctx.cli()
        .args(["create", "--config", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
