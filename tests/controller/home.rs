use super::*;

/// Expect 200 for every page that is open to anonymous visitors
#[tokio::test]
async fn public_pages_are_open_to_anonymous_visitors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_dealership_tables().build().await?;
    let mut client = test.client();

    for path in ["/", "/sign-in", "/sign-up", "/forgot-password"] {
        let response = client.get(path).await?;

        assert_eq!(response.status, StatusCode::OK, "GET {path}");
        assert!(response.text().starts_with("<!DOCTYPE html>"), "GET {path}");
    }

    Ok(())
}

/// Expect the home page to list vehicles in stock only
#[tokio::test]
async fn home_lists_vehicles_in_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .with_vehicle("Toyota", "Corolla", 2022, 2_199_900, 3)
        .with_vehicle("Honda", "Civic", 2021, 2_049_900, 0)
        .build()
        .await?;
    let mut client = test.client();

    let response = client.get("/").await?;
    let body = response.text();

    assert_eq!(response.status, StatusCode::OK);
    assert!(body.contains("2022 Toyota Corolla"));
    assert!(body.contains("$21,999.00"));
    assert!(!body.contains("Civic"));

    Ok(())
}

/// Expect the home page to stay available without a database schema
#[tokio::test]
async fn home_renders_when_inventory_is_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut client = test.client();

    let response = client.get("/").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("temporarily unavailable"));

    Ok(())
}

/// Expect the navbar to greet a signed-in user and hide the admin links
#[tokio::test]
async fn navbar_reflects_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .with_user("user1")
        .build()
        .await?;
    let mut client = test.client();
    client.set_session_username("user1").await?;

    let body = client.get("/").await?.text();

    assert!(body.contains("Signed in as user1"));
    assert!(body.contains("/logout"));
    assert!(!body.contains("/sales-report"));

    Ok(())
}

/// Expect the OpenAPI document of the JSON endpoints to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut client = test.client();

    let response = client.get("/api/docs/openapi.json").await?;
    let document: serde_json::Value = response.json()?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(document["paths"]["/get-data"].is_object());
    assert!(document["paths"]["/get-order-data"].is_object());
    assert!(document["paths"]["/get-user-data"]["post"].is_object());

    Ok(())
}
