use dealership::model::{order::OrderDto, user::UserDataDto, vehicle::VehicleDto};
use serde_json::json;

use super::*;

fn assert_json(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type()
        .is_some_and(|content_type| content_type.starts_with("application/json")));
}

mod get_data {
    use super::*;

    /// Expect every vehicle, including those out of stock
    #[tokio::test]
    async fn returns_vehicles() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_vehicle("Toyota", "Corolla", 2022, 2_199_900, 3)
            .with_vehicle("Honda", "Civic", 2021, 2_049_900, 0)
            .build()
            .await?;
        let mut client = test.client();

        let response = client.get("/get-data").await?;
        let vehicles: Vec<VehicleDto> = response.json()?;

        assert_json(&response);
        assert_eq!(vehicles.len(), 2);
        assert!(vehicles.iter().any(|vehicle| vehicle.model == "Civic"));

        Ok(())
    }

    /// Expect 200 with an empty list when the inventory cannot be loaded
    #[tokio::test]
    async fn returns_empty_list_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let mut client = test.client();

        let response = client.get("/get-data").await?;
        let vehicles: Vec<VehicleDto> = response.json()?;

        assert_json(&response);
        assert!(vehicles.is_empty());

        Ok(())
    }
}

mod get_order_data {
    use super::*;

    /// Expect orders together with the make and model of their vehicle
    #[tokio::test]
    async fn returns_orders() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_dealership_tables().build().await?;
        let user = test.user().insert_user("user1").await?;
        let vehicle = test
            .vehicle()
            .insert_vehicle("Toyota", "Corolla", 2022, 2_000_000, 5)
            .await?;
        test.order().insert_order(user.id, &vehicle, 2).await?;

        let mut client = test.client();

        let response = client.get("/get-order-data").await?;
        let orders: Vec<OrderDto> = response.json()?;

        assert_json(&response);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].make, "Toyota");
        assert_eq!(orders[0].total_cents, 4_000_000);

        Ok(())
    }

    /// Expect 200 with an empty list when the orders cannot be loaded
    #[tokio::test]
    async fn returns_empty_list_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let mut client = test.client();

        let response = client.get("/get-order-data").await?;
        let orders: Vec<OrderDto> = response.json()?;

        assert_json(&response);
        assert!(orders.is_empty());

        Ok(())
    }
}

mod get_user_data {
    use super::*;

    /// Expect profile, payment summary and orders of the signed-in user
    #[tokio::test]
    async fn returns_signed_in_user_data() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_dealership_tables().build().await?;
        let user = test.user().insert_user("user1").await?;
        test.payment().insert_payment(user.id, "4242").await?;
        let vehicle = test
            .vehicle()
            .insert_vehicle("Toyota", "Corolla", 2022, 2_000_000, 5)
            .await?;
        test.order().insert_order(user.id, &vehicle, 1).await?;

        let mut client = test.client();
        client.set_session_username("user1").await?;

        let response = client.get("/get-user-data").await?;
        let data: UserDataDto = response.json()?;

        assert_json(&response);
        assert_eq!(data.username, "user1");
        assert_eq!(data.email, "user1@example.com");
        assert_eq!(
            data.payment.map(|payment| payment.card_last_four),
            Some("4242".to_string())
        );
        assert_eq!(data.orders.len(), 1);

        Ok(())
    }

    /// Expect only the username when the data cannot be loaded
    #[tokio::test]
    async fn returns_default_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let response = client.get("/get-user-data").await?;
        let data: UserDataDto = response.json()?;

        assert_json(&response);
        assert_eq!(
            data,
            UserDataDto {
                username: "user1".to_string(),
                ..Default::default()
            }
        );

        Ok(())
    }
}

mod lookup_user_data {
    use super::*;

    /// Expect the admin to look up another user
    #[tokio::test]
    async fn admin_looks_up_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_json("/get-user-data", &json!({ "username": "user1" }))
            .await?;
        let data: UserDataDto = response.json()?;

        assert_json(&response);
        assert_eq!(data.username, "user1");

        Ok(())
    }

    /// Expect 200 with a no-permission error for other users
    #[tokio::test]
    async fn denies_regular_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .with_user("user2")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let response = client
            .post_json("/get-user-data", &json!({ "username": "user2" }))
            .await?;
        let body: serde_json::Value = response.json()?;

        assert_json(&response);
        assert!(body["error"]
            .as_str()
            .is_some_and(|error| error.contains("no permission")));

        Ok(())
    }

    /// Expect 404 for a username without an account
    #[tokio::test]
    async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_json("/get-user-data", &json!({ "username": "nobody" }))
            .await?;

        assert_eq!(response.status, StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect anonymous requests to be redirected even when the body is not JSON
    #[tokio::test]
    async fn redirects_anonymous_request_before_reading_body() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        let response = client.post_form("/get-user-data", &[]).await?;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/sign-in"));

        Ok(())
    }

    /// Expect the admin to get the JSON rejection for a body that is not JSON
    #[tokio::test]
    async fn rejects_non_json_body_from_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form("/get-user-data", &[("username", "user1")])
            .await?;

        assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        Ok(())
    }
}
