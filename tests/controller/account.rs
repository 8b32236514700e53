use super::*;

mod access {
    use super::*;

    /// Expect 302 to the sign-in page for anonymous requests to signed-in pages
    #[tokio::test]
    async fn redirects_anonymous_visitors_to_sign_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        for path in ["/purchase", "/update-payment", "/get-user-data"] {
            let response = client.get(path).await?;

            assert_eq!(response.status, StatusCode::FOUND, "GET {path}");
            assert!(
                response
                    .location()
                    .is_some_and(|location| location.contains("/sign-in")),
                "GET {path}"
            );
        }

        let response = client
            .post_form("/purchase", &[("vehicle-id", "1"), ("quantity", "1")])
            .await?;
        assert_eq!(response.status, StatusCode::FOUND);

        Ok(())
    }

    /// Expect the purchase and payment pages to render for a signed-in user
    #[tokio::test]
    async fn renders_pages_for_signed_in_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let purchase = client.get("/purchase").await?;
        let payment = client.get("/update-payment").await?;

        assert_eq!(purchase.status, StatusCode::OK);
        assert!(purchase.text().contains("Purchase a Vehicle"));
        assert_eq!(payment.status, StatusCode::OK);
        assert!(payment.text().contains("Payment"));

        Ok(())
    }
}

mod purchase {
    use super::*;

    /// Expect a confirmation and the stock to go down after a purchase
    #[tokio::test]
    async fn places_order() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let vehicle = test
            .vehicle()
            .insert_vehicle("Toyota", "Corolla", 2022, 2_000_000, 3)
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let vehicle_id = vehicle.id.to_string();
        let response = client
            .post_form(
                "/purchase",
                &[("vehicle-id", vehicle_id.as_str()), ("quantity", "2")],
            )
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("2 x Toyota Corolla for $40,000.00"));
        assert!(body.contains("1 left"));

        Ok(())
    }

    /// Expect an in-band error when more units are requested than are in stock
    #[tokio::test]
    async fn reports_insufficient_stock() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let vehicle = test
            .vehicle()
            .insert_vehicle("Toyota", "Corolla", 2022, 2_000_000, 1)
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let vehicle_id = vehicle.id.to_string();
        let response = client
            .post_form(
                "/purchase",
                &[("vehicle-id", vehicle_id.as_str()), ("quantity", "3")],
            )
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response
            .text()
            .contains("Only 1 of that vehicle left in stock, 3 requested."));

        Ok(())
    }

    /// Expect an in-band error for an empty form
    #[tokio::test]
    async fn reports_missing_vehicle() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let response = client.post_form("/purchase", &[]).await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("Please choose a vehicle to purchase."));

        Ok(())
    }
}

mod update_payment {
    use super::*;

    /// Expect the stored card to be shown by its last four digits only
    #[tokio::test]
    async fn saves_payment_details() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let response = client
            .post_form(
                "/update-payment",
                &[
                    ("card-holder", "Test User"),
                    ("card-number", "4111 1111 1111 1234"),
                    ("card-expiry", "09/29"),
                    ("mailing-address", "1 Main Street"),
                ],
            )
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("Card on file ending in 1234, expires 09/29."));
        assert!(!body.contains("4111"));

        Ok(())
    }

    /// Expect an in-band error for a malformed card number
    #[tokio::test]
    async fn rejects_invalid_card_number() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        let response = client
            .post_form(
                "/update-payment",
                &[
                    ("card-holder", "Test User"),
                    ("card-number", "1234"),
                    ("card-expiry", "09/29"),
                    ("mailing-address", "1 Main Street"),
                ],
            )
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("Card numbers must be 12 to 19 digits."));

        Ok(())
    }
}
