use super::*;

const ADMIN_PAGES: [&str; 3] = ["/sales-report", "/vehicle-inventory", "/update-user"];

mod access {
    use super::*;

    /// Expect 200 with a no-permission message for a signed-in user other than the admin
    #[tokio::test]
    async fn shows_no_permission_to_regular_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        for path in ADMIN_PAGES {
            let response = client.get(path).await?;

            assert_eq!(response.status, StatusCode::OK, "GET {path}");
            assert!(response.text().contains("no permission"), "GET {path}");
        }

        let response = client
            .post_form("/update-user/delete", &[("username", "user1")])
            .await?;
        assert!(response.text().contains("no permission"));

        Ok(())
    }

    /// Expect the admin pages to render for the admin
    #[tokio::test]
    async fn renders_pages_for_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        for path in ADMIN_PAGES {
            let response = client.get(path).await?;

            assert_eq!(response.status, StatusCode::OK, "GET {path}");
            assert!(!response.text().contains("no permission"), "GET {path}");
        }

        Ok(())
    }

    /// Expect the admin name to match exactly
    #[tokio::test]
    async fn admin_name_is_case_sensitive() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username("admin").await?;

        let response = client.get("/sales-report").await?;

        assert!(response.text().contains("no permission"));

        Ok(())
    }

    /// Expect anonymous requests to redirect to the sign-in page
    #[tokio::test]
    async fn redirects_anonymous_visitors() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        for path in ADMIN_PAGES {
            let response = client.get(path).await?;

            assert_eq!(response.status, StatusCode::FOUND, "GET {path}");
            assert_eq!(response.location(), Some("/sign-in"), "GET {path}");
        }

        Ok(())
    }
}

mod sales_report {
    use super::*;

    /// Expect units and revenue per vehicle with the overall totals
    #[tokio::test]
    async fn shows_sales_per_vehicle() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_dealership_tables().build().await?;
        let user = test.user().insert_user("user1").await?;
        let vehicle = test
            .vehicle()
            .insert_vehicle("Toyota", "Corolla", 2022, 2_000_000, 5)
            .await?;
        test.order().insert_order(user.id, &vehicle, 2).await?;
        test.order().insert_order(user.id, &vehicle, 1).await?;

        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let body = client.get("/sales-report").await?.text();

        assert!(body.contains("2022 Toyota Corolla"));
        assert!(body.contains("$60,000.00"));

        Ok(())
    }
}

mod vehicle_inventory {
    use super::*;

    /// Expect a new vehicle to appear in the inventory table
    #[tokio::test]
    async fn adds_vehicle() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form(
                "/vehicle-inventory",
                &[
                    ("make", "Mazda"),
                    ("model", "MX-5"),
                    ("year", "2023"),
                    ("price", "$29,500.00"),
                    ("stock", "4"),
                ],
            )
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("Added 2023 Mazda MX-5 with 4 in stock."));
        assert!(body.contains("$29,500.00"));

        Ok(())
    }

    /// Expect an in-band error for a price that does not parse
    #[tokio::test]
    async fn rejects_invalid_price() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form(
                "/vehicle-inventory",
                &[
                    ("make", "Mazda"),
                    ("model", "MX-5"),
                    ("year", "2023"),
                    ("price", "cheap"),
                    ("stock", "4"),
                ],
            )
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(!response.text().contains("Added 2023 Mazda MX-5"));

        Ok(())
    }

    /// Expect a price above the ceiling to be refused so order totals cannot overflow
    #[tokio::test]
    async fn rejects_price_above_ceiling() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form(
                "/vehicle-inventory",
                &[
                    ("make", "Bugatti"),
                    ("model", "Chiron"),
                    ("year", "2024"),
                    ("price", "90000000000000000"),
                    ("stock", "2"),
                ],
            )
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("must not exceed $100,000,000.00"));
        assert!(!body.contains("Added 2024 Bugatti Chiron"));

        Ok(())
    }

    /// Expect the stock level to be replaced and the price kept when left empty
    #[tokio::test]
    async fn restocks_vehicle() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_dealership_tables().build().await?;
        let vehicle = test
            .vehicle()
            .insert_vehicle("Toyota", "Corolla", 2022, 2_000_000, 0)
            .await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let vehicle_id = vehicle.id.to_string();
        let response = client
            .post_form(
                "/vehicle-inventory/restock",
                &[("vehicle-id", vehicle_id.as_str()), ("stock", "7"), ("price", "")],
            )
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("2022 Toyota Corolla now has 7 in stock."));
        assert!(body.contains("$20,000.00"));

        Ok(())
    }
}

mod update_user {
    use super::*;

    /// Expect the edited profile to be listed
    #[tokio::test]
    async fn updates_profile() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form(
                "/update-user",
                &[
                    ("username", "user1"),
                    ("first-name", "Renamed"),
                    ("last-name", "Person"),
                    ("email", "renamed@example.com"),
                ],
            )
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("Updated the profile of user1."));
        assert!(body.contains("renamed@example.com"));

        Ok(())
    }

    /// Expect a deleted user to lose access to their session
    #[tokio::test]
    async fn deletes_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form("/update-user/delete", &[("username", "user1")])
            .await?;
        let body = response.text();

        assert_eq!(response.status, StatusCode::OK);
        assert!(body.contains("Deleted the account of user1."));
        assert!(!body.contains("user1@example.com"));

        Ok(())
    }

    /// Expect the admin account to be protected from deletion
    #[tokio::test]
    async fn refuses_to_delete_admin() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user(ADMIN)
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username(ADMIN).await?;

        let response = client
            .post_form("/update-user/delete", &[("username", ADMIN)])
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response
            .text()
            .contains("The administrator account cannot be deleted."));

        Ok(())
    }
}
