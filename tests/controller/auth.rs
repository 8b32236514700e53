use super::*;

fn sign_up_fields<'a>(username: &'a str, email: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("first-name", "Jane"),
        ("last-name", "Doe"),
        ("username", username),
        ("email", email),
        ("password", "correct horse"),
    ]
}

mod sign_up {
    use super::*;

    /// Expect a redirect to the sign-in page, which then confirms the new account
    #[tokio::test]
    async fn creates_account_and_redirects_to_sign_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        let response = client
            .post_form("/sign-up", &sign_up_fields("jane", "jane@example.com"))
            .await?;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/sign-in"));

        let page = client.follow_redirects(response).await?;

        assert_eq!(page.status, StatusCode::OK);
        assert!(page.text().contains("Your account has been created"));

        // Notice is shown once
        let again = client.get("/sign-in").await?;
        assert!(!again.text().contains("Your account has been created"));

        Ok(())
    }

    /// Expect 200 with an error notice when the username is taken
    #[tokio::test]
    async fn rejects_taken_username() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("jane")
            .build()
            .await?;
        let mut client = test.client();

        let response = client
            .post_form("/sign-up", &sign_up_fields("jane", "other@example.com"))
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("That username is already taken."));

        Ok(())
    }

    /// Expect 200 with an error notice when the admin name is claimed in any casing
    #[tokio::test]
    async fn rejects_admin_username() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        let response = client
            .post_form("/sign-up", &sign_up_fields("admin", "admin@example.com"))
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("That username is already taken."));

        Ok(())
    }

    /// Expect 200 for missing fields, never a 4xx extractor rejection or a 500
    #[tokio::test]
    async fn handles_empty_form() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        let response = client.post_form("/sign-up", &[]).await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("Please fill in the"));

        Ok(())
    }

    /// Expect 200 with an unavailable notice when the database has no schema
    #[tokio::test]
    async fn does_not_fail_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let mut client = test.client();

        let response = client
            .post_form("/sign-up", &sign_up_fields("jane", "jane@example.com"))
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("temporarily unavailable"));

        Ok(())
    }
}

mod sign_in {
    use super::*;

    /// Expect a redirect home and access to protected pages after signing in
    #[tokio::test]
    async fn signs_in_with_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        client
            .post_form("/sign-up", &sign_up_fields("jane", "jane@example.com"))
            .await?;

        let response = client
            .post_form(
                "/sign-in",
                &[("username", "jane"), ("password", "correct horse")],
            )
            .await?;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/"));
        assert!(client.session_cookie().is_some());

        let purchase = client.get("/purchase").await?;
        assert_eq!(purchase.status, StatusCode::OK);

        Ok(())
    }

    /// Expect the session ID to change when signing in
    #[tokio::test]
    async fn cycles_session_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        // Leaves a notice in session so a cookie is issued before signing in
        client
            .post_form("/sign-up", &sign_up_fields("jane", "jane@example.com"))
            .await?;
        let before = client.session_cookie().map(str::to_string);

        client
            .post_form(
                "/sign-in",
                &[("username", "jane"), ("password", "correct horse")],
            )
            .await?;

        assert!(before.is_some());
        assert_ne!(client.session_cookie().map(str::to_string), before);

        Ok(())
    }

    /// Expect 200 with an error notice for a wrong password
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_dealership_tables().build().await?;
        let mut client = test.client();

        client
            .post_form("/sign-up", &sign_up_fields("jane", "jane@example.com"))
            .await?;

        let response = client
            .post_form("/sign-in", &[("username", "jane"), ("password", "wrong")])
            .await?;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.text().contains("Invalid username or password."));

        let purchase = client.get("/purchase").await?;
        assert_eq!(purchase.status, StatusCode::FOUND);

        Ok(())
    }

    /// Expect 200 for unknown users, empty forms and a missing schema
    #[tokio::test]
    async fn never_returns_server_error() -> Result<(), TestError> {
        let with_tables = TestBuilder::new().with_dealership_tables().build().await?;
        let without_tables = TestBuilder::new().build().await?;

        for test in [with_tables, without_tables] {
            let mut client = test.client();

            let unknown = client
                .post_form("/sign-in", &[("username", "nobody"), ("password", "x")])
                .await?;
            let empty = client.post_form("/sign-in", &[]).await?;

            assert_eq!(unknown.status, StatusCode::OK);
            assert_eq!(empty.status, StatusCode::OK);
        }

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect the session to be cleared so protected pages redirect again
    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;

        assert_eq!(client.get("/purchase").await?.status, StatusCode::OK);

        let response = client.get("/logout").await?;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/sign-in"));
        assert!(client.session_cookie().is_none());

        let purchase = client.get("/purchase").await?;
        assert_eq!(purchase.status, StatusCode::FOUND);

        Ok(())
    }

    /// Expect a redirect to sign-in even when nobody is signed in
    #[tokio::test]
    async fn redirects_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let mut client = test.client();

        let response = client.get("/logout").await?;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/sign-in"));

        Ok(())
    }

    /// Expect the session to be gone server side, not only the cookie
    #[tokio::test]
    async fn old_cookie_is_no_longer_signed_in() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();
        client.set_session_username("user1").await?;
        let cookie = client.session_cookie().map(str::to_string);

        client.get("/logout").await?;
        client.restore_cookie(cookie);

        let purchase = client.get("/purchase").await?;
        assert_eq!(purchase.status, StatusCode::FOUND);

        Ok(())
    }
}

mod forgot_password {
    use super::*;

    /// Expect the same acknowledgement for known and unknown addresses
    #[tokio::test]
    async fn acknowledges_uniformly() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_dealership_tables()
            .with_user("user1")
            .build()
            .await?;
        let mut client = test.client();

        let known = client
            .post_form("/forgot-password", &[("email", "user1@example.com")])
            .await?;
        let unknown = client
            .post_form("/forgot-password", &[("email", "nobody@example.com")])
            .await?;

        assert_eq!(known.status, StatusCode::OK);
        assert_eq!(unknown.status, StatusCode::OK);
        assert!(known.text().contains("If an account exists"));
        assert_eq!(known.text(), unknown.text());

        Ok(())
    }
}
