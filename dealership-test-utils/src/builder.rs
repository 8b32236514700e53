//! Declarative test builder.
//!
//! The builder pattern allows chaining configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up the database schema and queues user and vehicle fixtures. Methods can be chained
/// together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_dealership_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    vehicles: Vec<(String, String, i32, i64, i32)>, // (make, model, year, price_cents, stock)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_dealership_tables: false,
            users: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Add every dealership table to the test database.
    ///
    /// Creates DealershipUser, Vehicle, VehicleOrder and UserPayment, in foreign key order.
    pub fn with_dealership_tables(mut self) -> Self {
        self.include_dealership_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dealership_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), dealership_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(DealershipUser)
    ///     .with_table(Vehicle)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given username during `build()`.
    ///
    /// See [`UserFixtures::insert_user`](crate::fixtures::user::UserFixtures::insert_user) for the
    /// values of the other fields.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a vehicle during `build()`.
    pub fn with_vehicle(
        mut self,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price_cents: i64,
        stock: i32,
    ) -> Self {
        self.vehicles
            .push((make.into(), model.into(), year, price_cents, stock));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_dealership_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::DealershipUser),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::VehicleOrder),
                schema.create_table_from_entity(entity::prelude::UserPayment),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for (make, model, year, price_cents, stock) in self.vehicles {
            setup
                .vehicle()
                .insert_vehicle(&make, &model, year, price_cents, stock)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
