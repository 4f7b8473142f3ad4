use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)] // Large migration requires extensive table definitions
    #[allow(clippy::match_wildcard_for_single_variants)] // Wildcard matches for unsupported databases are semantically correct
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enable UUID extension for PostgreSQL
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("CREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";")
                .await?;
        }

        // Create custom types for PostgreSQL (will be ignored by SQLite)
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .create_type(
                    Type::create()
                        .as_enum(UserRole::Table)
                        .values([
                            UserRole::Admin,
                            UserRole::User,
                            UserRole::Engineer,
                            UserRole::Operator,
                            UserRole::Supervisor,
                            UserRole::Analyst,
                            UserRole::Viewer,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(ContractStatus::Table)
                        .values([
                            ContractStatus::Active,
                            ContractStatus::Completed,
                            ContractStatus::Cancelled,
                            ContractStatus::Suspended,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(ContractType::Table)
                        .values([
                            ContractType::Drilling,
                            ContractType::Completion,
                            ContractType::Workover,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(WellType::Table)
                        .values([
                            WellType::Vertical,
                            WellType::Horizontal,
                            WellType::Direccional,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(WellOperation::Table)
                        .values([
                            WellOperation::Drilling,
                            WellOperation::Completion,
                            WellOperation::Testing,
                            WellOperation::Production,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(DrillingStatus::Table)
                        .values([
                            DrillingStatus::Drilling,
                            DrillingStatus::Tripping,
                            DrillingStatus::Maintenance,
                            DrillingStatus::Waiting,
                        ])
                        .to_owned(),
                )
                .await?;

            manager
                .create_type(
                    Type::create()
                        .as_enum(WorkShift::Table)
                        .values([WorkShift::Day, WorkShift::Night])
                        .to_owned(),
                )
                .await?;
        }

        // Create users table
        let mut users_table = Table::create()
            .table(Users::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Users::Email)
                    .text()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Users::Name).text().not_null())
            .col(ColumnDef::new(Users::PasswordHash).text().not_null())
            .col(
                ColumnDef::new(Users::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Users::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        // Add ID and enum columns with appropriate types based on database backend
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                users_table.col(
                    ColumnDef::new(Users::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
                users_table.col(
                    ColumnDef::new(Users::Role)
                        .custom(UserRole::Table)
                        .not_null(),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                users_table.col(ColumnDef::new(Users::Id).uuid().not_null().primary_key());
                users_table.col(ColumnDef::new(Users::Role).text().not_null());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(users_table).await?;

        // Create clients table
        let mut clients_table = Table::create()
            .table(Clients::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Clients::Name)
                    .text()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Clients::Email).text())
            .col(ColumnDef::new(Clients::Phone).text())
            .col(ColumnDef::new(Clients::Address).text())
            .col(ColumnDef::new(Clients::Logo).text())
            .col(ColumnDef::new(Clients::ContactName).text())
            .col(ColumnDef::new(Clients::ContactEmail).text())
            .col(ColumnDef::new(Clients::ContactPhone).text())
            .col(
                ColumnDef::new(Clients::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Clients::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                clients_table.col(
                    ColumnDef::new(Clients::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                clients_table.col(ColumnDef::new(Clients::Id).uuid().not_null().primary_key());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(clients_table).await?;

        // Create contracts table
        let mut contracts_table = Table::create()
            .table(Contracts::Table)
            .if_not_exists()
            .col(ColumnDef::new(Contracts::Name).text().not_null())
            .col(ColumnDef::new(Contracts::Description).text())
            .col(
                ColumnDef::new(Contracts::ContractNumber)
                    .text()
                    .unique_key(),
            )
            .col(
                ColumnDef::new(Contracts::StartDate)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Contracts::EndDate)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Contracts::Value)
                    .decimal_len(14, 2)
                    .not_null(),
            )
            .col(ColumnDef::new(Contracts::Currency).text())
            .col(ColumnDef::new(Contracts::TargetDepth).double())
            .col(ColumnDef::new(Contracts::ExpectedDays).integer())
            .col(ColumnDef::new(Contracts::DailyRate).decimal_len(14, 2))
            .col(ColumnDef::new(Contracts::ClientId).uuid().not_null())
            .col(ColumnDef::new(Contracts::UserId).uuid().not_null())
            .col(
                ColumnDef::new(Contracts::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Contracts::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_contracts_client_id")
                    .from(Contracts::Table, Contracts::ClientId)
                    .to(Clients::Table, Clients::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_contracts_user_id")
                    .from(Contracts::Table, Contracts::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                contracts_table.col(
                    ColumnDef::new(Contracts::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
                contracts_table.col(
                    ColumnDef::new(Contracts::Status)
                        .custom(ContractStatus::Table)
                        .not_null(),
                );
                contracts_table.col(
                    ColumnDef::new(Contracts::ContractType).custom(ContractType::Table),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                contracts_table.col(
                    ColumnDef::new(Contracts::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                );
                contracts_table.col(ColumnDef::new(Contracts::Status).text().not_null());
                contracts_table.col(ColumnDef::new(Contracts::ContractType).text());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(contracts_table).await?;

        // Create contract_activities table
        let mut contract_activities_table = Table::create()
            .table(ContractActivities::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ContractActivities::ContractId)
                    .uuid()
                    .not_null(),
            )
            .col(ColumnDef::new(ContractActivities::Name).text().not_null())
            .col(ColumnDef::new(ContractActivities::Description).text())
            .col(
                ColumnDef::new(ContractActivities::Category)
                    .text()
                    .not_null(),
            )
            .col(ColumnDef::new(ContractActivities::Unit).text().not_null())
            .col(ColumnDef::new(ContractActivities::TargetValue).double())
            .col(
                ColumnDef::new(ContractActivities::Priority)
                    .integer()
                    .not_null()
                    .default(1),
            )
            .col(
                ColumnDef::new(ContractActivities::IsActive)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .col(ColumnDef::new(ContractActivities::MinRate).double())
            .col(ColumnDef::new(ContractActivities::MaxRate).double())
            .col(ColumnDef::new(ContractActivities::OptimalRate).double())
            .col(
                ColumnDef::new(ContractActivities::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(ContractActivities::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_contract_activities_contract_id")
                    .from(ContractActivities::Table, ContractActivities::ContractId)
                    .to(Contracts::Table, Contracts::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                contract_activities_table.col(
                    ColumnDef::new(ContractActivities::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                contract_activities_table.col(
                    ColumnDef::new(ContractActivities::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                );
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(contract_activities_table).await?;

        // Create fields table
        let mut fields_table = Table::create()
            .table(Fields::Table)
            .if_not_exists()
            .col(ColumnDef::new(Fields::Name).text().not_null())
            .col(ColumnDef::new(Fields::Location).text().not_null())
            .col(ColumnDef::new(Fields::Description).text())
            .col(ColumnDef::new(Fields::ContractId).uuid().not_null())
            .col(
                ColumnDef::new(Fields::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Fields::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_fields_contract_id")
                    .from(Fields::Table, Fields::ContractId)
                    .to(Contracts::Table, Contracts::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                fields_table.col(
                    ColumnDef::new(Fields::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                fields_table.col(ColumnDef::new(Fields::Id).uuid().not_null().primary_key());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(fields_table).await?;

        // Create wells table
        let mut wells_table = Table::create()
            .table(Wells::Table)
            .if_not_exists()
            .col(ColumnDef::new(Wells::Name).text().not_null())
            .col(ColumnDef::new(Wells::Location).text().not_null())
            .col(ColumnDef::new(Wells::Status).text())
            .col(ColumnDef::new(Wells::Depth).double())
            .col(ColumnDef::new(Wells::Diameter).double())
            .col(ColumnDef::new(Wells::Latitude).double())
            .col(ColumnDef::new(Wells::Longitude).double())
            .col(ColumnDef::new(Wells::InitialDate).timestamp_with_time_zone())
            .col(ColumnDef::new(Wells::FinalDepth).double())
            .col(ColumnDef::new(Wells::RopAverage).double())
            .col(ColumnDef::new(Wells::ElapsedDays).integer())
            .col(ColumnDef::new(Wells::Formation).text())
            .col(ColumnDef::new(Wells::HoleSection).text())
            .col(ColumnDef::new(Wells::Lithology).text())
            .col(ColumnDef::new(Wells::BudgetAfe).decimal_len(14, 2))
            .col(ColumnDef::new(Wells::ActualCost).decimal_len(14, 2))
            .col(ColumnDef::new(Wells::DailyRate).decimal_len(14, 2))
            .col(ColumnDef::new(Wells::UserId).uuid().not_null())
            .col(ColumnDef::new(Wells::FieldId).uuid())
            .col(
                ColumnDef::new(Wells::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Wells::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_wells_user_id")
                    .from(Wells::Table, Wells::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_wells_field_id")
                    .from(Wells::Table, Wells::FieldId)
                    .to(Fields::Table, Fields::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                wells_table.col(
                    ColumnDef::new(Wells::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
                wells_table.col(ColumnDef::new(Wells::WellType).custom(WellType::Table));
                wells_table.col(ColumnDef::new(Wells::Operation).custom(WellOperation::Table));
            }
            sea_orm::DatabaseBackend::Sqlite => {
                wells_table.col(ColumnDef::new(Wells::Id).uuid().not_null().primary_key());
                wells_table.col(ColumnDef::new(Wells::WellType).text());
                wells_table.col(ColumnDef::new(Wells::Operation).text());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(wells_table).await?;

        // Create drilling_plans table
        let mut drilling_plans_table = Table::create()
            .table(DrillingPlans::Table)
            .if_not_exists()
            .col(ColumnDef::new(DrillingPlans::WellId).uuid().not_null())
            .col(ColumnDef::new(DrillingPlans::Day).integer().not_null())
            .col(
                ColumnDef::new(DrillingPlans::DepthFrom)
                    .double()
                    .not_null(),
            )
            .col(ColumnDef::new(DrillingPlans::DepthTo).double().not_null())
            .col(
                ColumnDef::new(DrillingPlans::PlannedRop)
                    .double()
                    .not_null(),
            )
            .col(
                ColumnDef::new(DrillingPlans::PlannedHours)
                    .double()
                    .not_null(),
            )
            .col(ColumnDef::new(DrillingPlans::Formation).text())
            .col(ColumnDef::new(DrillingPlans::HoleSection).text())
            .col(ColumnDef::new(DrillingPlans::Operation).text())
            .col(ColumnDef::new(DrillingPlans::MudType).text())
            .col(ColumnDef::new(DrillingPlans::MudDensity).double())
            .col(ColumnDef::new(DrillingPlans::BitType).text())
            .col(ColumnDef::new(DrillingPlans::BitSize).double())
            .col(ColumnDef::new(DrillingPlans::FlowRate).double())
            .col(ColumnDef::new(DrillingPlans::RotarySpeed).double())
            .col(ColumnDef::new(DrillingPlans::WeightOnBit).double())
            .col(
                ColumnDef::new(DrillingPlans::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(DrillingPlans::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_drilling_plans_well_id")
                    .from(DrillingPlans::Table, DrillingPlans::WellId)
                    .to(Wells::Table, Wells::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .index(
                Index::create()
                    .name("drilling_plans_well_day_unique")
                    .col(DrillingPlans::WellId)
                    .col(DrillingPlans::Day)
                    .unique(),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                drilling_plans_table.col(
                    ColumnDef::new(DrillingPlans::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                drilling_plans_table.col(
                    ColumnDef::new(DrillingPlans::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                );
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(drilling_plans_table).await?;

        // Create drilling_data table
        let mut drilling_data_table = Table::create()
            .table(DrillingData::Table)
            .if_not_exists()
            .col(ColumnDef::new(DrillingData::WellId).uuid().not_null())
            .col(ColumnDef::new(DrillingData::Day).integer().not_null())
            .col(
                ColumnDef::new(DrillingData::Date)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(ColumnDef::new(DrillingData::Depth).double().not_null())
            .col(ColumnDef::new(DrillingData::Rop).double())
            .col(ColumnDef::new(DrillingData::DrillingTime).double())
            .col(ColumnDef::new(DrillingData::Crew).text())
            .col(ColumnDef::new(DrillingData::MudDensity).double())
            .col(ColumnDef::new(DrillingData::Pressure).double())
            .col(ColumnDef::new(DrillingData::Temperature).double())
            .col(ColumnDef::new(DrillingData::Formation).text())
            .col(ColumnDef::new(DrillingData::HoleSection).text())
            .col(ColumnDef::new(DrillingData::Operation).text())
            .col(
                ColumnDef::new(DrillingData::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(DrillingData::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_drilling_data_well_id")
                    .from(DrillingData::Table, DrillingData::WellId)
                    .to(Wells::Table, Wells::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .index(
                Index::create()
                    .name("drilling_data_well_day_unique")
                    .col(DrillingData::WellId)
                    .col(DrillingData::Day)
                    .unique(),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                drilling_data_table.col(
                    ColumnDef::new(DrillingData::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
                drilling_data_table
                    .col(ColumnDef::new(DrillingData::Status).custom(DrillingStatus::Table));
                drilling_data_table
                    .col(ColumnDef::new(DrillingData::Shift).custom(WorkShift::Table));
            }
            sea_orm::DatabaseBackend::Sqlite => {
                drilling_data_table.col(
                    ColumnDef::new(DrillingData::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                );
                drilling_data_table.col(ColumnDef::new(DrillingData::Status).text());
                drilling_data_table.col(ColumnDef::new(DrillingData::Shift).text());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(drilling_data_table).await?;

        // Create production_data table
        let mut production_data_table = Table::create()
            .table(ProductionData::Table)
            .if_not_exists()
            .col(ColumnDef::new(ProductionData::WellId).uuid().not_null())
            .col(
                ColumnDef::new(ProductionData::Production)
                    .double()
                    .not_null(),
            )
            .col(ColumnDef::new(ProductionData::Pressure).double())
            .col(ColumnDef::new(ProductionData::Temperature).double())
            .col(
                ColumnDef::new(ProductionData::RecordDate)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(ProductionData::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(ProductionData::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_production_data_well_id")
                    .from(ProductionData::Table, ProductionData::WellId)
                    .to(Wells::Table, Wells::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                production_data_table.col(
                    ColumnDef::new(ProductionData::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                production_data_table.col(
                    ColumnDef::new(ProductionData::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                );
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(production_data_table).await?;

        // Create reports table
        let mut reports_table = Table::create()
            .table(Reports::Table)
            .if_not_exists()
            .col(ColumnDef::new(Reports::UserId).uuid().not_null())
            .col(ColumnDef::new(Reports::Title).text().not_null())
            .col(ColumnDef::new(Reports::ReportType).text())
            .col(ColumnDef::new(Reports::Parameters).json_binary())
            .col(ColumnDef::new(Reports::Content).json_binary())
            .col(
                ColumnDef::new(Reports::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Reports::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_reports_user_id")
                    .from(Reports::Table, Reports::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                reports_table.col(
                    ColumnDef::new(Reports::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("uuid_generate_v4()")),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                reports_table.col(ColumnDef::new(Reports::Id).uuid().not_null().primary_key());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(reports_table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductionData::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(DrillingData::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(DrillingPlans::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Wells::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fields::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ContractActivities::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Contracts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clients::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        // Drop enums for PostgreSQL
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(Type::drop().name(WorkShift::Table).if_exists().to_owned())
                .await?;
            manager
                .drop_type(
                    Type::drop()
                        .name(DrillingStatus::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    Type::drop()
                        .name(WellOperation::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(Type::drop().name(WellType::Table).if_exists().to_owned())
                .await?;
            manager
                .drop_type(
                    Type::drop()
                        .name(ContractType::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(
                    Type::drop()
                        .name(ContractStatus::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(Type::drop().name(UserRole::Table).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}

// All table and enum identifiers
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Role,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    Logo,
    ContactName,
    ContactEmail,
    ContactPhone,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    Name,
    Description,
    ContractNumber,
    StartDate,
    EndDate,
    Value,
    Currency,
    Status,
    ContractType,
    TargetDepth,
    ExpectedDays,
    DailyRate,
    ClientId,
    UserId,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum ContractActivities {
    Table,
    Id,
    ContractId,
    Name,
    Description,
    Category,
    Unit,
    TargetValue,
    Priority,
    IsActive,
    MinRate,
    MaxRate,
    OptimalRate,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Fields {
    Table,
    Id,
    Name,
    Location,
    Description,
    ContractId,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Wells {
    Table,
    Id,
    Name,
    Location,
    Status,
    Depth,
    Diameter,
    WellType,
    Operation,
    Latitude,
    Longitude,
    InitialDate,
    FinalDepth,
    RopAverage,
    ElapsedDays,
    Formation,
    HoleSection,
    Lithology,
    BudgetAfe,
    ActualCost,
    DailyRate,
    UserId,
    FieldId,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum DrillingPlans {
    Table,
    Id,
    WellId,
    Day,
    DepthFrom,
    DepthTo,
    PlannedRop,
    PlannedHours,
    Formation,
    HoleSection,
    Operation,
    MudType,
    MudDensity,
    BitType,
    BitSize,
    FlowRate,
    RotarySpeed,
    WeightOnBit,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum DrillingData {
    Table,
    Id,
    WellId,
    Day,
    Date,
    Depth,
    Rop,
    DrillingTime,
    Status,
    Shift,
    Crew,
    MudDensity,
    Pressure,
    Temperature,
    Formation,
    HoleSection,
    Operation,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum ProductionData {
    Table,
    Id,
    WellId,
    Production,
    Pressure,
    Temperature,
    RecordDate,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    UserId,
    Title,
    ReportType,
    Parameters,
    Content,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum UserRole {
    Table,
    Admin,
    User,
    Engineer,
    Operator,
    Supervisor,
    Analyst,
    Viewer,
}

#[derive(DeriveIden)]
enum ContractStatus {
    Table,
    Active,
    Completed,
    Cancelled,
    Suspended,
}

#[derive(DeriveIden)]
enum ContractType {
    Table,
    Drilling,
    Completion,
    Workover,
}

#[derive(DeriveIden)]
enum WellType {
    Table,
    Vertical,
    Horizontal,
    Direccional,
}

#[derive(DeriveIden)]
enum WellOperation {
    Table,
    Drilling,
    Completion,
    Testing,
    Production,
}

#[derive(DeriveIden)]
enum DrillingStatus {
    Table,
    Drilling,
    Tripping,
    Maintenance,
    Waiting,
}

#[derive(DeriveIden)]
enum WorkShift {
    Table,
    Day,
    Night,
}
