use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============ USERS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_created_at")
                    .table(Users::Table)
                    .col(Users::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // ============ CLIENTS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_clients_created_at")
                    .table(Clients::Table)
                    .col(Clients::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Clients fulltext index
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "CREATE INDEX idx_clients_fulltext ON clients USING GIN (to_tsvector('english', name || ' ' || coalesce(contact_name, '')))"
                )
                .await?;
        }

        // ============ CONTRACTS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_client_id")
                    .table(Contracts::Table)
                    .col(Contracts::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_user_id")
                    .table(Contracts::Table)
                    .col(Contracts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_status")
                    .table(Contracts::Table)
                    .col(Contracts::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_start_date")
                    .table(Contracts::Table)
                    .col(Contracts::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_created_at")
                    .table(Contracts::Table)
                    .col(Contracts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Contracts fulltext index
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "CREATE INDEX idx_contracts_fulltext ON contracts USING GIN (to_tsvector('english', name || ' ' || coalesce(description, '')))"
                )
                .await?;
        }

        // ============ CONTRACT ACTIVITIES TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_contract_activities_contract_id")
                    .table(ContractActivities::Table)
                    .col(ContractActivities::ContractId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contract_activities_category")
                    .table(ContractActivities::Table)
                    .col(ContractActivities::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contract_activities_is_active")
                    .table(ContractActivities::Table)
                    .col(ContractActivities::IsActive)
                    .to_owned(),
            )
            .await?;

        // ============ FIELDS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_fields_contract_id")
                    .table(Fields::Table)
                    .col(Fields::ContractId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fields_created_at")
                    .table(Fields::Table)
                    .col(Fields::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // ============ WELLS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_wells_user_id")
                    .table(Wells::Table)
                    .col(Wells::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wells_field_id")
                    .table(Wells::Table)
                    .col(Wells::FieldId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wells_status")
                    .table(Wells::Table)
                    .col(Wells::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wells_operation")
                    .table(Wells::Table)
                    .col(Wells::Operation)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wells_created_at")
                    .table(Wells::Table)
                    .col(Wells::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Wells fulltext index
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "CREATE INDEX idx_wells_fulltext ON wells USING GIN (to_tsvector('english', name || ' ' || location || ' ' || coalesce(formation, '')))"
                )
                .await?;
        }

        // ============ DRILLING SERIES INDEXES ============
        // (well_id, day) lookups are covered by the unique constraints from the
        // initial schema; these cover date-ordered and recency scans.
        manager
            .create_index(
                Index::create()
                    .name("idx_drilling_plans_created_at")
                    .table(DrillingPlans::Table)
                    .col(DrillingPlans::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drilling_data_date")
                    .table(DrillingData::Table)
                    .col(DrillingData::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drilling_data_created_at")
                    .table(DrillingData::Table)
                    .col(DrillingData::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // ============ PRODUCTION DATA TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_production_data_well_id")
                    .table(ProductionData::Table)
                    .col(ProductionData::WellId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_production_data_record_date")
                    .table(ProductionData::Table)
                    .col(ProductionData::RecordDate)
                    .to_owned(),
            )
            .await?;

        // ============ REPORTS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_user_id")
                    .table(Reports::Table)
                    .col(Reports::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_report_type")
                    .table(Reports::Table)
                    .col(Reports::ReportType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let reports_indexes = ["idx_reports_report_type", "idx_reports_user_id"];
        for name in reports_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Reports::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        let production_data_indexes = [
            "idx_production_data_record_date",
            "idx_production_data_well_id",
        ];
        for name in production_data_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(ProductionData::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        let drilling_data_indexes = ["idx_drilling_data_created_at", "idx_drilling_data_date"];
        for name in drilling_data_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(DrillingData::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        manager
            .drop_index(
                Index::drop()
                    .name("idx_drilling_plans_created_at")
                    .table(DrillingPlans::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
            .ok();

        let wells_indexes = [
            "idx_wells_created_at",
            "idx_wells_operation",
            "idx_wells_status",
            "idx_wells_field_id",
            "idx_wells_user_id",
        ];
        for name in wells_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Wells::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        let fields_indexes = ["idx_fields_created_at", "idx_fields_contract_id"];
        for name in fields_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Fields::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        let contract_activities_indexes = [
            "idx_contract_activities_is_active",
            "idx_contract_activities_category",
            "idx_contract_activities_contract_id",
        ];
        for name in contract_activities_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(ContractActivities::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        let contracts_indexes = [
            "idx_contracts_created_at",
            "idx_contracts_start_date",
            "idx_contracts_status",
            "idx_contracts_user_id",
            "idx_contracts_client_id",
        ];
        for name in contracts_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Contracts::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        manager
            .drop_index(
                Index::drop()
                    .name("idx_clients_created_at")
                    .table(Clients::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
            .ok();

        let users_indexes = ["idx_users_created_at", "idx_users_role"];
        for name in users_indexes {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Users::Table)
                        .if_exists()
                        .to_owned(),
                )
                .await
                .ok();
        }

        // Drop PostgreSQL fulltext indexes if they exist
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            for name in [
                "idx_wells_fulltext",
                "idx_contracts_fulltext",
                "idx_clients_fulltext",
            ] {
                manager
                    .get_connection()
                    .execute_unprepared(&format!("DROP INDEX IF EXISTS {name}"))
                    .await
                    .ok();
            }
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    ClientId,
    UserId,
    Status,
    StartDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ContractActivities {
    Table,
    ContractId,
    Category,
    IsActive,
}

#[derive(DeriveIden)]
enum Fields {
    Table,
    ContractId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Wells {
    Table,
    UserId,
    FieldId,
    Status,
    Operation,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DrillingPlans {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DrillingData {
    Table,
    Date,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProductionData {
    Table,
    WellId,
    RecordDate,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    UserId,
    ReportType,
}
