//! Migration: Create the personas table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Personas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Personas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Personas::Nombre)
                            .string_len(45)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Personas::Apellido)
                            .string_len(45)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Personas::Email).string_len(45).not_null())
                    .col(
                        ColumnDef::new(Personas::Telefono)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Personas::Direccion)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for the partial-match search endpoints
        manager
            .create_index(
                Index::create()
                    .name("idx_personas_nombre")
                    .table(Personas::Table)
                    .col(Personas::Nombre)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_personas_apellido")
                    .table(Personas::Table)
                    .col(Personas::Apellido)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Personas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Personas {
    Table,
    Id,
    Nombre,
    Apellido,
    Email,
    Telefono,
    Direccion,
}
