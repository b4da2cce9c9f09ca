use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::LastLogin)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fruits::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Fruits::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Fruits::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Fruits::Kind).string().not_null())
                    .col(ColumnDef::new(Fruits::Character).string().not_null())
                    .col(ColumnDef::new(Fruits::Abilities).string().not_null())
                    .col(ColumnDef::new(Fruits::OwnerUserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fruits_owner_user")
                            .from(Fruits::Table, Fruits::OwnerUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Reviews deliberately carry no foreign key on fruit_id: deleting a
        // fruit must succeed and leave its reviews behind.
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reviews::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reviews::FruitId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Comment).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_fruit_id")
                    .table(Reviews::Table)
                    .col(Reviews::FruitId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fruits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    LastLogin,
}

#[derive(DeriveIden)]
enum Fruits {
    Table,
    Id,
    Name,
    Kind,
    Character,
    Abilities,
    OwnerUserId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    FruitId,
    Rating,
    Comment,
}
