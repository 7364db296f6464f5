use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::server::{
    config::Config,
    data::{role::RoleRepository, shop_type::ShopTypeRepository, work_type::WorkTypeRepository},
    error::Error,
    model::auth::RoleName,
};

/// Shop categories a shop or its stock can be filed under.
static SHOP_TYPE_NAMES: [&str; 3] = ["Electrical", "Plumbing", "Raw Material"];

/// Work types available to professions and job postings out of the box.
static WORK_TYPE_NAMES: [&str; 5] = ["Mason", "Plumber", "Electrician", "Painter", "Carpenter"];

/// Connect to the database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Creates any application table that does not exist yet, in foreign key
/// dependency order.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), Error> {
    let schema = Schema::new(db.get_database_backend());

    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Role),
        schema.create_table_from_entity(entity::prelude::WorkType),
        schema.create_table_from_entity(entity::prelude::ShopType),
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::UserRole),
        schema.create_table_from_entity(entity::prelude::Verification),
        schema.create_table_from_entity(entity::prelude::Address),
        schema.create_table_from_entity(entity::prelude::Shop),
        schema.create_table_from_entity(entity::prelude::ShopCategory),
        schema.create_table_from_entity(entity::prelude::MaterialStock),
        schema.create_table_from_entity(entity::prelude::Profession),
        schema.create_table_from_entity(entity::prelude::Job),
        schema.create_table_from_entity(entity::prelude::JobAcceptor),
    ];

    for mut stmt in stmts {
        stmt.if_not_exists();
        db.execute(&stmt).await?;
    }

    Ok(())
}

/// Seeds the fixed role, shop category, and work type vocabulary.
///
/// Names already present are left untouched, so reseeding on every boot is
/// safe.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<(), Error> {
    let role_repository = RoleRepository::new(db);
    for role in RoleName::ALL {
        if role_repository.find_by_name(role.as_str()).await?.is_none() {
            role_repository.create(role.as_str()).await?;
        }
    }

    let shop_type_repository = ShopTypeRepository::new(db);
    for name in SHOP_TYPE_NAMES {
        if shop_type_repository.find_by_name(name).await?.is_none() {
            shop_type_repository.create(name).await?;
        }
    }

    let work_type_repository = WorkTypeRepository::new(db);
    for name in WORK_TYPE_NAMES {
        if work_type_repository.find_by_name(name).await?.is_none() {
            work_type_repository.create(name).await?;
        }
    }

    Ok(())
}
