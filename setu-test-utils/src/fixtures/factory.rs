//! Factory functions for inserting standard test rows.
//!
//! Each function inserts one row with fixed test values, taking only the
//! fields that tests need to vary. Rows are inserted directly through the
//! entity ActiveModels so the factories stay independent of the server crate.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::address::OwnerKind;

/// Insert a role with the given name.
pub async fn insert_role(db: &DatabaseConnection, name: &str) -> Result<entity::role::Model, DbErr> {
    let role = entity::role::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    };

    role.insert(db).await
}

/// Insert a work type with the given name.
pub async fn insert_work_type(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::work_type::Model, DbErr> {
    let work_type = entity::work_type::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    };

    work_type.insert(db).await
}

/// Insert a shop category with the given name.
pub async fn insert_shop_type(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::shop_type::Model, DbErr> {
    let shop_type = entity::shop_type::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    };

    shop_type.insert(db).await
}

/// Insert an active user with standard test values.
///
/// The stored password is a placeholder, not a real hash; tests exercising
/// login must create their user through the account service instead.
pub async fn insert_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    mobile: i64,
) -> Result<entity::user::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password: ActiveValue::Set("not-a-real-hash".to_string()),
        name: ActiveValue::Set("Test User".to_string()),
        mobile: ActiveValue::Set(mobile),
        email: ActiveValue::Set(email.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    };

    user.insert(db).await
}

/// Grant an existing role to an existing user.
pub async fn grant_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    let user_role = entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
        ..Default::default()
    };

    user_role.insert(db).await
}

/// Insert a verified email gate entry.
pub async fn insert_verification(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::verification::Model, DbErr> {
    let verification = entity::verification::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        otp: ActiveValue::Set(123456),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    verification.insert(db).await
}

/// Insert an active address for the given owner.
pub async fn insert_address(
    db: &DatabaseConnection,
    owner_kind: OwnerKind,
    owner_id: i32,
    city: &str,
) -> Result<entity::address::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let address = entity::address::ActiveModel {
        building_number: ActiveValue::Set(Some("12-B".to_string())),
        street: ActiveValue::Set(Some("Test Street".to_string())),
        village_area: ActiveValue::Set(None),
        city: ActiveValue::Set(city.to_string()),
        landmark: ActiveValue::Set("Test Landmark".to_string()),
        district: ActiveValue::Set("Test District".to_string()),
        state: ActiveValue::Set("Test State".to_string()),
        pincode: ActiveValue::Set(500001),
        owner_kind: ActiveValue::Set(owner_kind),
        owner_id: ActiveValue::Set(owner_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(Some(owner_id)),
        updated_by: ActiveValue::Set(Some(owner_id)),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    };

    address.insert(db).await
}

/// Insert an active shop owned by the given user.
pub async fn insert_shop(
    db: &DatabaseConnection,
    name: &str,
    user_id: i32,
) -> Result<entity::shop::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let shop = entity::shop::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        invented_year: ActiveValue::Set(2015),
        email: ActiveValue::Set(Some("shop@example.com".to_string())),
        telephone: ActiveValue::Set(None),
        mobile: ActiveValue::Set(Some(9_876_543_210)),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(Some(user_id)),
        updated_by: ActiveValue::Set(Some(user_id)),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    };

    shop.insert(db).await
}

/// Link a shop to a shop category.
pub async fn link_shop_category(
    db: &DatabaseConnection,
    shop_id: i32,
    shop_type_id: i32,
) -> Result<entity::shop_category::Model, DbErr> {
    let shop_category = entity::shop_category::ActiveModel {
        shop_id: ActiveValue::Set(shop_id),
        shop_type_id: ActiveValue::Set(shop_type_id),
        ..Default::default()
    };

    shop_category.insert(db).await
}

/// Insert an active material stock entry with standard test values.
pub async fn insert_material(
    db: &DatabaseConnection,
    shop_type_id: i32,
    shop_id: i32,
    name: &str,
    brand: &str,
) -> Result<entity::material_stock::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let material = entity::material_stock::ActiveModel {
        shop_type_id: ActiveValue::Set(shop_type_id),
        name: ActiveValue::Set(name.to_string()),
        stock: ActiveValue::Set("40 kg".to_string()),
        rate: ActiveValue::Set(250.0),
        brand: ActiveValue::Set(brand.to_string()),
        shop_id: ActiveValue::Set(shop_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    };

    material.insert(db).await
}

/// Insert an active, available profession with standard test values.
pub async fn insert_profession(
    db: &DatabaseConnection,
    work_type_id: i32,
    user_id: i32,
) -> Result<entity::profession::Model, DbErr> {
    insert_profession_with(db, work_type_id, user_id, 1500, true).await
}

/// Insert a profession with explicit salary and availability.
pub async fn insert_profession_with(
    db: &DatabaseConnection,
    work_type_id: i32,
    user_id: i32,
    expected_salary: i32,
    is_available: bool,
) -> Result<entity::profession::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let profession = entity::profession::ActiveModel {
        work_type_id: ActiveValue::Set(work_type_id),
        work_experience: ActiveValue::Set(5.0),
        expected_salary: ActiveValue::Set(expected_salary),
        is_available: ActiveValue::Set(is_available),
        gender: ActiveValue::Set("Male".to_string()),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(Some(user_id)),
        updated_by: ActiveValue::Set(Some(user_id)),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    };

    profession.insert(db).await
}

/// Insert an active job with standard test values.
pub async fn insert_job(
    db: &DatabaseConnection,
    work_type_id: i32,
    address_id: i32,
    requestor_id: i32,
    work_date: NaiveDate,
) -> Result<entity::job::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let job = entity::job::ActiveModel {
        work_type_id: ActiveValue::Set(work_type_id),
        number_of_workers: ActiveValue::Set(3),
        workers_remaining: ActiveValue::Set(3),
        work_date: ActiveValue::Set(work_date),
        working_days: ActiveValue::Set(5),
        work_pay: ActiveValue::Set(1500.0),
        address_id: ActiveValue::Set(address_id),
        requestor_id: ActiveValue::Set(requestor_id),
        job_status: ActiveValue::Set("open".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(Some(requestor_id)),
        updated_by: ActiveValue::Set(Some(requestor_id)),
        is_deleted: ActiveValue::Set(false),
        ..Default::default()
    };

    job.insert(db).await
}
