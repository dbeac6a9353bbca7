use brandwatch_application::ports::BrandRepository;
use brandwatch_domain::{Brand, NewBrand, NewDomain};
use brandwatch_infrastructure::database::{create_pool, IN_MEMORY_DATABASE};
use sqlx::SqlitePool;

pub async fn create_test_db() -> SqlitePool {
    create_pool(IN_MEMORY_DATABASE, 1).await.unwrap()
}

#[allow(dead_code)]
pub fn new_brand(name: &str, code: &str) -> NewBrand {
    NewBrand {
        name: name.to_string(),
        code: code.to_string(),
        description: format!("{} Brand", name),
        color: "#3B82F6".to_string(),
        created_by: "alice".to_string(),
    }
}

#[allow(dead_code)]
pub async fn seed_brand(repo: &dyn BrandRepository, name: &str, code: &str) -> Brand {
    repo.create(new_brand(name, code)).await.unwrap()
}

#[allow(dead_code)]
pub fn new_domain(key: &str, brand_id: i64) -> NewDomain {
    NewDomain {
        domain: key.to_string(),
        brand_id,
        note: None,
        created_by: "alice".to_string(),
    }
}
