use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Role {
    pub id: i32,
    pub name: String,
}
