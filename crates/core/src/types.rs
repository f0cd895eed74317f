/// Category primary keys are PostgreSQL UUIDs generated by the database.
pub type DbId = uuid::Uuid;
