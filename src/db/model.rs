//! Database row types for Diesel ORM.

use diesel::prelude::*;

use super::schema::students;

/// Database row for a student (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub id: i32,
    pub student_name: String,
    pub student_id: String,
}

/// Database row for a student (insertable / changeset). The primary key is
/// assigned by the store on insert.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = students)]
pub struct NewStudentRow {
    pub student_name: String,
    pub student_id: String,
}
