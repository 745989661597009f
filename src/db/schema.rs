diesel::table! {
    students (id) {
        id -> Integer,
        student_name -> Text,
        student_id -> Text,
    }
}
