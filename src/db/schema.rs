table! {
    use diesel::sql_types::*;

    flashcards (id) {
        id -> Integer,
        question -> Text,
        answer -> Text,
        is_done -> Bool,
        created_at -> Timestamp,
        posted_by_id -> Integer,
    }
}

table! {
    use diesel::sql_types::*;

    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        password -> Text,
    }
}

joinable!(flashcards -> users (posted_by_id));

allow_tables_to_appear_in_same_query!(
    flashcards,
    users,
);
